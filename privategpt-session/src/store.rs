//! Keyed in-memory store of encrypted records.

use std::collections::HashMap;
use std::marker::PhantomData;

use privategpt_crypto::{decrypt, encrypt, EncryptedRecord, SessionKey};
use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::{Zeroize, Zeroizing};

use crate::error::SessionResult;

/// Map from caller-supplied string id to encrypted record.
///
/// Payloads are serialized to JSON and sealed under the session key
/// before insertion; plaintext never rests in the map. The message and
/// attachment stores are two instances of this type.
///
/// Ids must be unique per store instance — re-storing under an existing
/// id overwrites silently (last write wins). Only explicit [`remove`]
/// and [`clear`] scrub discarded records; a plain overwrite does not.
///
/// [`remove`]: EncryptedObjectStore::remove
/// [`clear`]: EncryptedObjectStore::clear
pub struct EncryptedObjectStore<T> {
    entries: HashMap<String, EncryptedRecord>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> EncryptedObjectStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _payload: PhantomData,
        }
    }

    /// Encrypts `payload` under `key` and inserts it at `id`,
    /// overwriting any previous record there.
    pub fn store(&mut self, key: &SessionKey, id: &str, payload: &T) -> SessionResult<()> {
        let plaintext = Zeroizing::new(serde_json::to_vec(payload)?);
        let record = encrypt(key, &plaintext)?;
        self.entries.insert(id.to_string(), record);
        Ok(())
    }

    /// Decrypts and returns the payload at `id`, or `Ok(None)` if absent.
    ///
    /// Propagates an integrity failure if the record outlived a key
    /// rotation or was corrupted; the intermediate plaintext buffer is
    /// scrubbed once deserialization is done.
    pub fn get(&self, key: &SessionKey, id: &str) -> SessionResult<Option<T>> {
        let Some(record) = self.entries.get(id) else {
            return Ok(None);
        };
        let plaintext = Zeroizing::new(decrypt(key, record)?);
        Ok(Some(serde_json::from_slice(&plaintext)?))
    }

    /// All currently stored ids, in no particular order.
    pub fn ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Decrypts every record, returning `(id, payload)` pairs.
    ///
    /// Used when the full set is needed at once, e.g. formatting every
    /// attachment for a single send.
    pub fn get_all(&self, key: &SessionKey) -> SessionResult<Vec<(String, T)>> {
        let mut all = Vec::with_capacity(self.entries.len());
        for (id, record) in &self.entries {
            let plaintext = Zeroizing::new(decrypt(key, record)?);
            all.push((id.clone(), serde_json::from_slice(&plaintext)?));
        }
        Ok(all)
    }

    /// Zeroes the record's nonce, tag, and ciphertext buffers, then
    /// deletes the entry. No-op if `id` is absent.
    pub fn remove(&mut self, id: &str) {
        if let Some(mut record) = self.entries.remove(id) {
            record.zeroize();
        }
    }

    /// Securely removes every entry.
    pub fn clear(&mut self) {
        for (_, mut record) in self.entries.drain() {
            record.zeroize();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for EncryptedObjectStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}
