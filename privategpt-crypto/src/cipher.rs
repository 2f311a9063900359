//! AES-256-GCM sealing and opening of in-memory records.
//!
//! Record layout: 16-byte nonce, 16-byte detached tag, ciphertext. The
//! triple is only meaningful together and only under the session key that
//! produced it. Records are never serialized or written anywhere.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce, Tag};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};
use crate::key::SessionKey;

/// Session key length in bytes (AES-256).
pub const KEY_SIZE: usize = 32;
/// Nonce length in bytes (128-bit GCM nonce).
pub const NONCE_SIZE: usize = 16;
/// Authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// AES-256-GCM with a 128-bit nonce, matching the record layout above.
type SessionCipher = AesGcm<Aes256, U16>;

/// One authenticated ciphertext held in memory.
///
/// Immutable once created. `Zeroize` is implemented so explicit removal
/// can scrub the buffers; there is deliberately no zeroize-on-drop, since
/// a plain overwrite in the store replaces the old record without a wipe.
#[derive(Clone, Zeroize)]
pub struct EncryptedRecord {
    pub nonce: [u8; NONCE_SIZE],
    pub tag: [u8; TAG_SIZE],
    pub ciphertext: Vec<u8>,
}

/// Encrypts `plaintext` under the session key.
///
/// Draws a fresh random nonce from the OS CSPRNG on every call; that
/// randomness is the sole mechanism preventing nonce reuse, and it is
/// sufficient because the key itself is rotated on every purge.
pub fn encrypt(key: &SessionKey, plaintext: &[u8]) -> CryptoResult<EncryptedRecord> {
    let cipher = SessionCipher::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut ciphertext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut tag_bytes = [0u8; TAG_SIZE];
    tag_bytes.copy_from_slice(tag.as_slice());

    Ok(EncryptedRecord {
        nonce,
        tag: tag_bytes,
        ciphertext,
    })
}

/// Decrypts a record under the session key.
///
/// Fails closed with [`CryptoError::Integrity`] if the tag does not
/// verify against the ciphertext, nonce, and key; altered plaintext is
/// never returned.
pub fn decrypt(key: &SessionKey, record: &EncryptedRecord) -> CryptoResult<Vec<u8>> {
    let cipher = SessionCipher::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut plaintext = record.ciphertext.clone();
    let verified = cipher.decrypt_in_place_detached(
        Nonce::from_slice(&record.nonce),
        b"",
        &mut plaintext,
        Tag::from_slice(&record.tag),
    );
    if verified.is_err() {
        // The buffer holds unauthenticated bytes at this point.
        plaintext.zeroize();
        return Err(CryptoError::Integrity);
    }

    Ok(plaintext)
}
