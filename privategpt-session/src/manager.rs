//! Session manager — one key, two stores, explicit lifecycle.

use privategpt_crypto::SessionKey;
use tracing::debug;

use crate::error::SessionResult;
use crate::payload::{Attachment, Message};
use crate::store::EncryptedObjectStore;

/// Owns the session key and the message and attachment stores for one
/// process session.
///
/// All operations run on a single logical owner; encryption and
/// decryption are synchronous and payload-sized, so no streaming
/// interface is needed. The key is created at construction and replaced
/// (old bytes zeroed first) on every [`purge`].
///
/// [`purge`]: SessionManager::purge
pub struct SessionManager {
    key: SessionKey,
    messages: EncryptedObjectStore<Message>,
    attachments: EncryptedObjectStore<Attachment>,
}

impl SessionManager {
    /// Creates a session with a fresh random key and empty stores.
    pub fn new() -> Self {
        Self {
            key: SessionKey::generate(),
            messages: EncryptedObjectStore::new(),
            attachments: EncryptedObjectStore::new(),
        }
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// Stores a chat message under `id` (last write wins).
    pub fn store_message(&mut self, id: &str, message: &Message) -> SessionResult<()> {
        self.messages.store(&self.key, id, message)
    }

    /// Retrieves and decrypts a message, or `None` if absent.
    pub fn get_message(&self, id: &str) -> SessionResult<Option<Message>> {
        self.messages.get(&self.key, id)
    }

    pub fn message_ids(&self) -> Vec<String> {
        self.messages.ids()
    }

    // ------------------------------------------------------------------
    // Attachments
    // ------------------------------------------------------------------

    /// Stores an attachment under `id` (last write wins).
    pub fn store_attachment(&mut self, id: &str, attachment: &Attachment) -> SessionResult<()> {
        self.attachments.store(&self.key, id, attachment)
    }

    /// Retrieves and decrypts an attachment, or `None` if absent.
    pub fn get_attachment(&self, id: &str) -> SessionResult<Option<Attachment>> {
        self.attachments.get(&self.key, id)
    }

    /// Securely removes one attachment; no-op if absent.
    pub fn remove_attachment(&mut self, id: &str) {
        self.attachments.remove(id);
    }

    pub fn attachment_ids(&self) -> Vec<String> {
        self.attachments.ids()
    }

    /// Decrypts the full attachment set as `(id, payload)` pairs.
    pub fn attachments(&self) -> SessionResult<Vec<(String, Attachment)>> {
        self.attachments.get_all(&self.key)
    }

    /// Securely removes every attachment (e.g. when a new chat starts).
    pub fn clear_attachments(&mut self) {
        self.attachments.clear();
    }

    // ------------------------------------------------------------------
    // Purge
    // ------------------------------------------------------------------

    /// Scrubs and empties both stores, then rotates the session key.
    ///
    /// Afterwards every previously issued record is undecryptable even
    /// if a copy escaped the scrub pass, and the session is ready for
    /// continued use under the new key. Cannot fail.
    pub fn purge(&mut self) {
        self.messages.clear();
        self.attachments.clear();
        self.key.rotate();
        debug!("session purged: stores emptied, key rotated");
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
