//! Ephemeral encrypted session store for PrivateGPT.
//!
//! Holds transient chat messages and user-attached file data in memory
//! only, encrypted under a per-session key. Nothing here is ever written
//! to durable storage; the confidentiality boundary is that no chat
//! content or attachment bytes are recoverable from disk.
//!
//! The [`SessionManager`] is an explicit context object (no ambient
//! globals): one session key plus two keyed stores, with a
//! `new()`/`purge()` lifecycle. The surrounding shell hands in plaintext
//! payloads and caller-chosen ids, and gets decrypted payloads back; it
//! must not cache decrypted payloads beyond one use if it wants purge to
//! make the data unrecoverable in practice.

mod error;
mod manager;
mod payload;
mod store;

pub use error::{SessionError, SessionResult};
pub use manager::SessionManager;
pub use payload::{Attachment, AttachmentKind, Message};
pub use store::EncryptedObjectStore;
