//! Encryption layer for PrivateGPT's ephemeral session.
//!
//! Provides the in-memory session cipher:
//! - AES-256-GCM for authenticated encryption (128-bit nonce and tag)
//! - One random 256-bit session key per process session
//! - Zero-and-regenerate key rotation on purge
//!
//! Nothing in this crate touches durable storage. Keys are drawn from the
//! OS CSPRNG, live only in process memory, and are scrubbed on drop.
//! Scrubbing is best-effort: it overwrites the buffers this crate owns,
//! not any copies the compiler or allocator may have made elsewhere.

mod cipher;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, EncryptedRecord, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::SessionKey;
