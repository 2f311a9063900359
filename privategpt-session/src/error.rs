//! Session store error types.

use thiserror::Error;

/// Result type for session store operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur storing or retrieving session payloads.
///
/// A missing id is not an error — `get` returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Decryption failed: the record was tampered with or outlived a key
    /// rotation. Callers must not hold records across a purge.
    #[error("crypto error: {0}")]
    Crypto(#[from] privategpt_crypto::CryptoError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
