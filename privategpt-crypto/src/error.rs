//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while sealing or opening records.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The authentication tag did not verify. Covers bit-flip corruption
    /// of any part of the record and decryption under the wrong key
    /// (e.g. a record held across a key rotation). The record is
    /// unusable and should be treated as lost.
    #[error("integrity check failed (wrong key or tampered record)")]
    Integrity,

    #[error("encryption failed: {0}")]
    Encryption(String),
}
