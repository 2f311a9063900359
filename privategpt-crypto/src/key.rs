//! Session key lifecycle.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::KEY_SIZE;

/// 256-bit symmetric key scoped to one purge-to-purge interval of the
/// running process.
///
/// The raw bytes never leave this crate: only the cipher reads them, and
/// only for the duration of a single call. There is no serde impl and no
/// Debug impl on purpose. Dropping the key scrubs its storage.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKey([u8; KEY_SIZE]);

impl SessionKey {
    /// Generates a fresh random key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Zeroes the current key bytes in place, then replaces them with a
    /// freshly generated key.
    ///
    /// The in-place overwrite is a best-effort defense against code
    /// holding a stale borrow-era read of the buffer; it does not undo
    /// copies already made elsewhere.
    pub fn rotate(&mut self) {
        self.0.zeroize();
        OsRng.fill_bytes(&mut self.0);
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        let a = SessionKey::generate();
        let b = SessionKey::generate();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn rotation_never_reproduces_previous_key() {
        // Enough iterations to bound the false-pass probability at
        // cryptographic levels for a 256-bit CSPRNG output.
        let mut key = SessionKey::generate();
        for _ in 0..1000 {
            let before = *key.as_bytes();
            key.rotate();
            assert_ne!(before, *key.as_bytes());
        }
    }

    #[test]
    fn rotated_key_is_not_all_zeroes() {
        let mut key = SessionKey::generate();
        key.rotate();
        assert_ne!(*key.as_bytes(), [0u8; KEY_SIZE]);
    }
}
