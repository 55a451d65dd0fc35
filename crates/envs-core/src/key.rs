//! Password to key derivation.
//!
//! The key is the SHA-256 digest of the password. There is no salt: an env
//! file is encrypted and decrypted in unrelated invocations that share
//! nothing but the password, so the mapping must be stable.

use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

/// Length of derived key in bytes (32 bytes = AES-256).
pub const KEY_LENGTH: usize = 32;

/// A symmetric key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive the container key from a password.
///
/// Same password always produces the same key.
///
/// # Examples
///
/// ```
/// use envs_core::key::derive_key;
///
/// let a = derive_key(b"hunter2");
/// let b = derive_key(b"hunter2");
/// assert_eq!(a.as_bytes(), b.as_bytes());
/// ```
pub fn derive_key(password: &[u8]) -> DerivedKey {
    let digest = Sha256::digest(password);
    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&digest);
    DerivedKey { key }
}
