//! Encrypted env file container.
//!
//! Layout, with no length prefixes:
//!
//! | Offset | Width    | Field                        |
//! |--------|----------|------------------------------|
//! | 0      | 4        | signature `\0env`            |
//! | 4      | 12       | nonce                        |
//! | 16     | variable | AES-256-GCM ciphertext ‖ tag |
//!
//! The leading NUL keeps the signature from colliding with text files. The
//! nonce is drawn from the OS random source on every encryption, because
//! the key depends only on the password and is reused across files.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::error::{EnvsError, Result};
use crate::key::derive_key;

/// Marker identifying an encrypted env file.
pub const SIGNATURE: &[u8; 4] = b"\0env";

/// AES-GCM nonce width in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag width in bytes.
pub const TAG_LEN: usize = 16;

/// Bytes preceding the ciphertext.
pub const HEADER_LEN: usize = SIGNATURE.len() + NONCE_LEN;

/// Smallest well-formed container (empty plaintext).
pub const MIN_CONTAINER_LEN: usize = HEADER_LEN + TAG_LEN;

/// Returns true if `data` starts with the container signature.
pub fn is_container(data: &[u8]) -> bool {
    data.starts_with(SIGNATURE)
}

/// Returns the bytes after the signature, or `None` if there is no signature.
pub fn strip_signature(data: &[u8]) -> Option<&[u8]> {
    data.strip_prefix(SIGNATURE.as_slice())
}

/// Encrypt `plaintext` under `password` into a complete container.
///
/// # Errors
///
/// Returns `EnvsError::Randomness` if the OS random source fails. The
/// nonce is never derived any other way.
///
/// # Examples
///
/// ```
/// use envs_core::container::{decrypt, encrypt, is_container, strip_signature};
///
/// let sealed = encrypt(b"SECRET=1\n", b"hunter2").unwrap();
/// assert!(is_container(&sealed));
///
/// let payload = strip_signature(&sealed).unwrap();
/// assert_eq!(decrypt(payload, b"hunter2").unwrap(), b"SECRET=1\n");
/// ```
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let key = derive_key(password);
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    let mut nonce = [0u8; NONCE_LEN];
    getrandom::getrandom(&mut nonce).map_err(|e| EnvsError::Randomness(e.to_string()))?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| EnvsError::Crypto(format!("Seal failed: {}", e)))?;

    let mut out = Vec::with_capacity(HEADER_LEN + sealed.len());
    out.extend_from_slice(SIGNATURE);
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Decrypt a container whose signature has already been stripped.
///
/// `payload` is `nonce ‖ ciphertext ‖ tag`.
///
/// # Errors
///
/// - `EnvsError::Format` if the payload cannot hold a nonce and a tag
/// - `EnvsError::Authentication` if the tag does not verify (wrong
///   password or altered bytes); no plaintext is returned
pub fn decrypt(payload: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    if payload.len() < NONCE_LEN + TAG_LEN {
        return Err(EnvsError::Format(format!(
            "expected at least {} bytes after signature, found {}",
            NONCE_LEN + TAG_LEN,
            payload.len()
        )));
    }
    let (nonce, ciphertext) = payload.split_at(NONCE_LEN);

    let key = derive_key(password);
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| EnvsError::Authentication)
}

/// Decrypt a complete container, signature included.
///
/// # Errors
///
/// Returns `EnvsError::Format` if the signature is missing, otherwise the
/// errors of [`decrypt`].
pub fn open(container: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let payload = strip_signature(container)
        .ok_or_else(|| EnvsError::Format("missing container signature".to_string()))?;
    decrypt(payload, password)
}
