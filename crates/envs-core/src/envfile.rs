//! Decrypt-then-parse pipeline for env files.
//!
//! A file's bytes are classified by signature. Encrypted files are opened
//! with the supplied password and their plaintext parsed; plain files are
//! parsed as-is. Where the password comes from is the caller's concern.

use crate::container;
use crate::error::{EnvsError, Result};
use crate::vars::{self, Assignment};

/// Decode the raw bytes of an env file.
///
/// `password` is only consulted when `data` is a container. Callers that
/// want to prompt lazily can check [`container::is_container`] first.
///
/// # Errors
///
/// - `EnvsError::PasswordRequired` if `data` is encrypted and `password` is `None`
/// - any container error (`Format`, `Authentication`)
/// - any parser error (`Parse`, `InvalidUtf8`)
///
/// # Examples
///
/// ```
/// use envs_core::container::encrypt;
/// use envs_core::envfile::decode;
///
/// let plain = decode(b"A=1\n", None).unwrap();
/// assert_eq!(plain[0].key, "A");
///
/// let sealed = encrypt(b"B=2\n", b"pw").unwrap();
/// let opened = decode(&sealed, Some(b"pw")).unwrap();
/// assert_eq!(opened[0].value, "2");
/// ```
pub fn decode(data: &[u8], password: Option<&[u8]>) -> Result<Vec<Assignment>> {
    match container::strip_signature(data) {
        Some(payload) => {
            let password = password.ok_or(EnvsError::PasswordRequired)?;
            let plaintext = container::decrypt(payload, password)?;
            vars::parse(&plaintext)
        }
        None => vars::parse(data),
    }
}

/// Validate `plaintext` as env file text, then encrypt it.
///
/// Returns the parsed assignments together with the container bytes.
/// Text that does not parse is never encrypted.
pub fn seal(plaintext: &[u8], password: &[u8]) -> Result<(Vec<Assignment>, Vec<u8>)> {
    let assignments = vars::parse(plaintext)?;
    let sealed = container::encrypt(plaintext, password)?;
    Ok((assignments, sealed))
}
