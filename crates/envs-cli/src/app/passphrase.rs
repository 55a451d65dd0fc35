//! Password acquisition.
//!
//! The password comes from ENVS_PASSWORD when set, otherwise from a hidden
//! prompt on the terminal. The core only ever sees the resulting bytes.

use std::ffi::OsString;
use std::io::IsTerminal;

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::constants::env_vars;
use crate::errors::CliError;

/// Password bytes, wiped from memory on drop.
pub type Secret = Zeroizing<Vec<u8>>;

/// Any set value is the password, including blank and non-UTF-8 ones.
fn password_from_env() -> Option<Secret> {
    std::env::var_os(env_vars::PASSWORD).map(password_bytes)
}

#[cfg(unix)]
fn password_bytes(value: OsString) -> Secret {
    use std::os::unix::ffi::OsStringExt;

    Zeroizing::new(value.into_vec())
}

#[cfg(not(unix))]
fn password_bytes(value: OsString) -> Secret {
    Zeroizing::new(value.to_string_lossy().into_owned().into_bytes())
}

fn interactive() -> bool {
    std::io::stderr().is_terminal()
}

fn no_tty_error() -> anyhow::Error {
    CliError::invalid_input(format!(
        "No password provided and no TTY available. Set {}.",
        env_vars::PASSWORD
    ))
    .into()
}

/// Read the password for decrypting `source`.
pub fn read_password(source: &str) -> anyhow::Result<Secret> {
    if let Some(password) = password_from_env() {
        tracing::debug!(file = source, "using password from {}", env_vars::PASSWORD);
        return Ok(password);
    }
    if !interactive() {
        return Err(no_tty_error());
    }
    Password::new()
        .with_prompt(format!("Password for {}", source))
        .allow_empty_password(true)
        .interact()
        .map(|p| Zeroizing::new(p.into_bytes()))
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Read a password for a new encrypted file, with confirmation when prompting.
pub fn read_new_password() -> anyhow::Result<Secret> {
    if let Some(password) = password_from_env() {
        return Ok(password);
    }
    if !interactive() {
        return Err(no_tty_error());
    }
    Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map(|p| Zeroizing::new(p.into_bytes()))
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}
