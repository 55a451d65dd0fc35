//! Error types for Envs core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Envs operations.
pub type Result<T> = std::result::Result<T, EnvsError>;

/// Core error type for Envs operations.
#[derive(Debug, Error)]
pub enum EnvsError {
    /// A non-blank, non-comment line without a `=` separator
    #[error("invalid line {line}: {content}")]
    Parse { line: usize, content: String },

    /// A line that is not valid UTF-8
    #[error("invalid UTF-8 on line {line}")]
    InvalidUtf8 { line: usize },

    /// Container framing is truncated or malformed
    #[error("malformed container: {0}")]
    Format(String),

    /// Tag verification failed. Wrong password and tampering are
    /// reported identically.
    #[error("authentication failed: wrong password or corrupted data")]
    Authentication,

    /// Cipher failure other than authentication
    #[error("encryption error: {0}")]
    Crypto(String),

    /// The operating system could not supply random bytes
    #[error("random source unavailable: {0}")]
    Randomness(String),

    /// The data is encrypted but no password was supplied
    #[error("file is encrypted and no password was supplied")]
    PasswordRequired,

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl EnvsError {
    /// Returns true for failures caused by a bad password or altered data.
    pub fn is_authentication(&self) -> bool {
        matches!(self, EnvsError::Authentication)
    }
}
