//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes. They travel through `anyhow`
//! and are recovered by downcasting in `main`.

use std::fmt;

use envs_core::EnvsError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Env file or command not found
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password, tampered file)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Classify a core error raised while processing `source`.
    ///
    /// Parse and authentication failures become typed CLI errors; anything
    /// else is passed through with context.
    pub fn from_core(source: &str, err: EnvsError) -> anyhow::Error {
        match err {
            EnvsError::Authentication => CliError::auth_failed_with_hint(
                format!("decrypting {}: {}", source, err),
                format!(
                    "Hint: Check the password, or unset {} to be prompted.",
                    crate::constants::env_vars::PASSWORD
                ),
            )
            .into(),
            EnvsError::Parse { .. } | EnvsError::InvalidUtf8 { .. } => {
                CliError::invalid_input(format!("parsing {}: {}", source, err)).into()
            }
            other => anyhow::Error::new(other).context(format!("reading {}", source)),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
