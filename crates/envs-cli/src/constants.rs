//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also clap usage errors)
/// - 3+: Application-specific errors
///
/// When a command is run, its own exit code is forwarded instead.
pub mod exit_codes {
    /// Env file or command not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (including malformed env files).
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password or tampered file).
    pub const AUTH_FAILED: i32 = 5;

    /// Offset added to a signal number when the child is killed by a signal.
    pub const SIGNAL_BASE: i32 = 128;
}

/// Environment variables read by the CLI.
pub mod env_vars {
    /// Password used for encryption and decryption, instead of a prompt.
    pub const PASSWORD: &str = "ENVS_PASSWORD";

    /// Config file path override.
    pub const CONFIG: &str = "ENVS_CONFIG";

    /// Log filter (tracing `EnvFilter` syntax).
    pub const LOG: &str = "ENVS_LOG";
}
