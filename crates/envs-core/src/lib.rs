//! # Envs Core
//!
//! Core library for Envs - named environment files, optionally password
//! encrypted, injected into the environment of a launched command.
//!
//! This crate provides the file codec independent of the CLI interface.
//! It never reads passwords, opens env files, or touches the process
//! environment; callers hand it byte buffers.
//!
//! ## Architecture
//!
//! - **vars**: `KEY=VALUE` line grammar
//! - **key**: password to symmetric key derivation
//! - **container**: signed, authenticated-encrypted file container
//! - **envfile**: decrypt-then-parse pipeline used by the CLI
//! - **fs**: atomic file replacement

pub mod container;
pub mod envfile;
pub mod error;
pub mod fs;
pub mod key;
pub mod vars;

pub use error::{EnvsError, Result};
pub use vars::Assignment;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
