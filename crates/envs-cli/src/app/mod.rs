//! Application-level utilities for the Envs CLI.
//!
//! This module provides:
//! - Env file resolution and loading
//! - Password acquisition from the environment or a prompt

mod passphrase;
mod resolver;

pub use passphrase::read_new_password;
pub use resolver::{load_files, resolve_files};
