//! Env file resolution and loading.

use std::io::ErrorKind;

use envs_core::container::is_container;
use envs_core::envfile;
use envs_core::Assignment;

use crate::cli::Cli;
use crate::config::EnvsConfig;
use crate::errors::CliError;

use super::passphrase::read_password;

/// Files named on the command line, or the configured defaults when none are.
pub fn resolve_files(cli: &Cli, config: &EnvsConfig) -> Vec<String> {
    if cli.files.is_empty() {
        config.defaults.files.clone()
    } else {
        cli.files.clone()
    }
}

/// Load every file in order and concatenate their assignments.
///
/// Later files come later in the list, so their values win when applied.
pub fn load_files(files: &[String]) -> anyhow::Result<Vec<Assignment>> {
    let mut assignments = Vec::new();
    for file in files {
        assignments.extend(load_file(file)?);
    }
    Ok(assignments)
}

/// Load a single env file, prompting for a password only if it is encrypted.
pub fn load_file(path: &str) -> anyhow::Result<Vec<Assignment>> {
    let data = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::not_found(
            format!("Env file not found: {}", path),
            "Hint: Check the path passed with -f or the files listed in the config.",
        )
        .into(),
        _ => anyhow::anyhow!("reading file {}: {}", path, e),
    })?;

    let encrypted = is_container(&data);
    let password = if encrypted {
        Some(read_password(path)?)
    } else {
        None
    };

    let assignments = envfile::decode(&data, password.as_deref().map(Vec::as_slice))
        .map_err(|e| CliError::from_core(path, e))?;

    tracing::debug!(
        file = path,
        encrypted,
        count = assignments.len(),
        "loaded env file"
    );
    Ok(assignments)
}
