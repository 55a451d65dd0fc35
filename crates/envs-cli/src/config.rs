//! Optional user configuration.
//!
//! ```toml
//! [defaults]
//! files = [".env"]
//! include_env = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::env_vars;

#[derive(Debug, Default, Deserialize)]
pub struct EnvsConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefaultsSection {
    /// Env files loaded when no `-f` is given
    #[serde(default)]
    pub files: Vec<String>,

    /// Start the command from the ambient environment
    #[serde(default)]
    pub include_env: bool,
}

/// Resolve the config file path, checking ENVS_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env_vars::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> anyhow::Result<EnvsConfig> {
    let path = match resolve_config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!("no config path: {}", err);
            return Ok(EnvsConfig::default());
        }
    };
    if !path.exists() {
        return Ok(EnvsConfig::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<EnvsConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("envs"));
        }
    }
    Ok(home_dir()?.join(".config").join("envs"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
