//! Configuration Management
//!
//! This module resolves the path to the roster database file.
//!
//! # Resolution Precedence
//! 1. `ROSTER_DB` environment variable (highest priority)
//! 2. Local config file (`.roster/config.json`)
//! 3. Global config file (`~/.config/roster/config.json`)
//!
//! Config files contain a single field: `{"database": "/path/to/roster.db"}`.
//! If no source yields a path, startup fails with a `ConfigError`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};

/// Environment variable naming the database file directly
pub const DB_ENV_VAR: &str = "ROSTER_DB";

/// On-disk configuration file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Path to the SQLite database file
    pub database: PathBuf,
}

/// Get path to the local config file (`.roster/config.json`)
pub fn local_config_path() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().map_err(|e| {
        RosterError::config_error(format!("Could not determine current directory: {e}"))
    })?;

    Ok(current_dir.join(".roster").join("config.json"))
}

/// Get path to the global config file (`~/.config/roster/config.json`)
pub fn global_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| RosterError::config_error("Could not determine user config directory"))?;

    Ok(config_dir.join("roster").join("config.json"))
}

/// Load a config file, returning `None` if it does not exist.
///
/// A file that exists but does not parse is an error, not a silent skip.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| RosterError::config_error(format!("Could not read config file: {e}")))?;

    let config = serde_json::from_str::<ConfigFile>(&contents).map_err(|e| {
        RosterError::config_error(format!("Invalid config file {}: {e}", path.display()))
    })?;

    Ok(Some(config))
}

/// Resolve the database path from the environment and config files.
pub fn resolve_database_path() -> Result<PathBuf> {
    let env_db = std::env::var(DB_ENV_VAR).ok();
    let candidates = [local_config_path()?, global_config_path()?];
    resolve_from(env_db, &candidates)
}

/// Resolution core, separated from process-global state for testability.
fn resolve_from(env_db: Option<String>, candidates: &[PathBuf]) -> Result<PathBuf> {
    if let Some(path) = env_db {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    for candidate in candidates {
        if let Some(config) = load_config_file(candidate)? {
            return Ok(config.database);
        }
    }

    Err(RosterError::config_error(format!(
        "No database configured. Set {DB_ENV_VAR} or create .roster/config.json \
         with {{\"database\": \"/path/to/roster.db\"}}"
    )))
}
