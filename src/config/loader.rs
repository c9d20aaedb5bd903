//! Configuration file loading.

use crate::config::schema::ServerConfig;
use crate::error::{Result, RevisionPlateError};
use std::fs;
use std::path::Path;

/// Load a single config file and parse it into ServerConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RevisionPlateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RevisionPlateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ServerConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ServerConfig> {
    if content.trim().is_empty() {
        return Ok(ServerConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| RevisionPlateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// Without a path the built-in defaults are used.
pub fn load_config(config_path: Option<&Path>) -> Result<ServerConfig> {
    match config_path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)
        }
        None => Ok(ServerConfig::default()),
    }
}
