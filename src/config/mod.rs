//! Configuration loading for revision-plate.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use revision_plate::config::load_config_file;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("revision-plate.yml");
//! fs::write(&path, "revision_file: site-sha").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.revision_file, std::path::PathBuf::from("site-sha"));
//! ```
//!
//! # Precedence
//!
//! Later sources override earlier ones:
//! 1. Built-in defaults
//! 2. Config file (`--config`)
//! 3. Command-line flags and `REVISION_PLATE_*` environment variables

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{ServerConfig, DEFAULT_PORT};
