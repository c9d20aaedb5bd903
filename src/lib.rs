//! revision-plate - Serve a build revision file over HTTP.
//!
//! The revision file (typically a VCS hash written at deploy time) is read
//! once at startup. Every request afterwards gets the cached content as long
//! as the file is still on disk.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`revision`] - The cached revision store
//! - [`server`] - HTTP handling and the axum server
//!
//! # Example
//!
//! ```
//! use revision_plate::revision::{RevisionError, RevisionStore};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("REVISION");
//! fs::write(&path, "deadbeef").unwrap();
//!
//! let store = RevisionStore::new(&path);
//! assert_eq!(&store.current_revision().unwrap()[..], b"deadbeef");
//!
//! fs::remove_file(&path).unwrap();
//! assert_eq!(store.current_revision(), Err(RevisionError::Removed));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod revision;
pub mod server;

pub use error::{Result, RevisionPlateError};
