//! In-memory revision store.

use bytes::Bytes;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::RevisionError;

/// File name used when no path is configured.
pub const DEFAULT_REVISION_FILE: &str = "REVISION";

/// Holds the revision file contents captured at creation.
///
/// The file is read exactly once, in [`RevisionStore::new`]. Later writes to
/// the file are never picked up; only its continued existence is checked.
#[derive(Debug, Clone)]
pub struct RevisionStore {
    path: PathBuf,
    revision: Option<Bytes>,
}

impl RevisionStore {
    /// Create a store and load the revision file.
    ///
    /// An empty path falls back to [`DEFAULT_REVISION_FILE`]. Read failures
    /// leave the store without a cached revision.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = resolve_path(path.into());

        let revision = match fs::read(&path) {
            Ok(content) => {
                tracing::info!(
                    "Loaded revision from {} ({} bytes)",
                    path.display(),
                    content.len()
                );
                Some(Bytes::from(content))
            }
            Err(e) => {
                tracing::debug!("Revision file {} not loaded: {}", path.display(), e);
                None
            }
        };

        Self { path, revision }
    }

    /// Path of the revision file this store watches.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file was read at creation.
    pub fn is_cached(&self) -> bool {
        self.revision.is_some()
    }

    /// The cached revision, provided the file still exists.
    pub fn current_revision(&self) -> Result<Bytes, RevisionError> {
        let revision = self.revision.as_ref().ok_or(RevisionError::NotFound)?;

        match fs::metadata(&self.path) {
            Ok(_) => Ok(revision.clone()),
            Err(_) => Err(RevisionError::Removed),
        }
    }
}

fn resolve_path(path: PathBuf) -> PathBuf {
    if path.as_os_str().is_empty() {
        PathBuf::from(DEFAULT_REVISION_FILE)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_revision(temp: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = temp.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_path_uses_default_name() {
        let store = RevisionStore::new("");
        assert_eq!(store.path(), Path::new(DEFAULT_REVISION_FILE));
    }

    #[test]
    fn configured_path_is_kept() {
        let store = RevisionStore::new("/srv/app/site-sha");
        assert_eq!(store.path(), Path::new("/srv/app/site-sha"));
    }

    #[test]
    fn returns_cached_content() {
        let temp = TempDir::new().unwrap();
        let path = write_revision(&temp, "REVISION", "deadbeef");

        let store = RevisionStore::new(&path);
        assert!(store.is_cached());
        assert_eq!(store.current_revision().unwrap(), Bytes::from("deadbeef"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = RevisionStore::new(temp.path().join("REVISION"));

        assert!(!store.is_cached());
        assert_eq!(store.current_revision(), Err(RevisionError::NotFound));
    }

    #[test]
    fn deleted_file_is_removed() {
        let temp = TempDir::new().unwrap();
        let path = write_revision(&temp, "REVISION", "deadbeef");
        let store = RevisionStore::new(&path);

        fs::remove_file(&path).unwrap();

        assert_eq!(store.current_revision(), Err(RevisionError::Removed));
    }

    #[test]
    fn overwritten_file_keeps_original_content() {
        let temp = TempDir::new().unwrap();
        let path = write_revision(&temp, "REVISION", "deadbeef");
        let store = RevisionStore::new(&path);

        fs::write(&path, "cafebabe").unwrap();

        assert_eq!(store.current_revision().unwrap(), Bytes::from("deadbeef"));
    }

    #[test]
    fn file_created_later_is_never_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("REVISION");
        let store = RevisionStore::new(&path);

        fs::write(&path, "deadbeef").unwrap();

        assert_eq!(store.current_revision(), Err(RevisionError::NotFound));
    }

    #[test]
    fn recreated_file_serves_original_content() {
        let temp = TempDir::new().unwrap();
        let path = write_revision(&temp, "REVISION", "deadbeef");
        let store = RevisionStore::new(&path);

        fs::remove_file(&path).unwrap();
        assert_eq!(store.current_revision(), Err(RevisionError::Removed));

        fs::write(&path, "cafebabe").unwrap();
        assert_eq!(store.current_revision().unwrap(), Bytes::from("deadbeef"));
    }

    #[test]
    fn empty_file_is_cached() {
        let temp = TempDir::new().unwrap();
        let path = write_revision(&temp, "REVISION", "");
        let store = RevisionStore::new(&path);

        assert!(store.is_cached());
        assert_eq!(store.current_revision().unwrap(), Bytes::new());
    }

    #[test]
    fn directory_is_not_cached() {
        let temp = TempDir::new().unwrap();
        let store = RevisionStore::new(temp.path());

        assert!(!store.is_cached());
        assert_eq!(store.current_revision(), Err(RevisionError::NotFound));
    }
}
