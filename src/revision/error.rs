//! Request-path errors for revision lookups.

use thiserror::Error;

/// Why the current revision could not be served.
///
/// The display form is the wire tag written back to GET clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevisionError {
    /// The file could not be read when the store was created.
    #[error("{}", self.tag())]
    NotFound,

    /// The file was read at creation but no longer exists.
    #[error("{}", self.tag())]
    Removed,
}

impl RevisionError {
    /// The fixed tag for this error.
    pub fn tag(&self) -> &'static str {
        match self {
            RevisionError::NotFound => "REVISION_FILE_NOT_FOUND",
            RevisionError::Removed => "REVISION_FILE_REMOVED",
        }
    }
}
