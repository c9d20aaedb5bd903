//! Revision file caching.
//!
//! A [`RevisionStore`] reads its file once when created and afterwards only
//! checks that the file is still present before handing out the cached bytes.

pub mod error;
pub mod store;

pub use error::RevisionError;
pub use store::{RevisionStore, DEFAULT_REVISION_FILE};
