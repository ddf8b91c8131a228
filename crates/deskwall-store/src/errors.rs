//! Error taxonomy for the preference store.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures while applying preferences to the store.
///
/// Open, write and rollback failures are distinct conditions: an open
/// failure means nothing was mutated, a write failure means the unit of
/// work was rolled back, and a rollback failure means the store's state is
/// unknown and must not be treated as success.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be opened; no mutation was attempted
    #[error("error opening preference store at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// A statement inside the unit of work failed; prior state was restored
    #[error("error updating preference store: {source}")]
    Write { source: rusqlite::Error },

    /// Rolling back a failed unit of work itself failed
    #[error("error aborting preference store changes: {source}")]
    Rollback { source: rusqlite::Error },
}

impl StoreError {
    /// Wrap a statement failure inside the unit of work.
    pub(crate) fn write(source: rusqlite::Error) -> Self {
        StoreError::Write { source }
    }
}
