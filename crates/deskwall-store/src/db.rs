//! Connection management for the external preference store.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::errors::{Result, StoreError};

/// Open the preference store at `path`.
///
/// The store belongs to the Dock and must already exist; it is opened
/// read-write but never created, so a missing database surfaces as an open
/// failure before any mutation is attempted.
///
/// # Errors
///
/// Returns `Open` if the database is missing or cannot be opened read-write.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE).map_err(|source| {
        StoreError::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Open an in-memory store (for testing).
///
/// # Errors
///
/// Returns `Open` if SQLite cannot allocate the in-memory database.
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|source| StoreError::Open {
        path: PathBuf::from(":memory:"),
        source,
    })
}
