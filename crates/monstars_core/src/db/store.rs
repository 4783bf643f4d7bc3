//! Per-operation scoped access to the configured database.
//!
//! # Responsibility
//! - Hold the configured database location (no ambient global path).
//! - Open a fresh connection for exactly one logical operation and release
//!   it on every exit path.
//!
//! # Invariants
//! - No connection handle escapes [`Store::with_connection`].
//! - At most one logical operation holds a connection at a time.

use super::{open_db, DbError};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Handle to the database location used by repository operations.
///
/// Cloning a `Store` clones the configured path, not a live connection.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store for the given database file path.
    ///
    /// The file is created with the full schema on first use.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs one logical operation against a freshly opened connection.
    ///
    /// The connection is dropped when `op` returns, on success and on
    /// error alike, so any transaction left unresolved by the operation is
    /// rolled back rather than silently committed.
    pub fn with_connection<T, E, F>(&self, op: F) -> Result<T, E>
    where
        E: From<DbError>,
        F: FnOnce(&mut Connection) -> Result<T, E>,
    {
        let mut conn = open_db(&self.path)?;
        op(&mut conn)
    }
}
