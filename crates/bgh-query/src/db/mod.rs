//! `SQLite` storage layer.
//!
//! The database is produced by a separate ingestion process; this module only
//! reads it. The connection is opened read-only, so no query issued here can
//! modify the file, and with `case_sensitive_like` on, so `LIKE` compares
//! case-sensitively.
//!
//! ## Module Structure
//!
//! - `schema` - Table layout (DDL)
//! - `helpers` - Row conversion
//! - `decisions` - Filtered lookups and summary queries

mod decisions;
mod helpers;
mod schema;

pub(crate) use helpers::row_to_decision;
pub use schema::SCHEMA;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};
use schema::DECISIONS_TABLE;

/// Read-only handle on the decisions database.
///
/// Owns the single connection used for every lookup. The connection is
/// released by [`Database::close`] or, on any other exit path, when the
/// value is dropped.
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Open an existing decisions database read-only.
    ///
    /// Fails if the file does not exist, is not a `SQLite` database, or has no
    /// `decisions` table.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Senate filters are case-sensitive substring matches
        conn.pragma_update(None, "case_sensitive_like", true)?;

        let db = Self {
            conn,
            path: path.to_path_buf(),
        };

        if !db.has_decisions_table()? {
            return Err(Error::MissingTable(db.path.clone()));
        }

        Ok(db)
    }

    /// Path the database was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying connection.
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error `SQLite` raises while
    /// finalizing it.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to close database");
            Error::Database(e)
        })
    }

    fn has_decisions_table(&self) -> Result<bool> {
        // Reading sqlite_master also forces SQLite to validate the file header
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master \
             WHERE type IN ('table', 'view') AND name = ?1)",
            [DECISIONS_TABLE],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}
