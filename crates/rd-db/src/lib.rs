//! # rd-db
//!
//! libSQL storage for RepairDesk tickets and the ticket service that
//! orchestrates storage and customer notification.
//!
//! The store never keeps a connection open between calls: every operation
//! opens the database file, runs its statements, and drops the handle, so the
//! file is not locked for the lifetime of the process.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local-only mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

use error::DatabaseError;
use libsql::Builder;

/// Handle to the ticket database file.
///
/// Cheap to clone; holds only the path.
#[derive(Debug, Clone)]
pub struct TicketStore {
    path: PathBuf,
}

/// A connection opened for the duration of one store operation.
pub(crate) struct Handle {
    _db: libsql::Database,
    pub(crate) conn: libsql::Connection,
}

impl TicketStore {
    /// Point a store at `path`. Nothing is opened until the first operation.
    ///
    /// `":memory:"` is not useful here: each operation would see a fresh,
    /// empty database.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `tickets` table and search index if absent.
    ///
    /// Idempotent; safe to call on every startup. Creates the parent
    /// directory of the database file when missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or the migration fails.
    pub async fn initialize(&self) -> Result<(), DatabaseError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.run_migrations().await?;
        tracing::debug!(path = %self.path.display(), "ticket schema ready");
        Ok(())
    }

    /// Open a fresh connection for one operation.
    pub(crate) async fn connect(&self) -> Result<Handle, DatabaseError> {
        let db = Builder::new_local(&self.path).build().await?;
        let conn = db.connect()?;
        Ok(Handle { _db: db, conn })
    }
}
