//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! initialization. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::TicketStore;
use crate::error::DatabaseError;

/// Initial schema: `tickets` table and the `idx_search` index.
const MIGRATION_001: &str = include_str!("../migrations/001_tickets.sql");

impl TicketStore {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let handle = self.connect().await?;
        handle
            .conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_tickets: {e}")))?;
        Ok(())
    }
}
