//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time. All statements use
//! `IF NOT EXISTS` for idempotent re-running.

use crate::LensDb;
use crate::error::DatabaseError;

/// Initial schema: 8 tables, 3 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl LensDb {
    /// Run all embedded migrations in sequence.
    ///
    /// Local databases are migrated on open. Remote databases are only
    /// migrated by callers that own the schema.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Migration`] naming the failing migration.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
