//! # lens-db
//!
//! libSQL persistence for Truth Lens.
//!
//! Holds the durable product record (product, barcode links, raw
//! ingredients, substance links, regulatory flags), the scan log, and the
//! `regulatory_records` table that backs the remote knowledge base.
//!
//! Every write is an upsert keyed by a natural key, so replaying the same
//! ingest (e.g. two concurrent misses for one barcode) leaves one product,
//! one barcode link, and one link per substance.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
mod store;

pub use error::DatabaseError;
pub use repos::products::{Provenance, StoredProduct};
pub use store::ProductStore;

use libsql::Builder;

/// Where a [`LensDb`] keeps its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbLocation {
    Local,
    InMemory,
    Remote,
}

impl DbLocation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::InMemory => "in-memory",
            Self::Remote => "remote",
        }
    }
}

/// Central database handle.
///
/// Wraps a libSQL database and one connection shared by every repository
/// method.
pub struct LensDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    location: DbLocation,
}

impl LensDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let location = if path == ":memory:" {
            DbLocation::InMemory
        } else {
            DbLocation::Local
        };
        let lens_db = Self { db, conn, location };
        lens_db.migrate().await?;
        Ok(lens_db)
    }

    /// Open a fresh in-memory database. Used in fixture mode and tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if migrations fail.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        Self::open_local(":memory:").await
    }

    /// Connect to a remote libSQL (Turso) database.
    ///
    /// Does not run migrations; see [`Self::migrate`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the client cannot be built.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        Ok(Self {
            db,
            conn,
            location: DbLocation::Remote,
        })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn location(&self) -> DbLocation {
        self.location
    }

    /// Round-trip a trivial query.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be reached.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(())
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"scn-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> LensDb {
        LensDb::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "products",
            "barcodes",
            "ingredient_raw",
            "additives",
            "product_additives",
            "product_flags",
            "scans",
            "regulatory_records",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn migrations_are_rerunnable() {
        let db = test_db().await;
        db.migrate().await.unwrap();
        db.migrate().await.unwrap();
    }

    #[tokio::test]
    async fn in_memory_location_and_ping() {
        let db = test_db().await;
        assert_eq!(db.location(), DbLocation::InMemory);
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("scn").await.unwrap();
        assert!(id.starts_with("scn-"), "{id}");
        assert_eq!(id.len(), 12, "{id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()), "{id}");
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
