//! Scan (usage) log.

use lens_core::Barcode;

use crate::LensDb;
use crate::error::DatabaseError;

impl LensDb {
    /// Append a scan of `barcode`. Returns the scan id, or `None` when no
    /// product is linked to the barcode.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the lookup or insert fails.
    pub async fn record_scan(
        &self,
        barcode: &Barcode,
        intent: &str,
    ) -> Result<Option<String>, DatabaseError> {
        let Some(product_id) = self.product_id_for_barcode(barcode).await? else {
            return Ok(None);
        };
        let id = self.generate_id("scn").await?;
        self.conn()
            .execute(
                "INSERT INTO scans (id, product_id, barcode_number, intent) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), product_id.as_str(), barcode.as_str(), intent],
            )
            .await?;
        Ok(Some(id))
    }

    /// Number of scans logged for `barcode`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_scans(&self, barcode: &Barcode) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM scans WHERE barcode_number = ?1",
                [barcode.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        u64::try_from(row.get::<i64>(0)?)
            .map_err(|e| DatabaseError::InvalidState(format!("scan count: {e}")))
    }
}
