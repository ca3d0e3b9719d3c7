//! Per-product, per-region regulatory flags.

use lens_core::{ProductFlag, RegulatoryStatus};

use crate::LensDb;
use crate::error::DatabaseError;
use crate::helpers::{json_list, parse_code, parse_text};

fn row_to_flag(row: &libsql::Row) -> Result<ProductFlag, DatabaseError> {
    Ok(ProductFlag {
        region: row.get::<String>(0)?,
        additive_code: parse_code(&row.get::<String>(1)?)?,
        flag_type: parse_text::<RegulatoryStatus>(&row.get::<String>(2)?)?,
        explanation: row.get::<String>(3)?,
    })
}

impl LensDb {
    /// Make `flags` the complete set of flags for (`product_id`, `region`).
    ///
    /// Flags for other codes in that region are removed; each remaining
    /// (product, region, code) row is upserted. Flags whose own region
    /// differs from `region` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any write fails.
    pub async fn replace_flags(
        &self,
        product_id: &str,
        region: &str,
        flags: &[ProductFlag],
    ) -> Result<(), DatabaseError> {
        let flags: Vec<&ProductFlag> = flags.iter().filter(|f| f.region == region).collect();
        let codes: Vec<&str> = flags.iter().map(|f| f.additive_code.as_str()).collect();

        self.conn()
            .execute(
                "DELETE FROM product_flags
                 WHERE product_id = ?1 AND region = ?2
                   AND additive_code NOT IN (SELECT value FROM json_each(?3))",
                libsql::params![product_id, region, json_list(&codes)?],
            )
            .await?;

        for flag in flags {
            self.conn()
                .execute(
                    "INSERT INTO product_flags (product_id, region, additive_code, flag_type, explanation)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(product_id, region, additive_code) DO UPDATE SET
                       flag_type = excluded.flag_type, explanation = excluded.explanation",
                    libsql::params![
                        product_id,
                        region,
                        flag.additive_code.as_str(),
                        flag.flag_type.as_str(),
                        flag.explanation.as_str()
                    ],
                )
                .await?;
        }
        Ok(())
    }

    /// Every flag on a product, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored flag is invalid.
    pub async fn flags_for(&self, product_id: &str) -> Result<Vec<ProductFlag>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT region, additive_code, flag_type, explanation
                 FROM product_flags WHERE product_id = ?1 ORDER BY rowid",
                [product_id],
            )
            .await?;
        let mut flags = Vec::new();
        while let Some(row) = rows.next().await? {
            flags.push(row_to_flag(&row)?);
        }
        Ok(flags)
    }
}
