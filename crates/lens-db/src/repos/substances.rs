//! Product ↔ substance links.

use lens_core::SubstanceCode;

use crate::LensDb;
use crate::error::DatabaseError;
use crate::helpers::{json_list, parse_code};

impl LensDb {
    /// Make `codes` the complete, ordered substance list of a product,
    /// creating placeholder `additives` rows for codes seen for the first time.
    ///
    /// Links to codes no longer in `codes` are removed. Re-linking an
    /// unchanged list is a no-op. Returns the number of links added or moved.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any write fails.
    pub async fn link_substances(
        &self,
        product_id: &str,
        codes: &[SubstanceCode],
    ) -> Result<u64, DatabaseError> {
        let listed: Vec<&str> = codes.iter().map(SubstanceCode::as_str).collect();
        self.conn()
            .execute(
                "DELETE FROM product_additives
                 WHERE product_id = ?1
                   AND additive_code NOT IN (SELECT value FROM json_each(?2))",
                libsql::params![product_id, json_list(&listed)?],
            )
            .await?;

        let mut linked = 0;
        for (position, code) in codes.iter().enumerate() {
            self.conn()
                .execute(
                    "INSERT OR IGNORE INTO additives (code, name, category) VALUES (?1, ?1, 'unknown')",
                    [code.as_str()],
                )
                .await?;
            linked += self
                .conn()
                .execute(
                    "INSERT INTO product_additives (product_id, additive_code, position)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT(product_id, additive_code) DO UPDATE SET
                       position = excluded.position
                     WHERE position != excluded.position",
                    libsql::params![
                        product_id,
                        code.as_str(),
                        i64::try_from(position).unwrap_or(i64::MAX)
                    ],
                )
                .await?;
        }
        Ok(linked)
    }

    /// Substance codes linked to a product, in source order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a stored code is blank.
    pub async fn substance_codes_for(
        &self,
        product_id: &str,
    ) -> Result<Vec<SubstanceCode>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT additive_code FROM product_additives
                 WHERE product_id = ?1 ORDER BY position, rowid",
                [product_id],
            )
            .await?;
        let mut codes = Vec::new();
        while let Some(row) = rows.next().await? {
            codes.push(parse_code(&row.get::<String>(0)?)?);
        }
        Ok(codes)
    }
}

#[cfg(test)]
mod tests {
    use lens_core::{Barcode, ProductRecord};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Provenance;

    async fn db_with_product() -> (LensDb, String) {
        let db = LensDb::open_in_memory().await.unwrap();
        let record = ProductRecord {
            barcode: Barcode::parse("8901058858242").unwrap(),
            product_name: "Maggi 2-Minute Noodles Masala".into(),
            brand: None,
            category: None,
            ingredients: "Wheat Flour".into(),
            additives: Vec::new(),
            flags: Vec::new(),
        };
        let id = db
            .upsert_product(&record, &Provenance::catalog("openfoodfacts", 0.8))
            .await
            .unwrap();
        (db, id)
    }

    fn codes(raw: &[&str]) -> Vec<SubstanceCode> {
        raw.iter().map(|c| SubstanceCode::new(c).unwrap()).collect()
    }

    #[tokio::test]
    async fn links_keep_source_order() {
        let (db, id) = db_with_product().await;
        let input = codes(&["E621", "E412", "E150D"]);
        assert_eq!(db.link_substances(&id, &input).await.unwrap(), 3);
        assert_eq!(db.substance_codes_for(&id).await.unwrap(), input);
    }

    #[tokio::test]
    async fn relinking_is_a_no_op() {
        let (db, id) = db_with_product().await;
        let input = codes(&["E621", "E627"]);
        db.link_substances(&id, &input).await.unwrap();
        assert_eq!(db.link_substances(&id, &input).await.unwrap(), 0);
        assert_eq!(db.substance_codes_for(&id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn relinking_drops_stale_codes_and_reorders() {
        let (db, id) = db_with_product().await;
        db.link_substances(&id, &codes(&["E621", "E627", "E631"]))
            .await
            .unwrap();

        let changed = db
            .link_substances(&id, &codes(&["E631", "E621"]))
            .await
            .unwrap();

        assert_eq!(changed, 2);
        assert_eq!(
            db.substance_codes_for(&id).await.unwrap(),
            codes(&["E631", "E621"])
        );
    }

    #[tokio::test]
    async fn empty_list_clears_links() {
        let (db, id) = db_with_product().await;
        db.link_substances(&id, &codes(&["E621"])).await.unwrap();
        db.link_substances(&id, &[]).await.unwrap();
        assert!(db.substance_codes_for(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn placeholder_additive_rows_are_created_once() {
        let (db, id) = db_with_product().await;
        db.link_substances(&id, &codes(&["E999"])).await.unwrap();
        db.link_substances(&id, &codes(&["E999"])).await.unwrap();

        let mut rows = db
            .conn()
            .query("SELECT name, category FROM additives WHERE code = 'E999'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "E999");
        assert_eq!(row.get::<String>(1).unwrap(), "unknown");
        assert!(rows.next().await.unwrap().is_none());
    }
}
