//! Product, barcode link, and raw ingredient repository.

use chrono::{DateTime, Utc};
use lens_core::{Barcode, INGREDIENTS_UNAVAILABLE, ProductRecord};

use crate::LensDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, product_id_for};

/// Where an ingested product came from. Written to the barcode link and
/// the raw ingredient row.
#[derive(Debug, Clone, PartialEq)]
pub struct Provenance {
    /// Catalog name, e.g. `openfoodfacts`.
    pub source: String,
    /// The catalog's own product identifier.
    pub source_product_id: Option<String>,
    pub source_url: Option<String>,
    pub barcode_type: String,
    /// How much the catalog's data is trusted, 0.0 to 1.0.
    pub confidence: f64,
}

impl Provenance {
    /// Provenance for a product fetched from a catalog under an EAN barcode.
    #[must_use]
    pub fn catalog(source: &str, confidence: f64) -> Self {
        Self {
            source: source.to_string(),
            source_product_id: None,
            source_url: None,
            barcode_type: "EAN".to_string(),
            confidence,
        }
    }
}

/// One row of the product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProduct {
    pub id: String,
    /// Lowest barcode linked to the product.
    pub barcode: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub updated_at: DateTime<Utc>,
}

fn row_to_stored(row: &libsql::Row) -> Result<StoredProduct, DatabaseError> {
    Ok(StoredProduct {
        id: row.get::<String>(0)?,
        barcode: row.get::<String>(1)?,
        product_name: row.get::<String>(2)?,
        brand: get_opt_string(row, 3)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl LensDb {
    /// Whether any product is linked to `barcode`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn barcode_exists(&self, barcode: &Barcode) -> Result<bool, DatabaseError> {
        Ok(self.product_id_for_barcode(barcode).await?.is_some())
    }

    /// Id of the product linked to `barcode`, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn product_id_for_barcode(
        &self,
        barcode: &Barcode,
    ) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT product_id FROM barcodes WHERE barcode_number = ?1",
                [barcode.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    /// Load the full record linked to `barcode`: product, ingredients,
    /// substance codes in source order, and flags.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any query fails or a stored value is invalid.
    pub async fn load_product(
        &self,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT p.id, p.product_name, p.brand_name, p.category, i.raw_text
                 FROM barcodes b
                 JOIN products p ON p.id = b.product_id
                 LEFT JOIN ingredient_raw i ON i.product_id = p.id
                 WHERE b.barcode_number = ?1",
                [barcode.as_str()],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };

        let product_id = row.get::<String>(0)?;
        let product_name = row.get::<String>(1)?;
        let brand = get_opt_string(&row, 2)?;
        let category = get_opt_string(&row, 3)?;
        let ingredients =
            get_opt_string(&row, 4)?.unwrap_or_else(|| INGREDIENTS_UNAVAILABLE.to_string());

        let additives = self.substance_codes_for(&product_id).await?;
        let flags = self.flags_for(&product_id).await?;

        Ok(Some(ProductRecord {
            barcode: barcode.clone(),
            product_name,
            brand,
            category,
            ingredients,
            additives,
            flags,
        }))
    }

    /// Insert or refresh a product, its barcode link, and its raw ingredients.
    ///
    /// Returns the product id. A barcode already linked keeps its product;
    /// otherwise the id is derived from the barcode.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any write fails.
    pub async fn upsert_product(
        &self,
        record: &ProductRecord,
        provenance: &Provenance,
    ) -> Result<String, DatabaseError> {
        let product_id = match self.product_id_for_barcode(&record.barcode).await? {
            Some(id) => id,
            None => product_id_for(&record.barcode),
        };

        self.conn()
            .execute(
                "INSERT INTO products (id, product_name, brand_name, category, source_product_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                   product_name = excluded.product_name,
                   brand_name = excluded.brand_name,
                   category = excluded.category,
                   source_product_id = COALESCE(excluded.source_product_id, products.source_product_id),
                   updated_at = datetime('now')",
                libsql::params![
                    product_id.as_str(),
                    record.product_name.as_str(),
                    record.brand.as_deref(),
                    record.category.as_deref(),
                    provenance.source_product_id.as_deref()
                ],
            )
            .await?;

        self.conn()
            .execute(
                "INSERT OR IGNORE INTO barcodes
                   (barcode_number, product_id, barcode_type, source, confidence_score, source_url)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    record.barcode.as_str(),
                    product_id.as_str(),
                    provenance.barcode_type.as_str(),
                    provenance.source.as_str(),
                    provenance.confidence,
                    provenance.source_url.as_deref()
                ],
            )
            .await?;

        if record.ingredients != INGREDIENTS_UNAVAILABLE && !record.ingredients.trim().is_empty() {
            self.conn()
                .execute(
                    "INSERT INTO ingredient_raw (product_id, raw_text, source) VALUES (?1, ?2, ?3)
                     ON CONFLICT(product_id) DO UPDATE SET
                       raw_text = excluded.raw_text, source = excluded.source",
                    libsql::params![
                        product_id.as_str(),
                        record.ingredients.as_str(),
                        provenance.source.as_str()
                    ],
                )
                .await?;
        }

        Ok(product_id)
    }

    /// Most recently updated products first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is invalid.
    pub async fn list_products(&self, limit: u32) -> Result<Vec<StoredProduct>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT p.id, MIN(b.barcode_number), p.product_name, p.brand_name, p.updated_at
                 FROM products p
                 JOIN barcodes b ON b.product_id = p.id
                 GROUP BY p.id
                 ORDER BY p.updated_at DESC, p.id
                 LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_stored(&row)?);
        }
        Ok(results)
    }
}
