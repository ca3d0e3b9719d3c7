//! Store seam used by the resolution controller.
//!
//! [`LensDb`] is the production implementation; tests substitute stores
//! that fail or count calls.

use async_trait::async_trait;
use lens_core::{Barcode, ProductFlag, ProductRecord, SubstanceCode};

use crate::LensDb;
use crate::error::DatabaseError;
use crate::repos::products::Provenance;

/// Product persistence as seen by the resolver and its background worker.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn barcode_exists(&self, barcode: &Barcode) -> Result<bool, DatabaseError>;

    async fn load_product(&self, barcode: &Barcode)
    -> Result<Option<ProductRecord>, DatabaseError>;

    /// Returns the id of the written product.
    async fn upsert_product(
        &self,
        record: &ProductRecord,
        provenance: &Provenance,
    ) -> Result<String, DatabaseError>;

    async fn link_substances(
        &self,
        product_id: &str,
        codes: &[SubstanceCode],
    ) -> Result<u64, DatabaseError>;

    async fn replace_flags(
        &self,
        product_id: &str,
        region: &str,
        flags: &[ProductFlag],
    ) -> Result<(), DatabaseError>;

    async fn record_scan(
        &self,
        barcode: &Barcode,
        intent: &str,
    ) -> Result<Option<String>, DatabaseError>;
}

#[async_trait]
impl ProductStore for LensDb {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Self::ping(self).await
    }

    async fn barcode_exists(&self, barcode: &Barcode) -> Result<bool, DatabaseError> {
        Self::barcode_exists(self, barcode).await
    }

    async fn load_product(
        &self,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>, DatabaseError> {
        Self::load_product(self, barcode).await
    }

    async fn upsert_product(
        &self,
        record: &ProductRecord,
        provenance: &Provenance,
    ) -> Result<String, DatabaseError> {
        Self::upsert_product(self, record, provenance).await
    }

    async fn link_substances(
        &self,
        product_id: &str,
        codes: &[SubstanceCode],
    ) -> Result<u64, DatabaseError> {
        Self::link_substances(self, product_id, codes).await
    }

    async fn replace_flags(
        &self,
        product_id: &str,
        region: &str,
        flags: &[ProductFlag],
    ) -> Result<(), DatabaseError> {
        Self::replace_flags(self, product_id, region, flags).await
    }

    async fn record_scan(
        &self,
        barcode: &Barcode,
        intent: &str,
    ) -> Result<Option<String>, DatabaseError> {
        Self::record_scan(self, barcode, intent).await
    }
}
