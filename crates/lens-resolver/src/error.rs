//! Resolution error types.

use lens_catalog::CatalogError;
use lens_db::DatabaseError;
use thiserror::Error;

/// Why a resolution produced no product.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither the store nor the catalog knows the barcode.
    #[error("product not found: {barcode}")]
    NotFound { barcode: String },

    /// The catalog could not be asked (transport failure or timeout).
    #[error("product source unavailable: {0}")]
    SourceUnavailable(#[from] CatalogError),

    /// The store failed while reading.
    #[error("store error: {0}")]
    Store(#[from] DatabaseError),
}

impl ResolveError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
