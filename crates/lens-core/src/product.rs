//! Product record served to scanning clients.

use serde::{Deserialize, Serialize};

use crate::identity::{Barcode, SubstanceCode};
use crate::regulatory::RegulatoryStatus;

/// Placeholder name when the catalog payload has none.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Placeholder when no ingredient statement is known.
pub const INGREDIENTS_UNAVAILABLE: &str = "Ingredients not available";

/// Region that regulatory flags derived from the knowledge base belong to.
pub const FLAG_REGION: &str = "India";

/// A resolved product.
///
/// `additives` keeps source order; duplicates are removed before a record
/// is built. `flags` are only populated for records read back from the
/// store, since they are derived by background persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub barcode: Barcode,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub ingredients: String,
    pub additives: Vec<SubstanceCode>,
    #[serde(default)]
    pub flags: Vec<ProductFlag>,
}

/// A persisted per-region regulatory flag on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFlag {
    pub region: String,
    pub additive_code: SubstanceCode,
    pub flag_type: RegulatoryStatus,
    pub explanation: String,
}
