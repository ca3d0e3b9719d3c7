//! # lens-core
//!
//! Core types shared across all Truth Lens crates:
//! - Normalized identifiers (`Barcode`, `SubstanceCode`)
//! - The product record served to scanning clients
//! - Regulatory status, knowledge-base records, findings, and summaries
//! - Cross-cutting validation errors

pub mod errors;
pub mod identity;
pub mod product;
pub mod regulatory;

pub use errors::CoreError;
pub use identity::{Barcode, MIN_BARCODE_LEN, SubstanceCode};
pub use product::{FLAG_REGION, INGREDIENTS_UNAVAILABLE, ProductFlag, ProductRecord, UNKNOWN_PRODUCT};
pub use regulatory::{
    ConcernLevel, MAX_SEVERITY, RegulatoryFinding, RegulatoryRecord, RegulatoryStatus,
    RegulatorySummary,
};
