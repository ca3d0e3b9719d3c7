//! # lens-catalog
//!
//! External product catalog access for Truth Lens.
//!
//! A [`ProductSource`] answers one question: what does the catalog know
//! about this barcode? Two implementations ship:
//! - [`CatalogClient`]: the Open Food Facts product API
//! - [`FixtureCatalog`]: a bundled offline product set
//!
//! Absence is `Ok(None)`. Errors are reserved for transport failures,
//! timeouts, and unreadable payloads.

mod error;
mod fixtures;
mod http;
mod open_food_facts;
mod product;

pub use error::CatalogError;
pub use fixtures::FixtureCatalog;
pub use open_food_facts::CatalogClient;
pub use product::{RawProduct, extract_substance_codes};

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use lens_core::Barcode;

/// Which kind of catalog backs a [`ProductSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    OpenFoodFacts,
    Fixture,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenFoodFacts => "openfoodfacts",
            Self::Fixture => "fixture",
        }
    }

    /// Trust recorded on barcode links ingested from this source.
    #[must_use]
    pub const fn confidence(self) -> f64 {
        match self {
            Self::OpenFoodFacts => 0.8,
            Self::Fixture => 1.0,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog that can be asked for a product by barcode.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the catalog's payload for `barcode`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog could not be asked or its
    /// answer could not be read. An unknown barcode is `Ok(None)`.
    async fn fetch_canonical(&self, barcode: &Barcode) -> Result<Option<RawProduct>, CatalogError>;

    fn kind(&self) -> SourceKind;

    /// Barcode → product name for every product the source can serve, when
    /// the source is finite. Live catalogs return `None`.
    fn known_barcodes(&self) -> Option<BTreeMap<String, String>> {
        None
    }
}
