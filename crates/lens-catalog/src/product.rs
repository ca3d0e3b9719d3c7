//! Raw catalog payload and its mapping to a [`ProductRecord`].

use std::collections::HashSet;

use lens_core::{Barcode, INGREDIENTS_UNAVAILABLE, ProductRecord, SubstanceCode, UNKNOWN_PRODUCT};
use serde::{Deserialize, Serialize};

/// Product fields as the catalog reports them. Every field is optional;
/// catalogs routinely omit names and ingredient statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProduct {
    /// Catalog's own product identifier.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub ingredients_text_en: Option<String>,
    /// Namespaced additive tags, e.g. `en:e322`.
    #[serde(default)]
    pub additives_tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl RawProduct {
    /// Display name, or [`UNKNOWN_PRODUCT`] when the payload has none.
    #[must_use]
    pub fn name(&self) -> &str {
        non_blank(self.product_name.as_ref()).unwrap_or(UNKNOWN_PRODUCT)
    }

    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        non_blank(self.brands.as_ref())
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        non_blank(self.categories.as_ref())
    }

    /// Ingredient statement, preferring the primary-language field.
    #[must_use]
    pub fn ingredients(&self) -> Option<&str> {
        non_blank(self.ingredients_text.as_ref())
            .or_else(|| non_blank(self.ingredients_text_en.as_ref()))
    }

    /// Substance codes carried by the additive tags, normalized and de-duplicated.
    #[must_use]
    pub fn substance_codes(&self) -> Vec<SubstanceCode> {
        extract_substance_codes(&self.additives_tags)
    }

    /// Build the client-facing record straight from the payload.
    #[must_use]
    pub fn to_record(&self, barcode: &Barcode) -> ProductRecord {
        ProductRecord {
            barcode: barcode.clone(),
            product_name: self.name().to_string(),
            brand: self.brand().map(str::to_string),
            category: self.category().map(str::to_string),
            ingredients: self
                .ingredients()
                .unwrap_or(INGREDIENTS_UNAVAILABLE)
                .to_string(),
            additives: self.substance_codes(),
            flags: Vec::new(),
        }
    }
}

/// Turn namespaced tags (`en:e322`) into substance codes (`E322`).
///
/// Only the part after the last `:` is kept. Values that are not E-numbers
/// are dropped, and each code appears once, in first-seen order.
#[must_use]
pub fn extract_substance_codes<S: AsRef<str>>(tags: &[S]) -> Vec<SubstanceCode> {
    let mut seen = HashSet::new();
    tags.iter()
        .filter_map(|tag| {
            let value = tag.as_ref().rsplit(':').next().unwrap_or_default();
            SubstanceCode::new(value).ok()
        })
        .filter(SubstanceCode::is_e_number)
        .filter(|code| seen.insert(code.clone()))
        .collect()
}
