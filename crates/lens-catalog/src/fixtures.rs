//! Offline catalog backed by a fixed set of products.
//!
//! Used in fixture mode so the whole pipeline can run without network or
//! credentials. Entries carry additive tags in catalog form (`en:e322`) and
//! go through the same extraction as live payloads.

use std::collections::BTreeMap;

use async_trait::async_trait;
use lens_core::Barcode;

use crate::{ProductSource, SourceKind, error::CatalogError, product::RawProduct};

struct FixtureProduct {
    barcode: &'static str,
    name: &'static str,
    brand: &'static str,
    category: &'static str,
    ingredients: &'static str,
    additives: &'static [&'static str],
}

const PRODUCTS: &[FixtureProduct] = &[
    FixtureProduct {
        barcode: "8901063010116",
        name: "Parle-G Gold Biscuits",
        brand: "Parle",
        category: "Biscuits, Sweet biscuits",
        ingredients: "Wheat Flour (Maida), Sugar, Edible Vegetable Oil (Palm Oil), Invert Syrup, Milk Solids, Leavening Agents [E500(ii), E503(ii)], Salt, Emulsifier [E322 (Soya Lecithin)], Dough Conditioner [E223], Artificial Flavour (Vanilla)",
        additives: &["E500", "E503", "E322", "E223"],
    },
    FixtureProduct {
        barcode: "8901058858242",
        name: "Maggi 2-Minute Noodles Masala",
        brand: "Nestlé",
        category: "Instant noodles, Snacks",
        ingredients: "Wheat Flour (Maida), Palm Oil, Salt, Wheat Gluten, Mineral (Potassium Chloride), Thickener (E412), Acidity Regulators (E501, E500), Humectant (E451), Colour (E150d), Flavour Enhancer (E621, E627, E631)",
        additives: &["E412", "E501", "E500", "E451", "E150d", "E621", "E627", "E631"],
    },
    FixtureProduct {
        barcode: "8906002870059",
        name: "Paper Boat Aam Panna",
        brand: "Paper Boat (Hector Beverages)",
        category: "Beverages, Fruit drinks",
        ingredients: "Water, Sugar, Raw Mango Pulp (15%), Black Salt, Cumin Powder, Mint Extract, Acidity Regulator (E330), Antioxidant (E300), Preservative (E211)",
        additives: &["E330", "E300", "E211"],
    },
    FixtureProduct {
        barcode: "8901725181123",
        name: "Britannia Good Day Cashew Cookies",
        brand: "Britannia",
        category: "Biscuits, Cookies",
        ingredients: "Wheat Flour (Maida), Sugar, Edible Vegetable Oil (Palm), Cashew Nuts (6.5%), Invert Syrup, Butter (2%), Milk Solids, Leavening Agents [E500(ii), E503(ii)], Salt, Emulsifier [E322], Dough Conditioner [E223], Artificial Flavour",
        additives: &["E500", "E503", "E322", "E223"],
    },
    FixtureProduct {
        barcode: "8901491101059",
        name: "Coca-Cola",
        brand: "Coca-Cola",
        category: "Beverages, Carbonated drinks",
        ingredients: "Carbonated Water, Sugar, Colour (E150d), Acidity Regulator (E338), Natural Flavouring (including Caffeine)",
        additives: &["E150d", "E338"],
    },
    FixtureProduct {
        barcode: "8902080020683",
        name: "Lays Classic Salted Chips",
        brand: "Lay's (PepsiCo)",
        category: "Snacks, Potato chips",
        ingredients: "Potato, Edible Vegetable Oil (Palmolein, Rice Bran Oil), Salt, Sugar, Dextrose (Tapioca), Milk Solids, Seasoning [Onion Powder, Acidity Regulator (E330)]",
        additives: &["E330"],
    },
];

impl FixtureProduct {
    fn to_raw(&self) -> RawProduct {
        RawProduct {
            id: Some(self.barcode.to_string()),
            product_name: Some(self.name.to_string()),
            brands: Some(self.brand.to_string()),
            categories: Some(self.category.to_string()),
            ingredients_text: Some(self.ingredients.to_string()),
            ingredients_text_en: None,
            additives_tags: self
                .additives
                .iter()
                .map(|code| format!("en:{}", code.to_ascii_lowercase()))
                .collect(),
            url: None,
        }
    }
}

/// In-process catalog serving the bundled demo products.
pub struct FixtureCatalog {
    products: BTreeMap<String, RawProduct>,
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCatalog {
    #[must_use]
    pub fn new() -> Self {
        let products = PRODUCTS
            .iter()
            .map(|p| (p.barcode.to_string(), p.to_raw()))
            .collect();
        Self { products }
    }

    /// Number of bundled products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductSource for FixtureCatalog {
    async fn fetch_canonical(&self, barcode: &Barcode) -> Result<Option<RawProduct>, CatalogError> {
        Ok(self.products.get(barcode.as_str()).cloned())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Fixture
    }

    fn known_barcodes(&self) -> Option<BTreeMap<String, String>> {
        Some(
            self.products
                .iter()
                .map(|(barcode, p)| (barcode.clone(), p.name().to_string()))
                .collect(),
        )
    }
}
