use std::collections::BTreeMap;

use lens_db::StoredProduct;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BarcodesArgs;
use crate::context::AppContext;
use crate::output::output;

const LIVE_MESSAGE: &str = "Scan any barcode; unknown products are fetched from Open Food Facts";

#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum BarcodeListing {
    Fixture {
        barcodes: BTreeMap<String, String>,
    },
    Live {
        message: &'static str,
        stored: Vec<StoredEntry>,
    },
}

#[derive(Debug, Serialize)]
struct StoredEntry {
    barcode: String,
    product_name: String,
    brand: Option<String>,
    updated_at: String,
}

impl From<StoredProduct> for StoredEntry {
    fn from(product: StoredProduct) -> Self {
        Self {
            barcode: product.barcode,
            product_name: product.product_name,
            brand: product.brand,
            updated_at: product.updated_at.to_rfc3339(),
        }
    }
}

/// Handle `truthlens barcodes`.
pub async fn handle(
    args: &BarcodesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let listing = match ctx.resolver.source().known_barcodes() {
        Some(barcodes) => BarcodeListing::Fixture { barcodes },
        None => {
            let stored = ctx.store.list_products(args.limit).await?;
            BarcodeListing::Live {
                message: LIVE_MESSAGE,
                stored: stored.into_iter().map(StoredEntry::from).collect(),
            }
        }
    };
    output(&listing, flags.format)
}
