use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve a barcode to a product and its additive assessment.
    Lookup(LookupArgs),
    /// List barcodes that can be looked up.
    Barcodes(BarcodesArgs),
    /// Report mode and connectivity.
    Health,
    /// Load the embedded regulatory table into the knowledge-base store.
    Seed,
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Product barcode (EAN-13, UPC, ...), at least 5 characters.
    pub barcode: String,
}

#[derive(Clone, Debug, Args)]
pub struct BarcodesArgs {
    /// Max stored products to list in live mode.
    #[arg(short, long, default_value_t = 20)]
    pub limit: u32,
}
