use anyhow::Context;
use lens_core::Barcode;
use lens_resolver::ResolveError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NotFound<'a> {
    error: &'static str,
    barcode: &'a str,
}

/// Handle `truthlens lookup <barcode>`.
///
/// An unknown barcode is reported as a JSON payload, not a process error.
pub async fn handle(args: &LookupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let barcode = Barcode::parse(&args.barcode).context("invalid barcode")?;

    match ctx.resolver.resolve(&barcode).await {
        Ok(product) => output(&product, flags.format),
        Err(ResolveError::NotFound { barcode }) => output(&not_found(barcode.as_str()), flags.format),
        Err(error) => Err(error).with_context(|| format!("lookup failed for {barcode}")),
    }
}

const fn not_found(barcode: &str) -> NotFound<'_> {
    NotFound {
        error: "Product not found",
        barcode,
    }
}
