use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Lookup(args) => commands::lookup::handle(&args, ctx, flags).await,
        Commands::Barcodes(args) => commands::barcodes::handle(&args, ctx, flags).await,
        Commands::Health => commands::health::handle(ctx, flags).await,
        Commands::Seed => commands::seed::handle(ctx, flags).await,
    }
}
