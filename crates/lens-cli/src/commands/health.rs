use lens_db::DbLocation;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Payload for `truthlens health`.
#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    mode: &'static str,
    database: &'static str,
    knowledge_base: &'static str,
    catalog: &'static str,
}

fn database_state(location: DbLocation, reachable: bool) -> &'static str {
    match (location, reachable) {
        (DbLocation::InMemory, _) => "in-memory",
        (_, true) => "connected",
        (_, false) => "unreachable",
    }
}

fn overall_status(database: &str) -> &'static str {
    if database == "unreachable" {
        "degraded"
    } else {
        "healthy"
    }
}

/// Handle `truthlens health`. Read-only.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reachable = match ctx.store.ping().await {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%error, "store ping failed");
            false
        }
    };
    let database = database_state(ctx.store.location(), reachable);

    let report = HealthReport {
        status: overall_status(database),
        mode: ctx.config.general.mode.as_str(),
        database,
        knowledge_base: ctx.resolver.enricher().source().as_str(),
        catalog: ctx.resolver.source_kind().as_str(),
    };
    output(&report, flags.format)
}
