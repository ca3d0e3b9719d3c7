use std::sync::Arc;

use anyhow::Context;
use lens_config::KnowledgeBaseConfig;
use lens_core::{RegulatoryRecord, RegulatoryStatus};
use lens_db::LensDb;
use lens_regulatory::EmbeddedKnowledgeBase;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

const TOP_RECORDS: u32 = 5;

#[derive(Debug, Serialize)]
struct SeedReport {
    target: &'static str,
    upserted: usize,
    failed: usize,
    total: u64,
    top: Vec<TopRecord>,
}

#[derive(Debug, Serialize)]
struct TopRecord {
    code: String,
    name: String,
    status: RegulatoryStatus,
    severity: u8,
}

impl From<RegulatoryRecord> for TopRecord {
    fn from(record: RegulatoryRecord) -> Self {
        Self {
            code: record.code.into(),
            name: record.name,
            status: record.status,
            severity: record.severity,
        }
    }
}

/// Handle `truthlens seed`.
///
/// Writes go to the remote knowledge-base database when one is configured,
/// otherwise to the application store.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (target, db) = seed_target(&ctx.config.knowledge_base, &ctx.store).await?;
    let records = EmbeddedKnowledgeBase::new().records();
    let report = seed(&db, target, &records).await?;
    output(&report, flags.format)
}

async fn seed_target(
    config: &KnowledgeBaseConfig,
    store: &Arc<LensDb>,
) -> anyhow::Result<(&'static str, Arc<LensDb>)> {
    if config.url.is_empty() || config.auth_token.is_empty() {
        return Ok(("local", Arc::clone(store)));
    }
    let db = LensDb::open_remote(&config.url, &config.auth_token)
        .await
        .context("failed to connect to knowledge base database")?;
    db.migrate()
        .await
        .context("failed to migrate knowledge base database")?;
    Ok(("remote", Arc::new(db)))
}

async fn seed(
    db: &LensDb,
    target: &'static str,
    records: &[RegulatoryRecord],
) -> anyhow::Result<SeedReport> {
    let mut upserted = 0;
    let mut failed = 0;
    for record in records {
        match db.upsert_regulatory_record(record).await {
            Ok(()) => upserted += 1,
            Err(error) => {
                tracing::warn!(code = %record.code, %error, "failed to seed regulatory record");
                failed += 1;
            }
        }
    }
    tracing::info!(store = target, upserted, failed, "seeded regulatory records");

    let total = db
        .count_regulatory_records()
        .await
        .context("failed to count regulatory records")?;
    let top = db
        .top_regulatory_records(TOP_RECORDS)
        .await
        .context("failed to read back regulatory records")?;

    Ok(SeedReport {
        target,
        upserted,
        failed,
        total,
        top: top.into_iter().map(TopRecord::from).collect(),
    })
}
