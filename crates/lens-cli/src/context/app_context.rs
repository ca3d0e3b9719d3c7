use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lens_catalog::{CatalogClient, FixtureCatalog, ProductSource};
use lens_config::{LensConfig, RunMode};
use lens_db::{LensDb, ProductStore};
use lens_regulatory::Enricher;
use lens_resolver::{QueueCounters, Resolver};

/// Shared runtime state for all CLI command handlers.
pub struct AppContext {
    pub config: LensConfig,
    pub store: Arc<LensDb>,
    pub resolver: Resolver,
}

impl AppContext {
    /// Wire the store, catalog, knowledge base, and resolver for `config.general.mode`.
    ///
    /// # Errors
    ///
    /// Returns an error when the local store or the catalog client cannot be
    /// initialized. Remote store and knowledge-base failures fall back to
    /// local alternatives.
    pub async fn init(config: LensConfig) -> anyhow::Result<Self> {
        let (store, source): (Arc<LensDb>, Arc<dyn ProductSource>) = match config.general.mode {
            RunMode::Fixture => {
                let store = LensDb::open_in_memory()
                    .await
                    .context("failed to open in-memory store")?;
                let source: Arc<dyn ProductSource> = Arc::new(FixtureCatalog::new());
                (Arc::new(store), source)
            }
            RunMode::Live => {
                let store = open_store(&config).await?;
                let client = CatalogClient::new(&config.catalog)
                    .context("failed to initialize catalog client")?;
                let source: Arc<dyn ProductSource> = Arc::new(client);
                (Arc::new(store), source)
            }
        };

        let kb = lens_regulatory::connect(&config).await;
        let resolver = Resolver::new(
            Arc::clone(&store) as Arc<dyn ProductStore>,
            source,
            Enricher::new(kb),
            config.general.persist_queue_capacity,
        );

        Ok(Self {
            config,
            store,
            resolver,
        })
    }

    /// Drain pending background writes before the process exits.
    pub async fn shutdown(self) -> QueueCounters {
        self.resolver.shutdown().await
    }
}

async fn open_store(config: &LensConfig) -> anyhow::Result<LensDb> {
    if config.store.is_remote() {
        match open_remote_store(&config.store.url, &config.store.auth_token).await {
            Ok(db) => return Ok(db),
            Err(error) => {
                tracing::warn!(%error, "remote store unavailable; falling back to local");
            }
        }
    }
    open_local_store(&config.store.path).await
}

async fn open_remote_store(url: &str, auth_token: &str) -> anyhow::Result<LensDb> {
    let db = LensDb::open_remote(url, auth_token).await?;
    db.migrate().await?;
    Ok(db)
}

async fn open_local_store(path: &str) -> anyhow::Result<LensDb> {
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create store directory {}", parent.display()))?;
    }
    LensDb::open_local(path)
        .await
        .with_context(|| format!("failed to open local store at {path}"))
}
