//! Resolution Controller: cache-aside lookup with a non-blocking write-back.

use std::sync::Arc;

use lens_catalog::{ProductSource, SourceKind};
use lens_core::{Barcode, ProductRecord};
use lens_db::{ProductStore, Provenance};
use lens_regulatory::{Enricher, Enrichment};
use serde::Serialize;

use crate::error::ResolveError;
use crate::persist::{PersistJob, PersistenceQueue, QueueCounters};

/// Where a resolved product came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Store,
    Catalog,
}

/// A product with its regulatory enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProduct {
    #[serde(flatten)]
    pub product: ProductRecord,
    pub origin: Origin,
    pub regulatory: Enrichment,
}

/// Cache-aside resolver over a store and a catalog.
///
/// Store failures surface to the caller instead of falling through to the
/// catalog. Catalog results are returned before they are persisted; the
/// write happens on the background queue and its outcome is never seen by
/// the caller.
pub struct Resolver {
    store: Arc<dyn ProductStore>,
    source: Arc<dyn ProductSource>,
    enricher: Enricher,
    queue: PersistenceQueue,
}

impl Resolver {
    /// Build a resolver and start its persistence worker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(
        store: Arc<dyn ProductStore>,
        source: Arc<dyn ProductSource>,
        enricher: Enricher,
        queue_capacity: usize,
    ) -> Self {
        let queue = PersistenceQueue::start(Arc::clone(&store), enricher.clone(), queue_capacity);
        Self {
            store,
            source,
            enricher,
            queue,
        }
    }

    /// Resolve `barcode` to an enriched product.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Store`] if the store cannot be read
    /// - [`ResolveError::SourceUnavailable`] if the catalog cannot be reached
    /// - [`ResolveError::NotFound`] if nobody knows the barcode
    pub async fn resolve(&self, barcode: &Barcode) -> Result<ResolvedProduct, ResolveError> {
        if self.store.barcode_exists(barcode).await? {
            if let Some(product) = self.store.load_product(barcode).await? {
                tracing::debug!(%barcode, "store hit");
                self.queue.submit(PersistJob::RecordScan {
                    barcode: barcode.clone(),
                });
                return Ok(self.decorate(product, Origin::Store).await);
            }
            tracing::warn!(%barcode, "barcode linked but product unreadable, refetching");
        }

        tracing::debug!(%barcode, source = %self.source.kind(), "store miss");
        let Some(raw) = self.source.fetch_canonical(barcode).await? else {
            return Err(ResolveError::NotFound {
                barcode: barcode.to_string(),
            });
        };

        let product = raw.to_record(barcode);
        let kind = self.source.kind();
        let provenance = Provenance {
            source_product_id: raw.id.clone(),
            source_url: raw.url.clone(),
            ..Provenance::catalog(kind.as_str(), kind.confidence())
        };
        self.queue.submit(PersistJob::Ingest {
            record: product.clone(),
            provenance,
        });

        Ok(self.decorate(product, Origin::Catalog).await)
    }

    async fn decorate(&self, product: ProductRecord, origin: Origin) -> ResolvedProduct {
        let regulatory = self.enricher.enrich(&product.additives).await;
        ResolvedProduct {
            product,
            origin,
            regulatory,
        }
    }

    #[must_use]
    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    #[must_use]
    pub fn source(&self) -> &Arc<dyn ProductSource> {
        &self.source
    }

    #[must_use]
    pub const fn enricher(&self) -> &Enricher {
        &self.enricher
    }

    /// Wait for every background job submitted so far.
    pub async fn flush(&self) {
        self.queue.flush().await;
    }

    #[must_use]
    pub fn queue_counters(&self) -> QueueCounters {
        self.queue.counters()
    }

    /// Stop accepting work and drain the persistence queue.
    pub async fn shutdown(self) -> QueueCounters {
        self.queue.shutdown().await
    }
}
