//! Background persistence queue.
//!
//! Fire-and-forget: [`PersistenceQueue::submit`] never blocks and never
//! fails; a full buffer drops the job and counts it. One worker task drains
//! the channel in order, so [`PersistenceQueue::flush`] is a barrier for
//! every job submitted before it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lens_core::{Barcode, FLAG_REGION, ProductRecord};
use lens_db::{DatabaseError, ProductStore, Provenance};
use lens_regulatory::Enricher;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Intent recorded for scans logged by resolution.
pub const SCAN_INTENT: &str = "checked";

/// Work for the background worker.
#[derive(Debug)]
pub enum PersistJob {
    /// Write a freshly fetched product, its links, flags, and a scan.
    Ingest {
        record: ProductRecord,
        provenance: Provenance,
    },
    /// Log a scan of an already stored product.
    RecordScan { barcode: Barcode },
    /// Completes once every earlier job has been processed.
    Flush(oneshot::Sender<()>),
}

impl PersistJob {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Ingest { .. } => "ingest",
            Self::RecordScan { .. } => "record_scan",
            Self::Flush(_) => "flush",
        }
    }
}

#[derive(Debug, Default)]
struct QueueStats {
    enqueued: AtomicU64,
    dropped: AtomicU64,
    completed: AtomicU64,
    failed: AtomicU64,
}

/// Point-in-time copy of the queue counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueCounters {
    pub enqueued: u64,
    pub dropped: u64,
    pub completed: u64,
    pub failed: u64,
}

impl QueueStats {
    fn snapshot(&self) -> QueueCounters {
        QueueCounters {
            enqueued: self.enqueued.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

pub struct PersistenceQueue {
    sender: mpsc::Sender<PersistJob>,
    worker: JoinHandle<()>,
    stats: Arc<QueueStats>,
}

impl PersistenceQueue {
    /// Spawn the worker on the current tokio runtime.
    ///
    /// A `capacity` of zero is treated as one.
    #[must_use]
    pub fn start(store: Arc<dyn ProductStore>, enricher: Enricher, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let stats = Arc::new(QueueStats::default());
        let worker = tokio::spawn(run_worker(receiver, store, enricher, Arc::clone(&stats)));
        Self {
            sender,
            worker,
            stats,
        }
    }

    /// Hand a job to the worker without waiting. Returns whether it was accepted.
    pub fn submit(&self, job: PersistJob) -> bool {
        let kind = job.kind();
        match self.sender.try_send(job) {
            Ok(()) => {
                self.stats.enqueued.fetch_add(1, Ordering::Relaxed);
                true
            }
            Err(error) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(job = kind, %error, "persistence job dropped");
                false
            }
        }
    }

    /// Wait until every job submitted so far has been processed.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.sender.send(PersistJob::Flush(done)).await.is_ok() {
            let _ = wait.await;
        }
    }

    #[must_use]
    pub fn counters(&self) -> QueueCounters {
        self.stats.snapshot()
    }

    /// Close the queue and wait for the worker to drain it.
    pub async fn shutdown(self) -> QueueCounters {
        let Self {
            sender,
            worker,
            stats,
        } = self;
        drop(sender);
        if let Err(error) = worker.await {
            tracing::warn!(%error, "persistence worker did not finish cleanly");
        }
        stats.snapshot()
    }
}

async fn run_worker(
    mut receiver: mpsc::Receiver<PersistJob>,
    store: Arc<dyn ProductStore>,
    enricher: Enricher,
    stats: Arc<QueueStats>,
) {
    while let Some(job) = receiver.recv().await {
        let kind = job.kind();
        let result = match job {
            PersistJob::Flush(done) => {
                let _ = done.send(());
                continue;
            }
            PersistJob::Ingest { record, provenance } => {
                ingest(store.as_ref(), &enricher, &record, &provenance).await
            }
            PersistJob::RecordScan { barcode } => store
                .record_scan(&barcode, SCAN_INTENT)
                .await
                .map(|_| ()),
        };
        match result {
            Ok(()) => {
                stats.completed.fetch_add(1, Ordering::Relaxed);
            }
            Err(error) => {
                stats.failed.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(job = kind, %error, "background persistence failed");
            }
        }
    }
    tracing::debug!("persistence worker stopped");
}

/// Write a fetched product. Every step is an upsert, so replaying the job
/// is harmless. Flag derivation failures are logged and skipped.
async fn ingest(
    store: &dyn ProductStore,
    enricher: &Enricher,
    record: &ProductRecord,
    provenance: &Provenance,
) -> Result<(), DatabaseError> {
    let barcode = &record.barcode;
    let product_id = store.upsert_product(record, provenance).await?;
    let linked = store.link_substances(&product_id, &record.additives).await?;

    match enricher.flags_for(&record.additives).await {
        Ok(flags) => {
            if let Err(error) = store.replace_flags(&product_id, FLAG_REGION, &flags).await {
                tracing::warn!(%barcode, %error, "regulatory flags not written");
            }
        }
        Err(error) => tracing::warn!(%barcode, %error, "regulatory flag derivation failed"),
    }

    store.record_scan(barcode, SCAN_INTENT).await?;
    tracing::info!(%barcode, product_id = %product_id, linked, "background ingest complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use lens_db::LensDb;
    use lens_regulatory::EmbeddedKnowledgeBase;
    use pretty_assertions::assert_eq;

    use super::*;

    fn enricher() -> Enricher {
        Enricher::new(Arc::new(EmbeddedKnowledgeBase::new()))
    }

    fn record() -> ProductRecord {
        ProductRecord {
            barcode: Barcode::parse("8901063010116").unwrap(),
            product_name: "Parle-G Gold Biscuits".into(),
            brand: Some("Parle".into()),
            category: None,
            ingredients: "Wheat Flour, Sugar".into(),
            additives: ["E500", "E503", "E322", "E223"]
                .iter()
                .map(|c| lens_core::SubstanceCode::new(c).unwrap())
                .collect(),
            flags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn ingest_writes_product_links_flags_and_scan() {
        let db = Arc::new(LensDb::open_in_memory().await.unwrap());
        let queue = PersistenceQueue::start(db.clone(), enricher(), 8);
        let rec = record();

        assert!(queue.submit(PersistJob::Ingest {
            record: rec.clone(),
            provenance: Provenance::catalog("openfoodfacts", 0.8),
        }));
        queue.flush().await;

        let stored = db.load_product(&rec.barcode).await.unwrap().unwrap();
        assert_eq!(stored.additives, rec.additives);
        // E223 is the only restricted additive in this product
        assert_eq!(stored.flags.len(), 1);
        assert_eq!(stored.flags[0].additive_code.as_str(), "E223");
        assert_eq!(db.count_scans(&rec.barcode).await.unwrap(), 1);

        let counters = queue.shutdown().await;
        assert_eq!(counters.enqueued, 1);
        assert_eq!(counters.completed, 1);
        assert_eq!(counters.failed, 0);
    }

    #[tokio::test]
    async fn scan_of_unknown_barcode_is_not_a_failure() {
        let db = Arc::new(LensDb::open_in_memory().await.unwrap());
        let queue = PersistenceQueue::start(db, enricher(), 8);
        queue.submit(PersistJob::RecordScan {
            barcode: Barcode::parse("0000000000000").unwrap(),
        });
        let counters = queue.shutdown().await;
        assert_eq!(counters.completed, 1);
    }

    #[tokio::test]
    async fn shutdown_drains_pending_jobs() {
        let db = Arc::new(LensDb::open_in_memory().await.unwrap());
        let queue = PersistenceQueue::start(db.clone(), enricher(), 8);
        let rec = record();
        for _ in 0..3 {
            queue.submit(PersistJob::Ingest {
                record: rec.clone(),
                provenance: Provenance::catalog("openfoodfacts", 0.8),
            });
        }
        let counters = queue.shutdown().await;

        assert_eq!(counters.completed, 3);
        assert_eq!(db.count_scans(&rec.barcode).await.unwrap(), 3);
        assert_eq!(db.list_products(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn flush_on_idle_queue_returns() {
        let db = Arc::new(LensDb::open_in_memory().await.unwrap());
        let queue = PersistenceQueue::start(db, enricher(), 1);
        queue.flush().await;
        assert_eq!(queue.counters(), QueueCounters::default());
    }
}
