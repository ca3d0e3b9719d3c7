//! Cache-aside behaviour of the resolver against an in-memory store and
//! stand-in catalogs.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lens_catalog::{CatalogError, ProductSource, RawProduct, SourceKind};
use lens_core::{
    Barcode, ConcernLevel, INGREDIENTS_UNAVAILABLE, ProductFlag, ProductRecord, SubstanceCode,
    UNKNOWN_PRODUCT,
};
use lens_db::{DatabaseError, LensDb, ProductStore, Provenance};
use lens_regulatory::{EmbeddedKnowledgeBase, Enricher};
use lens_resolver::{Origin, ResolveError, Resolver};
use pretty_assertions::assert_eq;
use tokio::sync::Barrier;

const BARCODE: &str = "8901058858242";

/// Catalog that serves fixed payloads and counts calls.
#[derive(Default)]
struct CountingSource {
    products: HashMap<String, RawProduct>,
    calls: AtomicUsize,
    fail: bool,
    /// Holds every fetch until this many are in flight.
    rendezvous: Option<Barrier>,
}

impl CountingSource {
    fn with(barcode: &str, raw: RawProduct) -> Self {
        let mut products = HashMap::new();
        products.insert(barcode.to_string(), raw);
        Self {
            products,
            ..Self::default()
        }
    }

    fn rendezvous(mut self, fetches: usize) -> Self {
        self.rendezvous = Some(Barrier::new(fetches));
        self
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductSource for CountingSource {
    async fn fetch_canonical(&self, barcode: &Barcode) -> Result<Option<RawProduct>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
        if self.fail {
            return Err(CatalogError::Timeout { timeout_secs: 10 });
        }
        Ok(self.products.get(barcode.as_str()).cloned())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::OpenFoodFacts
    }
}

/// Store whose every call fails.
struct BrokenStore;

/// Reads go to a real database; every write fails.
struct ReadOnlyStore(LensDb);

fn broken() -> DatabaseError {
    DatabaseError::Query("database is locked".into())
}

#[async_trait]
impl ProductStore for BrokenStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(broken())
    }

    async fn barcode_exists(&self, _barcode: &Barcode) -> Result<bool, DatabaseError> {
        Err(broken())
    }

    async fn load_product(
        &self,
        _barcode: &Barcode,
    ) -> Result<Option<ProductRecord>, DatabaseError> {
        Err(broken())
    }

    async fn upsert_product(
        &self,
        _record: &ProductRecord,
        _provenance: &Provenance,
    ) -> Result<String, DatabaseError> {
        Err(broken())
    }

    async fn link_substances(
        &self,
        _product_id: &str,
        _codes: &[SubstanceCode],
    ) -> Result<u64, DatabaseError> {
        Err(broken())
    }

    async fn replace_flags(
        &self,
        _product_id: &str,
        _region: &str,
        _flags: &[ProductFlag],
    ) -> Result<(), DatabaseError> {
        Err(broken())
    }

    async fn record_scan(
        &self,
        _barcode: &Barcode,
        _intent: &str,
    ) -> Result<Option<String>, DatabaseError> {
        Err(broken())
    }
}

#[async_trait]
impl ProductStore for ReadOnlyStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.0.ping().await
    }

    async fn barcode_exists(&self, barcode: &Barcode) -> Result<bool, DatabaseError> {
        self.0.barcode_exists(barcode).await
    }

    async fn load_product(
        &self,
        barcode: &Barcode,
    ) -> Result<Option<ProductRecord>, DatabaseError> {
        self.0.load_product(barcode).await
    }

    async fn upsert_product(
        &self,
        _record: &ProductRecord,
        _provenance: &Provenance,
    ) -> Result<String, DatabaseError> {
        Err(DatabaseError::Query("attempt to write a readonly database".into()))
    }

    async fn link_substances(
        &self,
        _product_id: &str,
        _codes: &[SubstanceCode],
    ) -> Result<u64, DatabaseError> {
        Err(DatabaseError::Query("attempt to write a readonly database".into()))
    }

    async fn replace_flags(
        &self,
        _product_id: &str,
        _region: &str,
        _flags: &[ProductFlag],
    ) -> Result<(), DatabaseError> {
        Err(DatabaseError::Query("attempt to write a readonly database".into()))
    }

    async fn record_scan(
        &self,
        _barcode: &Barcode,
        _intent: &str,
    ) -> Result<Option<String>, DatabaseError> {
        Err(DatabaseError::Query("attempt to write a readonly database".into()))
    }
}

fn maggi() -> RawProduct {
    RawProduct {
        id: Some(BARCODE.into()),
        product_name: Some("Maggi 2-Minute Noodles Masala".into()),
        brands: Some("Nestlé".into()),
        categories: Some("Instant noodles".into()),
        ingredients_text: Some("Wheat Flour (Maida), Palm Oil, Salt".into()),
        ingredients_text_en: None,
        additives_tags: vec![
            "en:e621".into(),
            "en:e150d".into(),
            "en:e621".into(),
            "en:e627".into(),
        ],
        url: None,
    }
}

fn enricher() -> Enricher {
    Enricher::new(Arc::new(EmbeddedKnowledgeBase::new()))
}

fn barcode(raw: &str) -> Barcode {
    Barcode::parse(raw).unwrap()
}

async fn count(db: &LensDb, table: &str) -> i64 {
    let mut rows = db
        .conn()
        .query(&format!("SELECT COUNT(*) FROM {table}"), ())
        .await
        .unwrap();
    rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
}

#[tokio::test]
async fn miss_then_hit_serves_equivalent_record() {
    let db = Arc::new(LensDb::open_in_memory().await.unwrap());
    let source = Arc::new(CountingSource::with(BARCODE, maggi()));
    let resolver = Resolver::new(db.clone(), source.clone(), enricher(), 16);

    let first = resolver.resolve(&barcode(&format!(" {BARCODE} "))).await.unwrap();
    assert_eq!(first.origin, Origin::Catalog);
    let codes: Vec<&str> = first.product.additives.iter().map(SubstanceCode::as_str).collect();
    assert_eq!(codes, vec!["E621", "E150D", "E627"]);

    resolver.flush().await;

    let second = resolver.resolve(&barcode(BARCODE)).await.unwrap();
    assert_eq!(second.origin, Origin::Store);
    assert_eq!(second.product.product_name, first.product.product_name);
    assert_eq!(second.product.brand, first.product.brand);
    assert_eq!(second.product.ingredients, first.product.ingredients);
    assert_eq!(second.product.additives, first.product.additives);
    assert_eq!(second.regulatory, first.regulatory);
    assert_eq!(source.calls(), 1);

    let counters = resolver.shutdown().await;
    assert_eq!(counters.completed, 2);
    assert_eq!(db.count_scans(&barcode(BARCODE)).await.unwrap(), 2);
}

#[tokio::test]
async fn catalog_response_carries_enrichment() {
    let db = Arc::new(LensDb::open_in_memory().await.unwrap());
    let source = Arc::new(CountingSource::with(BARCODE, maggi()));
    let resolver = Resolver::new(db, source, enricher(), 16);

    let resolved = resolver.resolve(&barcode(BARCODE)).await.unwrap();
    let summary = &resolved.regulatory.summary;
    // E150D is restricted with severity 3
    assert_eq!(summary.concern_level, ConcernLevel::Moderate);
    assert_eq!(summary.restricted_count, 3);
    assert_eq!(resolved.regulatory.findings[0].code.as_str(), "E150D");
}

#[tokio::test]
async fn unknown_barcode_is_not_found_and_schedules_nothing() {
    let db = Arc::new(LensDb::open_in_memory().await.unwrap());
    let source = Arc::new(CountingSource::default());
    let resolver = Resolver::new(db.clone(), source.clone(), enricher(), 16);

    let err = resolver.resolve(&barcode("0000000000000")).await.unwrap_err();
    assert!(err.is_not_found(), "{err}");
    assert_eq!(source.calls(), 1);

    let counters = resolver.shutdown().await;
    assert_eq!(counters.enqueued, 0);
    assert_eq!(count(&db, "products").await, 0);
}

#[tokio::test]
async fn store_failure_surfaces_without_calling_catalog() {
    let source = Arc::new(CountingSource::with(BARCODE, maggi()));
    let resolver = Resolver::new(Arc::new(BrokenStore), source.clone(), enricher(), 16);

    let err = resolver.resolve(&barcode(BARCODE)).await.unwrap_err();
    assert!(matches!(err, ResolveError::Store(_)), "{err}");
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn catalog_failure_is_source_unavailable() {
    let db = Arc::new(LensDb::open_in_memory().await.unwrap());
    let resolver = Resolver::new(db, Arc::new(CountingSource::failing()), enricher(), 16);

    let err = resolver.resolve(&barcode(BARCODE)).await.unwrap_err();
    assert!(matches!(err, ResolveError::SourceUnavailable(_)), "{err}");
}

#[tokio::test]
async fn failed_write_back_does_not_affect_response() {
    let store = Arc::new(ReadOnlyStore(LensDb::open_in_memory().await.unwrap()));
    let source = Arc::new(CountingSource::with(BARCODE, maggi()));
    let resolver = Resolver::new(store, source, enricher(), 16);

    let resolved = resolver.resolve(&barcode(BARCODE)).await.unwrap();
    assert_eq!(resolved.origin, Origin::Catalog);
    assert_eq!(resolved.product.product_name, "Maggi 2-Minute Noodles Masala");

    let counters = resolver.shutdown().await;
    assert_eq!(counters.enqueued, 1);
    assert_eq!(counters.failed, 1);
}

#[tokio::test]
async fn sparse_payload_uses_placeholders() {
    let db = Arc::new(LensDb::open_in_memory().await.unwrap());
    let source = Arc::new(CountingSource::with(BARCODE, RawProduct::default()));
    let resolver = Resolver::new(db, source, enricher(), 16);

    let resolved = resolver.resolve(&barcode(BARCODE)).await.unwrap();
    assert_eq!(resolved.product.product_name, UNKNOWN_PRODUCT);
    assert_eq!(resolved.product.ingredients, INGREDIENTS_UNAVAILABLE);
    assert!(resolved.product.additives.is_empty());
    assert_eq!(resolved.regulatory.summary.concern_level, ConcernLevel::Safe);
}

#[tokio::test]
async fn concurrent_misses_persist_once() {
    let db = Arc::new(LensDb::open_in_memory().await.unwrap());
    let source = Arc::new(CountingSource::with(BARCODE, maggi()).rendezvous(2));
    let resolver = Resolver::new(db.clone(), source.clone(), enricher(), 16);

    let code = barcode(BARCODE);
    let (a, b) = tokio::join!(resolver.resolve(&code), resolver.resolve(&code));
    assert_eq!(a.unwrap().origin, Origin::Catalog);
    assert_eq!(b.unwrap().origin, Origin::Catalog);
    assert_eq!(source.calls(), 2);

    resolver.shutdown().await;
    assert_eq!(count(&db, "products").await, 1);
    assert_eq!(count(&db, "barcodes").await, 1);
    assert_eq!(count(&db, "product_additives").await, 3);
}

#[tokio::test]
async fn payload_serializes_flat_with_origin() {
    let db = Arc::new(LensDb::open_in_memory().await.unwrap());
    let source = Arc::new(CountingSource::with(BARCODE, maggi()));
    let resolver = Resolver::new(db, source, enricher(), 16);

    let resolved = resolver.resolve(&barcode(BARCODE)).await.unwrap();
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(json["barcode"], BARCODE);
    assert_eq!(json["origin"], "catalog");
    assert_eq!(json["regulatory"]["summary"]["concern_level"], "moderate");
    assert!(json["regulatory"]["findings"].is_array());
}
