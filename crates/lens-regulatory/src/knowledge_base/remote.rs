//! Knowledge base backed by the `regulatory_records` table of a libSQL store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use lens_core::{RegulatoryRecord, SubstanceCode};
use lens_db::LensDb;

use super::{KnowledgeBase, KnowledgeBaseSource};
use crate::error::KnowledgeBaseError;

pub struct RemoteKnowledgeBase {
    db: Arc<LensDb>,
}

impl RemoteKnowledgeBase {
    #[must_use]
    pub const fn new(db: Arc<LensDb>) -> Self {
        Self { db }
    }

    /// Confirm the table is readable. Returns the number of records.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeBaseError::Store`] if the table cannot be queried.
    pub async fn probe(&self) -> Result<u64, KnowledgeBaseError> {
        Ok(self.db.count_regulatory_records().await?)
    }
}

#[async_trait]
impl KnowledgeBase for RemoteKnowledgeBase {
    async fn lookup(
        &self,
        code: &SubstanceCode,
    ) -> Result<Option<RegulatoryRecord>, KnowledgeBaseError> {
        Ok(self.db.fetch_regulatory_record(code).await?)
    }

    async fn lookup_batch(
        &self,
        codes: &[SubstanceCode],
    ) -> Result<HashMap<SubstanceCode, RegulatoryRecord>, KnowledgeBaseError> {
        let records = self.db.fetch_regulatory_records(codes).await?;
        Ok(records.into_iter().map(|r| (r.code.clone(), r)).collect())
    }

    fn source(&self) -> KnowledgeBaseSource {
        KnowledgeBaseSource::Remote
    }
}

#[cfg(test)]
mod tests {
    use lens_core::RegulatoryStatus;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::knowledge_base::EmbeddedKnowledgeBase;

    async fn seeded() -> RemoteKnowledgeBase {
        let db = LensDb::open_in_memory().await.unwrap();
        for record in EmbeddedKnowledgeBase::new().records() {
            db.upsert_regulatory_record(&record).await.unwrap();
        }
        RemoteKnowledgeBase::new(Arc::new(db))
    }

    #[tokio::test]
    async fn probe_counts_records() {
        let kb = seeded().await;
        let expected = u64::try_from(EmbeddedKnowledgeBase::new().len()).unwrap();
        assert_eq!(kb.probe().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn remote_matches_embedded() {
        let kb = seeded().await;
        let code = SubstanceCode::new("E917").unwrap();
        let remote = kb.lookup(&code).await.unwrap().unwrap();
        let embedded = EmbeddedKnowledgeBase::new().lookup(&code).await.unwrap().unwrap();
        assert_eq!(remote, embedded);
        assert_eq!(remote.status, RegulatoryStatus::Banned);
    }

    #[tokio::test]
    async fn batch_is_keyed_by_code() {
        let kb = seeded().await;
        let codes = vec![
            SubstanceCode::new("E102").unwrap(),
            SubstanceCode::new("E999").unwrap(),
        ];
        let found = kb.lookup_batch(&codes).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[&codes[0]].name, "Tartrazine (Yellow)");
        assert_eq!(kb.source(), KnowledgeBaseSource::Remote);
    }
}
