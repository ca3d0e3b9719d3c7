//! Knowledge base served from the compiled-in snapshot.

use std::collections::HashMap;

use async_trait::async_trait;
use lens_core::{RegulatoryRecord, SubstanceCode};

use super::snapshot::{ENTRIES, Entry};
use super::{KnowledgeBase, KnowledgeBaseSource};
use crate::error::KnowledgeBaseError;

impl Entry {
    fn to_record(&self) -> Option<RegulatoryRecord> {
        let code = SubstanceCode::new(self.code).ok()?;
        Some(RegulatoryRecord {
            code,
            name: self.name.to_string(),
            status: self.status,
            category: self.category.to_string(),
            max_limit: self.max_limit.to_string(),
            health_concern: self.health_concern.to_string(),
            regulator_note: self.regulator_note.to_string(),
            severity: self.severity,
        })
    }
}

/// In-process knowledge base over the bundled FSSAI snapshot.
pub struct EmbeddedKnowledgeBase {
    records: HashMap<SubstanceCode, RegulatoryRecord>,
}

impl Default for EmbeddedKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedKnowledgeBase {
    #[must_use]
    pub fn new() -> Self {
        let records = ENTRIES
            .iter()
            .filter_map(Entry::to_record)
            .map(|r| (r.code.clone(), r))
            .collect();
        Self { records }
    }

    /// Every record, in snapshot order. Used to seed a remote table.
    #[must_use]
    pub fn records(&self) -> Vec<RegulatoryRecord> {
        ENTRIES.iter().filter_map(Entry::to_record).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn get(&self, code: &SubstanceCode) -> Option<RegulatoryRecord> {
        self.records.get(code).cloned()
    }
}

#[async_trait]
impl KnowledgeBase for EmbeddedKnowledgeBase {
    async fn lookup(
        &self,
        code: &SubstanceCode,
    ) -> Result<Option<RegulatoryRecord>, KnowledgeBaseError> {
        Ok(self.get(code))
    }

    async fn lookup_batch(
        &self,
        codes: &[SubstanceCode],
    ) -> Result<HashMap<SubstanceCode, RegulatoryRecord>, KnowledgeBaseError> {
        Ok(codes
            .iter()
            .filter_map(|code| self.get(code).map(|r| (code.clone(), r)))
            .collect())
    }

    fn source(&self) -> KnowledgeBaseSource {
        KnowledgeBaseSource::Embedded
    }
}
