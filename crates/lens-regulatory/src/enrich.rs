//! Enrichment Engine: substance codes → ranked findings and a verdict.

use std::sync::Arc;

use lens_core::{
    ConcernLevel, FLAG_REGION, ProductFlag, RegulatoryFinding, RegulatoryStatus,
    RegulatorySummary, SubstanceCode,
};
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeBaseError;
use crate::knowledge_base::{KnowledgeBase, KnowledgeBaseSource};

/// Verdict when the product lists no substances.
pub const VERDICT_NONE: &str = "No additives detected";
pub const VERDICT_BANNED: &str = "Contains BANNED additives";
pub const VERDICT_CONCERN: &str = "Contains additives with health concerns";
pub const VERDICT_RESTRICTED: &str = "Contains restricted additives (within limits)";
pub const VERDICT_PERMITTED: &str = "All additives are FSSAI permitted";

/// Restricted findings at or above this severity raise concern to moderate.
pub const CONCERN_SEVERITY: u8 = 3;

const UNKNOWN_HEALTH_CONCERN: &str =
    "This additive is not in our FSSAI regulation database. It may or may not be permitted.";
const UNKNOWN_NOTE: &str =
    "Not found in FSSAI Appendix A. Check fssai.gov.in for the latest approved list.";

/// Findings plus the summary derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub findings: Vec<RegulatoryFinding>,
    pub summary: RegulatorySummary,
}

/// Placeholder finding for a code the knowledge base does not know.
#[must_use]
pub fn unknown_finding(code: &SubstanceCode) -> RegulatoryFinding {
    RegulatoryFinding {
        code: code.clone(),
        name: "Unknown".to_string(),
        status: RegulatoryStatus::NotListed,
        category: "unknown".to_string(),
        max_limit: "unknown".to_string(),
        health_concern: UNKNOWN_HEALTH_CONCERN.to_string(),
        regulator_note: UNKNOWN_NOTE.to_string(),
        severity: 1,
    }
}

/// Sort by severity, highest first. Stable, so ties keep input order.
pub fn rank(findings: &mut [RegulatoryFinding]) {
    findings.sort_by(|a, b| b.severity.cmp(&a.severity));
}

/// Summary for a product with no substances.
#[must_use]
pub fn empty_summary() -> RegulatorySummary {
    RegulatorySummary {
        overall_status: VERDICT_NONE.to_string(),
        concern_level: ConcernLevel::Safe,
        banned_count: 0,
        restricted_count: 0,
        permitted_count: 0,
        unknown_count: 0,
        total_additives: 0,
    }
}

/// Tally findings by status and pick the first matching verdict:
/// banned, then severe restricted, then any restricted, then permitted.
#[must_use]
pub fn summarize(findings: &[RegulatoryFinding]) -> RegulatorySummary {
    let count = |status: RegulatoryStatus| findings.iter().filter(|f| f.status == status).count();
    let banned_count = count(RegulatoryStatus::Banned);
    let restricted_count = count(RegulatoryStatus::Restricted);

    let severe_restricted = findings
        .iter()
        .any(|f| f.status == RegulatoryStatus::Restricted && f.severity >= CONCERN_SEVERITY);

    let (verdict, concern_level) = if banned_count > 0 {
        (VERDICT_BANNED, ConcernLevel::High)
    } else if severe_restricted {
        (VERDICT_CONCERN, ConcernLevel::Moderate)
    } else if restricted_count > 0 {
        (VERDICT_RESTRICTED, ConcernLevel::Low)
    } else {
        (VERDICT_PERMITTED, ConcernLevel::Safe)
    };

    RegulatorySummary {
        overall_status: verdict.to_string(),
        concern_level,
        banned_count,
        restricted_count,
        permitted_count: count(RegulatoryStatus::Permitted),
        unknown_count: count(RegulatoryStatus::NotListed),
        total_additives: findings.len(),
    }
}

/// Joins substance codes against a [`KnowledgeBase`].
#[derive(Clone)]
pub struct Enricher {
    kb: Arc<dyn KnowledgeBase>,
}

impl Enricher {
    #[must_use]
    pub fn new(kb: Arc<dyn KnowledgeBase>) -> Self {
        Self { kb }
    }

    #[must_use]
    pub fn source(&self) -> KnowledgeBaseSource {
        self.kb.source()
    }

    #[must_use]
    pub fn knowledge_base(&self) -> &Arc<dyn KnowledgeBase> {
        &self.kb
    }

    /// Findings for `codes`, ranked, with their summary.
    ///
    /// A failed batch lookup is logged and every code is reported as
    /// unknown; enrichment itself never fails.
    pub async fn enrich(&self, codes: &[SubstanceCode]) -> Enrichment {
        if codes.is_empty() {
            return Enrichment {
                findings: Vec::new(),
                summary: empty_summary(),
            };
        }

        let matched = match self.kb.lookup_batch(codes).await {
            Ok(matched) => matched,
            Err(error) => {
                tracing::warn!(%error, codes = codes.len(), "knowledge base batch lookup failed");
                std::collections::HashMap::new()
            }
        };

        let mut findings: Vec<RegulatoryFinding> = codes
            .iter()
            .map(|code| {
                matched
                    .get(code)
                    .cloned()
                    .map_or_else(|| unknown_finding(code), RegulatoryFinding::from)
            })
            .collect();
        rank(&mut findings);
        let summary = summarize(&findings);
        Enrichment { findings, summary }
    }

    /// Regional flags to persist for a product: one per substance the
    /// knowledge base knows whose status is not `permitted`, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeBaseError`] if the batch lookup fails.
    pub async fn flags_for(
        &self,
        codes: &[SubstanceCode],
    ) -> Result<Vec<ProductFlag>, KnowledgeBaseError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        let matched = self.kb.lookup_batch(codes).await?;
        Ok(codes
            .iter()
            .filter_map(|code| matched.get(code))
            .filter(|record| record.status != RegulatoryStatus::Permitted)
            .map(|record| ProductFlag {
                region: FLAG_REGION.to_string(),
                additive_code: record.code.clone(),
                flag_type: record.status,
                explanation: format!("Contains {}: {}", record.code, record.regulator_note),
            })
            .collect())
    }
}
