//! End-to-end enrichment against the embedded knowledge base and a failing
//! stand-in.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use lens_core::{ConcernLevel, RegulatoryRecord, RegulatoryStatus, SubstanceCode};
use lens_regulatory::{
    EmbeddedKnowledgeBase, Enricher, KnowledgeBase, KnowledgeBaseError, KnowledgeBaseSource,
    VERDICT_BANNED, VERDICT_NONE,
};
use pretty_assertions::assert_eq;

fn codes(raw: &[&str]) -> Vec<SubstanceCode> {
    raw.iter().map(|c| SubstanceCode::new(c).unwrap()).collect()
}

fn embedded() -> Enricher {
    Enricher::new(Arc::new(EmbeddedKnowledgeBase::new()))
}

struct BrokenKnowledgeBase;

#[async_trait]
impl KnowledgeBase for BrokenKnowledgeBase {
    async fn lookup(
        &self,
        _code: &SubstanceCode,
    ) -> Result<Option<RegulatoryRecord>, KnowledgeBaseError> {
        Err(lens_db::DatabaseError::Query("connection reset".into()).into())
    }

    async fn lookup_batch(
        &self,
        _codes: &[SubstanceCode],
    ) -> Result<HashMap<SubstanceCode, RegulatoryRecord>, KnowledgeBaseError> {
        Err(lens_db::DatabaseError::Query("connection reset".into()).into())
    }

    fn source(&self) -> KnowledgeBaseSource {
        KnowledgeBaseSource::Remote
    }
}

#[tokio::test]
async fn banned_and_permitted_rank_banned_first() {
    let enrichment = embedded().enrich(&codes(&["E322", "E924"])).await;

    assert_eq!(enrichment.findings.len(), 2);
    assert_eq!(enrichment.findings[0].code.as_str(), "E924");
    assert_eq!(enrichment.findings[0].status, RegulatoryStatus::Banned);
    assert_eq!(enrichment.findings[1].code.as_str(), "E322");
    assert_eq!(enrichment.summary.overall_status, VERDICT_BANNED);
    assert_eq!(enrichment.summary.concern_level, ConcernLevel::High);
}

#[tokio::test]
async fn unmatched_code_becomes_placeholder() {
    let enrichment = embedded().enrich(&codes(&["e999"])).await;

    assert_eq!(enrichment.findings.len(), 1);
    let finding = &enrichment.findings[0];
    assert_eq!(finding.code.as_str(), "E999");
    assert_eq!(finding.name, "Unknown");
    assert_eq!(finding.status, RegulatoryStatus::NotListed);
    assert_eq!(finding.severity, 1);
    assert_eq!(enrichment.summary.unknown_count, 1);
}

#[tokio::test]
async fn empty_list_is_safe() {
    let enrichment = embedded().enrich(&[]).await;

    assert!(enrichment.findings.is_empty());
    assert_eq!(enrichment.summary.overall_status, VERDICT_NONE);
    assert_eq!(enrichment.summary.concern_level, ConcernLevel::Safe);
    assert_eq!(enrichment.summary.total_additives, 0);
}

#[tokio::test]
async fn findings_are_non_increasing_in_severity() {
    // Maggi: E412 E501 E500 E451 E150D E621 E627 E631
    let input = codes(&["E412", "E501", "E500", "E451", "E150D", "E621", "E627", "E631"]);
    let enrichment = embedded().enrich(&input).await;

    let severities: Vec<u8> = enrichment.findings.iter().map(|f| f.severity).collect();
    assert!(severities.windows(2).all(|w| w[0] >= w[1]), "{severities:?}");

    let ties: Vec<&str> = enrichment
        .findings
        .iter()
        .filter(|f| f.severity == 2)
        .map(|f| f.code.as_str())
        .collect();
    assert_eq!(ties, vec!["E451", "E621", "E627", "E631"]);
}

#[tokio::test]
async fn failed_batch_reports_every_code_as_unknown() {
    let enricher = Enricher::new(Arc::new(BrokenKnowledgeBase));
    let enrichment = enricher.enrich(&codes(&["E924", "E322"])).await;

    assert_eq!(enrichment.findings.len(), 2);
    assert!(
        enrichment
            .findings
            .iter()
            .all(|f| f.status == RegulatoryStatus::NotListed)
    );
    assert_eq!(enrichment.summary.unknown_count, 2);
}

#[tokio::test]
async fn flags_cover_known_non_permitted_substances() {
    let flags = embedded()
        .flags_for(&codes(&["E330", "E211", "E999", "E924"]))
        .await
        .unwrap();

    let flagged: Vec<(&str, RegulatoryStatus)> = flags
        .iter()
        .map(|f| (f.additive_code.as_str(), f.flag_type))
        .collect();
    assert_eq!(
        flagged,
        vec![
            ("E211", RegulatoryStatus::Restricted),
            ("E924", RegulatoryStatus::Banned)
        ]
    );
    assert!(flags.iter().all(|f| f.region == "India"));
    assert!(flags[1].explanation.starts_with("Contains E924: "));
}

#[tokio::test]
async fn flags_surface_lookup_failures() {
    let enricher = Enricher::new(Arc::new(BrokenKnowledgeBase));
    assert!(enricher.flags_for(&codes(&["E924"])).await.is_err());
}

#[tokio::test]
async fn repeated_code_matches_every_occurrence() {
    let enrichment = embedded().enrich(&codes(&["E924", "e924"])).await;

    assert_eq!(enrichment.findings.len(), 2);
    assert!(
        enrichment
            .findings
            .iter()
            .all(|f| f.status == RegulatoryStatus::Banned && f.severity == 5)
    );
    assert_eq!(enrichment.summary.banned_count, 2);
    assert_eq!(enrichment.summary.unknown_count, 0);
}

#[tokio::test]
async fn enrichment_serializes_findings_and_summary() {
    let enrichment = embedded().enrich(&codes(&["E322"])).await;
    let value = serde_json::to_value(&enrichment).unwrap();

    assert_eq!(value["findings"][0]["code"], "E322");
    assert_eq!(value["findings"][0]["status"], "permitted");
    assert_eq!(value["summary"]["concern_level"], "safe");
    assert_eq!(value["summary"]["total_additives"], 1);
}
