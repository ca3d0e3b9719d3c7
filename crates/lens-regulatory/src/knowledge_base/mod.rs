//! Knowledge Base Gateway.
//!
//! Two implementations of [`KnowledgeBase`]: the remote `regulatory_records`
//! table and the embedded snapshot. [`connect`] picks one once, at startup;
//! the choice is never revisited per request.

mod embedded;
mod remote;
mod snapshot;

pub use embedded::EmbeddedKnowledgeBase;
pub use remote::RemoteKnowledgeBase;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use lens_config::{LensConfig, RunMode};
use lens_core::{RegulatoryRecord, SubstanceCode};
use lens_db::LensDb;

use crate::error::KnowledgeBaseError;

/// Which implementation is serving lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeBaseSource {
    Remote,
    Embedded,
}

impl KnowledgeBaseSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Embedded => "embedded",
        }
    }
}

impl fmt::Display for KnowledgeBaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substance code → regulatory record.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// # Errors
    ///
    /// Returns [`KnowledgeBaseError`] if the backing store fails. An unknown
    /// code is `Ok(None)`.
    async fn lookup(
        &self,
        code: &SubstanceCode,
    ) -> Result<Option<RegulatoryRecord>, KnowledgeBaseError>;

    /// Resolve many codes in one round-trip. Unmatched codes are absent
    /// from the map.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeBaseError`] if the backing store fails.
    async fn lookup_batch(
        &self,
        codes: &[SubstanceCode],
    ) -> Result<HashMap<SubstanceCode, RegulatoryRecord>, KnowledgeBaseError>;

    fn source(&self) -> KnowledgeBaseSource;
}

/// Choose the knowledge base for the lifetime of the process.
///
/// The remote table is used only when configured, enabled, outside fixture
/// mode, and readable right now. Anything else falls back to the embedded
/// snapshot with a warning; this never fails.
pub async fn connect(config: &LensConfig) -> Arc<dyn KnowledgeBase> {
    if config.general.mode == RunMode::Fixture {
        tracing::info!(source = "embedded", "knowledge base: fixture mode");
        return Arc::new(EmbeddedKnowledgeBase::new());
    }
    if !config.knowledge_base.wants_remote() {
        tracing::info!(source = "embedded", "knowledge base: remote not configured");
        return Arc::new(EmbeddedKnowledgeBase::new());
    }

    match connect_remote(&config.knowledge_base.url, &config.knowledge_base.auth_token).await {
        Ok((kb, records)) => {
            tracing::info!(source = "remote", records, "knowledge base: connected");
            Arc::new(kb)
        }
        Err(error) => {
            tracing::warn!(%error, "knowledge base unreachable, falling back to embedded table");
            Arc::new(EmbeddedKnowledgeBase::new())
        }
    }
}

async fn connect_remote(
    url: &str,
    auth_token: &str,
) -> Result<(RemoteKnowledgeBase, u64), KnowledgeBaseError> {
    let db = LensDb::open_remote(url, auth_token).await?;
    let kb = RemoteKnowledgeBase::new(Arc::new(db));
    let records = kb.probe().await?;
    Ok((kb, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_uses_embedded() {
        let kb = connect(&LensConfig::default()).await;
        assert_eq!(kb.source(), KnowledgeBaseSource::Embedded);
    }

    #[tokio::test]
    async fn fixture_mode_ignores_remote_settings() {
        let mut config = LensConfig::default();
        config.general.mode = RunMode::Fixture;
        config.knowledge_base.url = "libsql://kb.example.turso.io".into();
        config.knowledge_base.auth_token = "token".into();
        let kb = connect(&config).await;
        assert_eq!(kb.source(), KnowledgeBaseSource::Embedded);
    }

    #[tokio::test]
    async fn disabled_remote_uses_embedded() {
        let mut config = LensConfig::default();
        config.knowledge_base.enabled = false;
        config.knowledge_base.url = "libsql://kb.example.turso.io".into();
        config.knowledge_base.auth_token = "token".into();
        let kb = connect(&config).await;
        assert_eq!(kb.source(), KnowledgeBaseSource::Embedded);
    }

    #[tokio::test]
    async fn unreachable_remote_falls_back() {
        let mut config = LensConfig::default();
        config.knowledge_base.url = "http://127.0.0.1:9".into();
        config.knowledge_base.auth_token = "token".into();
        let kb = connect(&config).await;
        assert_eq!(kb.source(), KnowledgeBaseSource::Embedded);
    }
}
