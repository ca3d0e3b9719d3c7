//! Regulatory knowledge-base configuration.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KnowledgeBaseConfig {
    /// Set to `false` to always use the embedded table.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Remote database URL holding the `regulatory_records` table.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl KnowledgeBaseConfig {
    /// Whether a remote knowledge base should be attempted at startup.
    pub fn wants_remote(&self) -> bool {
        self.enabled && !self.url.is_empty() && !self.auth_token.is_empty()
    }
}
