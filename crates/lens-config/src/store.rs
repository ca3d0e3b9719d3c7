//! Persistent store (libSQL / Turso) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_path() -> String {
    ".truthlens/truthlens.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Remote database URL (e.g., `libsql://truthlens-org.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file, used when no remote URL is set.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            path: default_path(),
        }
    }
}

impl StoreConfig {
    /// Check if the config has the minimum required fields for remote access.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// A remote URL without a token can never connect.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `url` is set but
    /// `auth_token` is empty, and [`ConfigError::InvalidValue`] when neither
    /// a URL nor a local path is available.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.is_empty() && self.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "store.auth_token".into(),
            });
        }
        if self.url.is_empty() && self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "a local path is required when no remote url is set".into(),
            });
        }
        Ok(())
    }
}
