//! External product catalog (Open Food Facts) configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "https://world.openfoodfacts.org/api/v2/product".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "truthlens/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Product endpoint; `/{barcode}.json` is appended per lookup.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound for a single lookup, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout or an empty
    /// base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_food_facts() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.base_url,
            "https://world.openfoodfacts.org/api/v2/product"
        );
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = CatalogConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "catalog.timeout_secs"
        ));
    }
}
