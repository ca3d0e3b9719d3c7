//! # lens-config
//!
//! Layered configuration loading for Truth Lens using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRUTHLENS_*` prefix, `__` as separator)
//! 2. Project-level `.truthlens/config.toml`
//! 3. User-level `~/.config/truthlens/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TRUTHLENS_STORE__URL` -> `store.url`,
//! `TRUTHLENS_CATALOG__TIMEOUT_SECS` -> `catalog.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lens_config::LensConfig;
//!
//! let config = LensConfig::load_with_dotenv().expect("config");
//! if config.knowledge_base.wants_remote() {
//!     println!("Knowledge base: {}", config.knowledge_base.url);
//! }
//! ```

mod catalog;
mod error;
mod general;
mod knowledge_base;
mod store;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, RunMode};
pub use knowledge_base::KnowledgeBaseConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "TRUTHLENS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LensConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl LensConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".truthlens/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints that figment cannot express.
    ///
    /// Fixture mode never touches the store or the network, so only the
    /// general section is checked there.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.persist_queue_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.persist_queue_capacity".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.general.mode == RunMode::Fixture {
            return Ok(());
        }
        self.store.validate()?;
        self.catalog.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("truthlens").join("config.toml"))
    }
}
