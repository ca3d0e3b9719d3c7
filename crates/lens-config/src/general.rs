//! General application configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default capacity of the background persistence queue.
const fn default_persist_queue_capacity() -> usize {
    256
}

/// Where product data comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Open Food Facts plus the persistent store.
    #[default]
    Live,
    /// Built-in demo catalog, in-memory store, embedded knowledge base.
    Fixture,
}

impl RunMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fixture => "fixture",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub mode: RunMode,

    /// Jobs the persistence queue holds before new ones are dropped.
    #[serde(default = "default_persist_queue_capacity")]
    pub persist_queue_capacity: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            persist_queue_capacity: default_persist_queue_capacity(),
        }
    }
}
