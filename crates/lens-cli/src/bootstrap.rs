use anyhow::Context;
use figment::providers::Serialized;
use lens_config::{LensConfig, RunMode};

use crate::cli::GlobalFlags;

/// Load `.env`, then extract configuration, forcing fixture mode when
/// `--fixture` is set.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LensConfig> {
    load_dotenv()?;

    let mut figment = LensConfig::figment();
    if flags.fixture {
        figment = figment.merge(Serialized::default("general.mode", RunMode::Fixture));
    }
    LensConfig::from_figment(&figment).context("failed to load truthlens configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load .env file"),
    }
}
