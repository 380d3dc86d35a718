use anyhow::Result;
use config::{Config, File};
use core_logic::{ConfigError, FieldRanges, FixtureConfig};
use serde::Deserialize;
use std::path::Path;

/// File-level settings; every key is optional and defaults to the
/// reference run.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EvmFixtureConfig {
    pub count: usize,
    pub chain_id: u64,
    pub private_key: Option<String>,
    pub to: String,
    pub randomize_to: bool,
    pub seed: Option<u64>,
    pub ranges: FieldRanges,
}

/// Command-line values layered over the file settings. `None` keeps the
/// file value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOverrides {
    pub count: Option<usize>,
    pub chain_id: Option<u64>,
    pub seed: Option<u64>,
}

impl Default for EvmFixtureConfig {
    fn default() -> Self {
        let reference = FixtureConfig::default();
        Self {
            count: reference.count,
            chain_id: reference.chain_id,
            private_key: None,
            to: reference.to,
            randomize_to: reference.randomize_to,
            seed: reference.seed,
            ranges: reference.ranges,
        }
    }
}

impl EvmFixtureConfig {
    pub fn load(path: &str) -> Result<Self> {
        let file = Path::new(path);
        if !file.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string(),
            }
            .into());
        }

        let settings = Config::builder().add_source(File::from(file)).build()?;

        settings.try_deserialize().map_err(|e| anyhow::anyhow!(e))
    }

    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(count) = overrides.count {
            self.count = count;
        }
        if let Some(chain_id) = overrides.chain_id {
            self.chain_id = chain_id;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    pub fn to_fixture_config(&self) -> Result<FixtureConfig, ConfigError> {
        let config = FixtureConfig {
            count: self.count,
            chain_id: self.chain_id,
            to: self.to.clone(),
            randomize_to: self.randomize_to,
            seed: self.seed,
            ranges: self.ranges,
        };
        config.validate()?;
        Ok(config)
    }
}
