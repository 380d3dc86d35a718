//! # Core Logic - Fixture Configuration
//!
//! Reference constants of the fixture run and the configuration structures
//! built from them. Chain crates layer file/env/CLI overrides on top.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Number of transactions in the reference run
pub const REFERENCE_COUNT: usize = 100;
/// Chain id used to sign the reference run
pub const REFERENCE_CHAIN_ID: u64 = 0;
/// Key every reference fixture is signed with
pub const REFERENCE_PRIVATE_KEY: &str =
    "0xe331b6d69882b4cb4ea581d88e0b604039a3de5967688d3dcffdd2270c0fd109";
/// Destination of every reference fixture
pub const REFERENCE_TO: &str = "0xF0109fC8DF283027b6285cc889F5aA624EaC1F55";
/// Largest chain id whose EIP-155 `v` (`recid + 35 + 2 * chain_id`) fits in a u64
pub const MAX_CHAIN_ID: u64 = (u64::MAX - 36) / 2;

/// Parses a `0x`-prefixed 20 byte hex address.
pub fn parse_address(value: &str) -> Result<[u8; 20], ConfigError> {
    let invalid = || ConfigError::InvalidAddress {
        value: value.to_string(),
    };
    let digits = value.strip_prefix("0x").ok_or_else(invalid)?;
    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    bytes.try_into().map_err(|_| invalid())
}

/// Inclusive upper bounds for the randomly drawn transaction fields.
///
/// The defaults must not change: downstream test suites were generated
/// against exactly these ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRanges {
    pub max_value: u64,
    pub max_gas: u64,
    pub max_gas_price: u64,
    pub max_nonce: u64,
    pub max_data_len: usize,
}

impl Default for FieldRanges {
    fn default() -> Self {
        Self {
            max_value: 10_000_000_000,
            max_gas: 10_000_000_000,
            max_gas_price: 234_567_897_654_321,
            max_nonce: 200,
            max_data_len: 47,
        }
    }
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub count: usize,
    pub chain_id: u64,
    pub to: String,
    pub randomize_to: bool,
    pub seed: Option<u64>,
    pub ranges: FieldRanges,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            count: REFERENCE_COUNT,
            chain_id: REFERENCE_CHAIN_ID,
            to: REFERENCE_TO.to_string(),
            randomize_to: false,
            seed: None,
            ranges: FieldRanges::default(),
        }
    }
}

impl FixtureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    pub fn with_ranges(mut self, ranges: FieldRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Checks the chain id and returns the parsed destination address.
    pub fn validate(&self) -> Result<[u8; 20], ConfigError> {
        if self.chain_id > MAX_CHAIN_ID {
            return Err(ConfigError::InvalidValue {
                field: "chain_id".to_string(),
                reason: format!(
                    "{} exceeds the EIP-155 maximum {}",
                    self.chain_id, MAX_CHAIN_ID
                ),
            });
        }
        parse_address(&self.to)
    }
}
