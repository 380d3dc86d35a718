//! # Fixture Generator
//!
//! Draws random legacy transaction fields, hands each transaction to a
//! [`TransactionSigner`] and collects the results in generation order.

use crate::output::OutputRecord;
use crate::signer::EthersSigner;
use anyhow::Result;
use core_logic::config;
use core_logic::{
    ConfigError, FieldRanges, FixtureConfig, FixtureKey, SignedTransaction, SigningError,
    TransactionSigner,
};
use ethers::types::Address;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Plaintext fields of one transaction, chain id included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedFieldSet {
    pub to: Address,
    pub value: u64,
    pub gas: u64,
    pub gas_price: u64,
    pub nonce: u64,
    pub chain_id: u64,
    pub data: Vec<u8>,
}

impl UnsignedFieldSet {
    /// Payload in the form it is handed to the signer: uppercase hex, two
    /// digits per byte.
    pub fn data_hex(&self) -> String {
        hex::encode_upper(&self.data)
    }
}

pub fn random_bytes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<u8> {
    (0..count).map(|_| rng.gen()).collect()
}

pub fn random_address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    Address::from_slice(&random_bytes(rng, 20))
}

/// Parses a `0x`-prefixed 20 byte hex address.
pub fn parse_address(value: &str) -> Result<Address, ConfigError> {
    config::parse_address(value).map(Address::from)
}

pub struct FixtureGenerator<S, R> {
    signer: S,
    rng: R,
    to: Address,
    chain_id: u64,
    randomize_to: bool,
    ranges: FieldRanges,
}

impl<S> FixtureGenerator<S, StdRng>
where
    S: TransactionSigner<Transaction = UnsignedFieldSet>,
{
    /// Builds a generator whose RNG is seeded from `config.seed`, or from OS
    /// entropy when no seed is configured.
    pub fn from_config(config: &FixtureConfig, signer: S) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, signer, rng)
    }
}

impl<S, R> FixtureGenerator<S, R>
where
    S: TransactionSigner<Transaction = UnsignedFieldSet>,
    R: Rng,
{
    /// Validates `config` first: an out-of-range chain id or a malformed
    /// destination is rejected here, before anything is signed.
    pub fn new(config: &FixtureConfig, signer: S, rng: R) -> Result<Self, ConfigError> {
        let to = Address::from(config.validate()?);
        Ok(Self {
            signer,
            rng,
            to,
            chain_id: config.chain_id,
            randomize_to: config.randomize_to,
            ranges: config.ranges,
        })
    }

    /// Draws one transaction.
    ///
    /// `_len_hint` is ignored. The payload length is always a fresh draw in
    /// `0..=max_data_len`.
    pub fn random_tx(&mut self, _len_hint: usize) -> UnsignedFieldSet {
        let data_len = self.rng.gen_range(0..=self.ranges.max_data_len);
        let data = random_bytes(&mut self.rng, data_len);

        let to = if self.randomize_to {
            random_address(&mut self.rng)
        } else {
            self.to
        };

        UnsignedFieldSet {
            to,
            value: self.rng.gen_range(0..=self.ranges.max_value),
            gas: self.rng.gen_range(0..=self.ranges.max_gas),
            gas_price: self.rng.gen_range(0..=self.ranges.max_gas_price),
            nonce: self.rng.gen_range(0..=self.ranges.max_nonce),
            chain_id: self.chain_id,
            data,
        }
    }

    /// Draws and signs `count` transactions, in order. The first signer
    /// failure aborts the whole run.
    pub fn generate_signed(
        &mut self,
        count: usize,
    ) -> Result<Vec<(UnsignedFieldSet, SignedTransaction)>, SigningError> {
        let mut txs = Vec::with_capacity(count);
        for i in 0..count {
            let tx = self.random_tx(i * 5);
            let signed = self.signer.sign(i, &tx)?;
            debug!(
                "Signed record {}: {} byte payload, {} raw bytes",
                i,
                tx.data.len(),
                signed.raw.len()
            );
            txs.push((tx, signed));
        }
        Ok(txs)
    }

    pub fn generate(&mut self, count: usize) -> Result<Vec<OutputRecord>, SigningError> {
        let key = self.signer.private_key_hex().to_string();
        Ok(self
            .generate_signed(count)?
            .iter()
            .map(|(tx, signed)| OutputRecord::new(tx, signed, &key))
            .collect())
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }
}

/// Generates `count` fixtures for `chain_id` signed with `private_key`,
/// using the reference destination and field ranges.
pub fn generate(count: usize, private_key: &FixtureKey, chain_id: u64) -> Result<Vec<OutputRecord>> {
    let config = FixtureConfig::new().with_count(count).with_chain_id(chain_id);
    let signer = EthersSigner::new(private_key.clone(), chain_id)?;
    let mut generator = FixtureGenerator::from_config(&config, signer)?;
    Ok(generator.generate(count)?)
}
