//! # EVM Fixtures
//!
//! Generates randomized legacy (EIP-155) transactions, signs them with
//! ethers and renders them as JSON fixtures for external test suites.

pub mod config;
pub mod generator;
pub mod output;
pub mod signer;
pub mod vector;

pub use generator::{FixtureGenerator, UnsignedFieldSet};
pub use output::{render_json, OutputRecord, PlaintextFields, SigningMetadata};
pub use signer::EthersSigner;
pub use vector::SigningVector;
