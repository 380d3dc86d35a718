//! # Core Logic - Shared Utilities for Fixture Generation
//!
//! This crate provides the shared pieces used by the chain-specific fixture
//! generators: reference configuration, typed errors, the signing seam,
//! logging and private key handling.
//!
//! ## Modules
//!
//! - [`config`] - Reference constants and generator configuration
//! - [`error`] - Typed error handling with thiserror
//! - [`traits`] - Core trait definitions (transaction signing)
//! - [`utils`] - Utility modules (logger, wallet key handling)

// Module declarations - internal modules marked pub(crate)
pub mod config;
pub mod error;
pub mod traits;
pub(crate) mod utils;

// Selective exports - only public API types
pub use config::{FieldRanges, FixtureConfig};
pub use error::{ConfigError, CoreError, SigningError, WalletError};
pub use traits::{SignedTransaction, TransactionSigner};

// Utils are pub(crate) - only export specific public utilities
pub use utils::{setup_logger, setup_logger_with_file, FixtureKey, WalletManager};
