//! # Utilities Module
//!
//! Internal utility modules for the core-logic crate.
//! These modules are marked as `pub(crate)` to enforce API boundaries.

// Internal modules - not part of public API
pub(crate) mod logger;
pub(crate) mod wallet_manager;

// Selective exports - only public utilities
pub use logger::{setup_logger, setup_logger_with_file};
pub use wallet_manager::{FixtureKey, WalletManager};
