//! # Core Error Types
//!
//! Centralized error definitions for the core-logic crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use thiserror::Error;

/// Unified error type for core-logic operations.
///
/// This enum wraps all specific error types and provides a unified
/// error interface for the application layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Wallet(WalletError),

    #[error(transparent)]
    Signing(SigningError),
}

impl From<ConfigError> for CoreError {
    fn from(e: ConfigError) -> Self {
        CoreError::Config(e)
    }
}

impl From<WalletError> for CoreError {
    fn from(e: WalletError) -> Self {
        CoreError::Wallet(e)
    }
}

impl From<SigningError> for CoreError {
    fn from(e: SigningError) -> Self {
        CoreError::Signing(e)
    }
}

/// Configuration-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid destination address: '{value}'")]
    InvalidAddress { value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Private key handling errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid private key format: expected hex string")]
    InvalidKeyFormat,

    #[error("Private key has wrong length: expected 64 hex chars, got {length}")]
    InvalidKeyLength { length: usize },
}

/// Failures raised while handing a transaction to the external signer.
///
/// Every variant carries the index of the record being generated; the run
/// aborts on the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("Record {index}: payload hex could not be decoded: {reason}")]
    InvalidPayloadHex { index: usize, reason: String },

    #[error("Record {index}: signer rejected transaction: {reason}")]
    SignerRejected { index: usize, reason: String },
}

impl SigningError {
    /// Index of the record that failed.
    pub fn index(&self) -> usize {
        match self {
            SigningError::InvalidPayloadHex { index, .. }
            | SigningError::SignerRejected { index, .. } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_error_index() {
        let err = SigningError::SignerRejected {
            index: 7,
            reason: "bad key".to_string(),
        };
        assert_eq!(err.index(), 7);
        assert_eq!(
            err.to_string(),
            "Record 7: signer rejected transaction: bad key"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: CoreError = WalletError::InvalidKeyLength { length: 3 }.into();
        assert_eq!(
            err.to_string(),
            "Private key has wrong length: expected 64 hex chars, got 3"
        );
    }
}
