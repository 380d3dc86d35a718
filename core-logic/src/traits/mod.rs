use crate::error::SigningError;

/// Output of the external signing capability for one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Raw signed transaction, ready for submission
    pub raw: Vec<u8>,
    pub v: u64,
    pub r: [u8; 32],
    pub s: [u8; 32],
    /// Hash that was signed (EIP-155 signing hash for legacy transactions)
    pub sighash: [u8; 32],
}

/// Trait for transaction signing - chains implement this based on their
/// signature scheme and encoding.
pub trait TransactionSigner {
    type Transaction;

    /// Sign and encode `tx`. `index` is the position of the record in the
    /// current run and is only used for error reporting.
    fn sign(&self, index: usize, tx: &Self::Transaction)
        -> Result<SignedTransaction, SigningError>;

    /// The private key exactly as it was handed to the signer
    fn private_key_hex(&self) -> &str;
}
