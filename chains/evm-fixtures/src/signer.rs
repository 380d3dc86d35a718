use crate::generator::UnsignedFieldSet;
use core_logic::{FixtureKey, SignedTransaction, SigningError, TransactionSigner, WalletError};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionRequest};

/// [`TransactionSigner`] backed by an ethers [`LocalWallet`].
///
/// Produces legacy transactions with EIP-155 replay protection; RLP encoding
/// and ECDSA are entirely ethers' business.
pub struct EthersSigner {
    wallet: LocalWallet,
    key: FixtureKey,
}

impl EthersSigner {
    pub fn new(key: FixtureKey, chain_id: u64) -> Result<Self, WalletError> {
        let wallet = key
            .as_str()
            .parse::<LocalWallet>()
            .map_err(|_| WalletError::InvalidKeyFormat)?;

        Ok(Self {
            wallet: wallet.with_chain_id(chain_id),
            key,
        })
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Builds the legacy request handed to ethers. The payload is decoded
    /// from [`UnsignedFieldSet::data_hex`].
    pub fn request(index: usize, tx: &UnsignedFieldSet) -> Result<TransactionRequest, SigningError> {
        let data = hex::decode(tx.data_hex()).map_err(|e| SigningError::InvalidPayloadHex {
            index,
            reason: e.to_string(),
        })?;

        Ok(TransactionRequest::new()
            .to(tx.to)
            .value(tx.value)
            .gas(tx.gas)
            .gas_price(tx.gas_price)
            .nonce(tx.nonce)
            .data(data)
            .chain_id(tx.chain_id))
    }
}

impl TransactionSigner for EthersSigner {
    type Transaction = UnsignedFieldSet;

    fn sign(&self, index: usize, tx: &UnsignedFieldSet) -> Result<SignedTransaction, SigningError> {
        let typed: TypedTransaction = Self::request(index, tx)?.into();

        let signature = self
            .wallet
            .sign_transaction_sync(&typed)
            .map_err(|e| SigningError::SignerRejected {
                index,
                reason: e.to_string(),
            })?;

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        signature.r.to_big_endian(&mut r);
        signature.s.to_big_endian(&mut s);

        Ok(SignedTransaction {
            raw: typed.rlp_signed(&signature).to_vec(),
            v: signature.v,
            r,
            s,
            sighash: typed.sighash().to_fixed_bytes(),
        })
    }

    fn private_key_hex(&self) -> &str {
        self.key.as_str()
    }
}
