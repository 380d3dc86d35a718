//! Per-transaction signing vectors.
//!
//! Each vector pairs the transaction inputs with the expected signature,
//! signing hash and raw bytes, in the layout the legacy transaction signing
//! test suites read (`input` / `privateKey` / `output`).

use crate::generator::UnsignedFieldSet;
use core_logic::SignedTransaction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorInput {
    pub chain: u64,
    pub nonce: u64,
    pub to: String,
    pub value: u64,
    #[serde(rename = "gasPrice")]
    pub gas_price: u64,
    pub gas: u64,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorOutput {
    pub v: u64,
    pub r: String,
    pub s: String,
    pub bytes: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningVector {
    pub input: VectorInput,
    #[serde(rename = "privateKey")]
    pub private_key: String,
    pub output: VectorOutput,
}

fn prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

impl SigningVector {
    pub fn new(tx: &UnsignedFieldSet, signed: &SignedTransaction, private_key: &str) -> Self {
        Self {
            input: VectorInput {
                chain: tx.chain_id,
                nonce: tx.nonce,
                to: prefixed_hex(tx.to.as_bytes()),
                value: tx.value,
                gas_price: tx.gas_price,
                gas: tx.gas,
                data: prefixed_hex(&tx.data),
            },
            private_key: private_key.to_string(),
            output: VectorOutput {
                v: signed.v,
                r: prefixed_hex(&signed.r),
                s: prefixed_hex(&signed.s),
                bytes: prefixed_hex(&signed.raw),
                hash: prefixed_hex(&signed.sighash),
            },
        }
    }
}
