//! Batch fixture format: a JSON array of `[plaintextFields, signingMetadata]`
//! pairs, pretty-printed with two-space indentation.

use crate::generator::UnsignedFieldSet;
use core_logic::SignedTransaction;
use ethers::utils::to_checksum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Plaintext side of a fixture. Carries no chain id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaintextFields {
    pub to: String,
    pub value: String,
    pub gas: String,
    #[serde(rename = "gasPrice")]
    pub gas_price: String,
    pub nonce: String,
    /// Raw payload bytes, not hex
    pub data: Vec<u8>,
}

impl From<&UnsignedFieldSet> for PlaintextFields {
    fn from(tx: &UnsignedFieldSet) -> Self {
        Self {
            to: to_checksum(&tx.to, None),
            value: format!("{:#x}", tx.value),
            gas: format!("{:#x}", tx.gas),
            gas_price: format!("{:#x}", tx.gas_price),
            nonce: format!("{:#x}", tx.nonce),
            data: tx.data.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningMetadata {
    pub private_key: String,
    pub signed: Vec<u8>,
}

/// One fixture; serializes as a two element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord(pub PlaintextFields, pub SigningMetadata);

impl OutputRecord {
    pub fn new(tx: &UnsignedFieldSet, signed: &SignedTransaction, private_key: &str) -> Self {
        Self(
            PlaintextFields::from(tx),
            SigningMetadata {
                private_key: private_key.to_string(),
                signed: signed.raw.clone(),
            },
        )
    }

    pub fn fields(&self) -> &PlaintextFields {
        &self.0
    }

    pub fn metadata(&self) -> &SigningMetadata {
        &self.1
    }
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Writes `value` pretty-printed, followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Parses a `0x`-prefixed hex quantity as written in [`PlaintextFields`].
pub fn parse_hex_quantity(value: &str) -> Option<u64> {
    let digits = value.strip_prefix("0x")?;
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::parse_address;
    use core_logic::config::REFERENCE_TO;

    fn sample() -> (UnsignedFieldSet, SignedTransaction) {
        let tx = UnsignedFieldSet {
            to: parse_address(REFERENCE_TO).unwrap(),
            value: 0,
            gas: 26,
            gas_price: 234_567_897_654_321,
            nonce: 200,
            chain_id: 0,
            data: vec![1, 255],
        };
        let signed = SignedTransaction {
            raw: vec![0xf8, 0x01],
            v: 35,
            r: [0u8; 32],
            s: [0u8; 32],
            sighash: [0u8; 32],
        };
        (tx, signed)
    }

    #[test]
    fn test_numeric_fields_use_prefixed_hex() {
        let (tx, _) = sample();
        let fields = PlaintextFields::from(&tx);
        assert_eq!(fields.value, "0x0");
        assert_eq!(fields.gas, "0x1a");
        assert_eq!(fields.gas_price, "0xd55698372431");
        assert_eq!(fields.nonce, "0xc8");
    }

    #[test]
    fn test_to_is_checksummed() {
        let (tx, _) = sample();
        assert_eq!(PlaintextFields::from(&tx).to, REFERENCE_TO);
    }

    #[test]
    fn test_record_shape() {
        let (tx, signed) = sample();
        let record = OutputRecord::new(&tx, &signed, "0xkey");
        let value = serde_json::to_value(&record).unwrap();

        let pair = value.as_array().unwrap();
        assert_eq!(pair.len(), 2);

        let keys: Vec<&str> = pair[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["data", "gas", "gasPrice", "nonce", "to", "value"]);

        assert_eq!(pair[0]["data"], serde_json::json!([1, 255]));
        assert_eq!(pair[1]["private_key"], "0xkey");
        assert_eq!(pair[1]["signed"], serde_json::json!([248, 1]));
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let (tx, signed) = sample();
        let rendered = render_json(&vec![OutputRecord::new(&tx, &signed, "0xkey")]).unwrap();
        assert!(rendered.starts_with("[\n  [\n    {\n      \"to\": "));
    }

    #[test]
    fn test_write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &Vec::<OutputRecord>::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x0"), Some(0));
        assert_eq!(parse_hex_quantity("0xc8"), Some(200));
        assert_eq!(parse_hex_quantity("c8"), None);
        assert_eq!(parse_hex_quantity("0xzz"), None);
    }
}
