use core_logic::config::{REFERENCE_CHAIN_ID, REFERENCE_COUNT, REFERENCE_PRIVATE_KEY};
use core_logic::{ConfigError, CoreError, FieldRanges, FixtureConfig, WalletError, WalletManager};

#[test]
fn test_field_ranges_partial_override() {
    let ranges: FieldRanges = serde_json::from_str(r#"{ "max_nonce": 5 }"#).unwrap();

    assert_eq!(ranges.max_nonce, 5);
    assert_eq!(ranges.max_value, 10_000_000_000);
    assert_eq!(ranges.max_gas, 10_000_000_000);
    assert_eq!(ranges.max_gas_price, 234_567_897_654_321);
    assert_eq!(ranges.max_data_len, 47);
}

#[test]
fn test_fixture_config_matches_reference_run() {
    let config = FixtureConfig::default();

    assert_eq!(config.count, REFERENCE_COUNT);
    assert_eq!(config.chain_id, REFERENCE_CHAIN_ID);
    assert_eq!(config.ranges, FieldRanges::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_address_surfaces_through_core_error() {
    let err: CoreError = FixtureConfig::new()
        .with_to("0xnothex")
        .validate()
        .unwrap_err()
        .into();

    match err {
        CoreError::Config(ConfigError::InvalidAddress { value }) => assert_eq!(value, "0xnothex"),
        other => panic!("Expected InvalidAddress, got {:?}", other),
    }
}

#[test]
fn test_reference_key_is_default() {
    let key = WalletManager::select_private_key(None, None).unwrap();
    assert_eq!(key.as_str(), REFERENCE_PRIVATE_KEY);
}

#[test]
fn test_configured_key_is_validated() {
    let err = WalletManager::select_private_key(None, Some("0xabc")).unwrap_err();
    assert_eq!(err, WalletError::InvalidKeyLength { length: 3 });
}
