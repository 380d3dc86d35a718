use crate::config::REFERENCE_PRIVATE_KEY;
use crate::error::WalletError;
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A validated secp256k1 private key, kept in the textual form it was
/// supplied in (fixtures echo it back verbatim).
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FixtureKey {
    hex: String,
}

impl FixtureKey {
    /// Accepts 64 hex digits with an optional `0x` prefix.
    pub fn parse(raw: &str) -> Result<Self, WalletError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 64 {
            return Err(WalletError::InvalidKeyLength {
                length: digits.len(),
            });
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WalletError::InvalidKeyFormat);
        }

        Ok(Self {
            hex: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Debug for FixtureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureKey")
            .field("hex", &"***REDACTED***")
            .finish()
    }
}

pub struct WalletManager;

impl WalletManager {
    /// Environment variable that overrides the configured signing key
    pub const KEY_ENV: &'static str = "FIXTURE_PRIVATE_KEY";

    /// Resolves the signing key: environment first, then the configured
    /// value, then the reference key.
    pub fn resolve_private_key(configured: Option<&str>) -> Result<FixtureKey, WalletError> {
        let from_env = std::env::var(Self::KEY_ENV).ok();
        Self::select_private_key(from_env.as_deref(), configured)
    }

    pub fn select_private_key(
        from_env: Option<&str>,
        configured: Option<&str>,
    ) -> Result<FixtureKey, WalletError> {
        let (source, raw) = match (from_env, configured) {
            (Some(key), _) => ("environment", key),
            (None, Some(key)) => ("config", key),
            (None, None) => ("reference", REFERENCE_PRIVATE_KEY),
        };
        debug!("Using {} private key", source);
        FixtureKey::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_original_text() {
        let key = FixtureKey::parse(REFERENCE_PRIVATE_KEY).unwrap();
        assert_eq!(key.as_str(), REFERENCE_PRIVATE_KEY);

        let bare = FixtureKey::parse(&REFERENCE_PRIVATE_KEY[2..]).unwrap();
        assert_eq!(bare.as_str(), &REFERENCE_PRIVATE_KEY[2..]);
    }

    #[test]
    fn test_parse_rejects_bad_keys() {
        assert_eq!(
            FixtureKey::parse("0x1234"),
            Err(WalletError::InvalidKeyLength { length: 4 })
        );
        let not_hex = format!("0x{}", "zz".repeat(32));
        assert_eq!(
            FixtureKey::parse(&not_hex),
            Err(WalletError::InvalidKeyFormat)
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = FixtureKey::parse(REFERENCE_PRIVATE_KEY).unwrap();
        let printed = format!("{:?}", key);
        assert!(!printed.contains("e331b6d6"));
        assert!(printed.contains("REDACTED"));
    }

    #[test]
    fn test_select_precedence() {
        let env_key = format!("0x{}", "11".repeat(32));
        let cfg_key = format!("0x{}", "22".repeat(32));

        let key = WalletManager::select_private_key(Some(&env_key), Some(&cfg_key)).unwrap();
        assert_eq!(key.as_str(), env_key);

        let key = WalletManager::select_private_key(None, Some(&cfg_key)).unwrap();
        assert_eq!(key.as_str(), cfg_key);

        let key = WalletManager::select_private_key(None, None).unwrap();
        assert_eq!(key.as_str(), REFERENCE_PRIVATE_KEY);
    }
}
