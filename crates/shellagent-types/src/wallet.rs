//! Connected wallet address

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading characters kept when a key is abbreviated.
pub const ADDRESS_PREFIX_LEN: usize = 8;

/// Public key of the connected wallet, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters followed by an ellipsis.
    pub fn short(&self) -> String {
        let prefix: String = self.0.chars().take(ADDRESS_PREFIX_LEN).collect();
        format!("{prefix}...")
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keeps_eight_chars() {
        let addr = WalletAddress::new("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU");
        assert_eq!(addr.short(), "7xKXtg2C...");
    }

    #[test]
    fn short_handles_tiny_keys() {
        assert_eq!(WalletAddress::new("abc").short(), "abc...");
    }
}
