use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Wallet-derived public key identifying the connected user session.
///
/// The address is treated as an opaque string supplied by the wallet adapter;
/// no base58 or curve validation happens at this layer.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Creates a new `WalletAddress`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided address is empty.
    pub fn new(address: impl Into<String>) -> Self {
        let address_str = address.into();
        debug_assert!(!address_str.is_empty(), "WalletAddress must not be empty");
        Self(address_str)
    }

    /// Returns a string slice of the wallet address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WalletAddress").field(&self.0).finish()
    }
}

impl Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(address: String) -> Self {
        debug_assert!(!address.is_empty(), "WalletAddress must not be empty");
        Self(address)
    }
}

impl From<&str> for WalletAddress {
    fn from(address: &str) -> Self {
        debug_assert!(!address.is_empty(), "WalletAddress must not be empty");
        Self(address.to_string())
    }
}
