//! Wallet configuration for signing transactions.

use std::fmt;

use serde::Deserialize;

/// Wallet configuration.
///
/// The private key is loaded from the `WALLET_PRIVATE_KEY` env var at
/// runtime, never from the config file.
#[derive(Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Expected wallet address. Derived from the key when absent.
    #[serde(default)]
    pub address: Option<String>,
    /// Private key loaded from `WALLET_PRIVATE_KEY` env var at runtime
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl WalletConfig {
    /// Fill the private key from `WALLET_PRIVATE_KEY`, ignoring blank values.
    pub fn load_private_key_from_env(&mut self) {
        self.private_key = std::env::var("WALLET_PRIVATE_KEY")
            .ok()
            .map(|key| key.trim().trim_start_matches("0x").to_string())
            .filter(|key| !key.is_empty());
    }
}

impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConfig")
            .field("address", &self.address)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
