//! Exchange deployment configuration.

use serde::Deserialize;

use super::wallet::WalletConfig;
use crate::domain::exchange::{ContractAddresses, ExchangeConfig, UnitScales};
use crate::error::ConfigError;

/// Exchange settings as read from the `[exchange]` section.
///
/// Defaults target the KiloEx deployment on opBNB mainnet.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeSettings {
    /// Chain label sent to the price API.
    #[serde(default = "default_chain_name")]
    pub chain_name: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Index price endpoint.
    #[serde(default = "default_price_api_url")]
    pub price_api_url: String,
    #[serde(default)]
    pub contracts: ContractAddresses,
    /// Keeper execution fee in wei, sent as transaction value.
    #[serde(default = "default_execution_fee")]
    pub execution_fee: u64,
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
    #[serde(default)]
    pub units: UnitScales,
}

fn default_chain_name() -> String {
    "OPBNB".into()
}

const fn default_chain_id() -> u64 {
    204
}

fn default_rpc_url() -> String {
    "https://opbnb-mainnet-rpc.bnbchain.org".into()
}

fn default_price_api_url() -> String {
    "https://api.kiloex.io/index/v1/price".into()
}

const fn default_execution_fee() -> u64 {
    7_000_000_000_000
}

const fn default_gas_limit() -> u64 {
    500_000
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            chain_name: default_chain_name(),
            chain_id: default_chain_id(),
            rpc_url: default_rpc_url(),
            price_api_url: default_price_api_url(),
            contracts: ContractAddresses::default(),
            execution_fee: default_execution_fee(),
            gas_limit: default_gas_limit(),
            units: UnitScales::default(),
        }
    }
}

/// True for `0x` followed by exactly 40 hex digits.
pub(crate) fn is_hex_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .and_then(|digits| hex::decode(digits).ok())
        .is_some_and(|bytes| bytes.len() == 20)
}

impl ExchangeSettings {
    /// Check required fields and address formats.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "chain_name",
            });
        }
        if self.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" });
        }
        url::Url::parse(&self.rpc_url).map_err(|e| ConfigError::InvalidValue {
            field: "rpc_url",
            reason: e.to_string(),
        })?;
        url::Url::parse(&self.price_api_url).map_err(|e| ConfigError::InvalidValue {
            field: "price_api_url",
            reason: e.to_string(),
        })?;
        for (name, address) in self.contracts.named() {
            if !is_hex_address(address) {
                return Err(ConfigError::InvalidValue {
                    field: "contracts",
                    reason: format!("{name} address '{address}' is not a 20-byte hex address"),
                });
            }
        }
        if self.gas_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gas_limit",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.units.price_decimals > 36
            || self.units.margin_decimals > 36
            || self.units.leverage_decimals > 36
        {
            return Err(ConfigError::InvalidValue {
                field: "units",
                reason: "decimals must be at most 36".to_string(),
            });
        }
        Ok(())
    }

    /// Combine with wallet credentials into the runtime exchange config.
    #[must_use]
    pub fn to_exchange_config(&self, wallet: &WalletConfig) -> ExchangeConfig {
        ExchangeConfig {
            chain_name: self.chain_name.clone(),
            chain_id: self.chain_id,
            rpc_url: self.rpc_url.clone(),
            contracts: self.contracts.clone(),
            execution_fee: u128::from(self.execution_fee),
            gas_limit: self.gas_limit,
            units: self.units,
            wallet_address: wallet.address.clone(),
            signing_key: wallet.private_key.clone(),
        }
    }
}
