//! Static exchange deployment configuration.
//!
//! Loaded once at startup and shared read-only between trades.

use std::fmt;

use serde::Deserialize;

/// Contract addresses of the exchange deployment.
///
/// Defaults are the KiloEx deployment on opBNB mainnet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContractAddresses {
    pub margin: String,
    /// Router receiving market orders.
    pub market: String,
    pub market_trigger: String,
    pub order_book: String,
    pub vault: String,
    pub view: String,
    /// ERC-20 token margin is denominated in.
    pub settlement_token: String,
}

impl ContractAddresses {
    /// Named addresses, in declaration order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, &str); 7] {
        [
            ("margin", &self.margin),
            ("market", &self.market),
            ("market_trigger", &self.market_trigger),
            ("order_book", &self.order_book),
            ("vault", &self.vault),
            ("view", &self.view),
            ("settlement_token", &self.settlement_token),
        ]
    }
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            margin: "0x19653dc8D30E39442B9cc96cb60d755E49A2717c".into(),
            market: "0xa02d433868C7Ad58C8A2A820d6C3FF8a15536ACc".into(),
            market_trigger: "0xe0eE1Cb99843c6dCdeb701707DaaDf9Ea8b752f7".into(),
            order_book: "0x43E3E6FFb2E363E64cD480Cbb7cd0CF47bc6b477".into(),
            vault: "0xA2E2F3726DF754C1848C8fd1CbeA6aAFF84FC5B2".into(),
            view: "0x796f1793599D7b6acA6A87516546DdF8E5F3aA9d".into(),
            settlement_token: "0x9e5AAC1Ba1a2e6aEd6b32689DFcF62A509Ca96f3".into(),
        }
    }
}

/// Fixed-point decimals used when encoding call arguments on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnitScales {
    pub price_decimals: u32,
    pub margin_decimals: u32,
    pub leverage_decimals: u32,
}

impl Default for UnitScales {
    fn default() -> Self {
        Self {
            price_decimals: 18,
            margin_decimals: 18,
            leverage_decimals: 18,
        }
    }
}

/// Network, contracts, fees and wallet for the target exchange.
#[derive(Clone)]
pub struct ExchangeConfig {
    /// Chain label understood by the price source (e.g. "OPBNB").
    pub chain_name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub contracts: ContractAddresses,
    /// Keeper fee sent as transaction value, in wei.
    pub execution_fee: u128,
    pub gas_limit: u64,
    pub units: UnitScales,
    pub wallet_address: Option<String>,
    /// Hex private key. Never printed.
    pub signing_key: Option<String>,
}

impl fmt::Debug for ExchangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeConfig")
            .field("chain_name", &self.chain_name)
            .field("chain_id", &self.chain_id)
            .field("rpc_url", &self.rpc_url)
            .field("contracts", &self.contracts)
            .field("execution_fee", &self.execution_fee)
            .field("gas_limit", &self.gas_limit)
            .field("units", &self.units)
            .field("wallet_address", &self.wallet_address)
            .field("signing_key", &self.signing_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
