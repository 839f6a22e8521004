//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `WALLET_PRIVATE_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use perpwire::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::exchange::ExchangeSettings;
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::trading::TradingConfig;
use super::wallet::WalletConfig;
use crate::application::executor::TradePolicy;
use crate::domain::exchange::ExchangeConfig;
use crate::domain::product::SymbolTable;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Network, contracts and fees of the target exchange.
    #[serde(default)]
    pub exchange: ExchangeSettings,

    /// HTTP client settings for price queries.
    #[serde(default)]
    pub http: HttpConfig,

    /// Slippage and side parsing policy.
    #[serde(default)]
    pub trading: TradingConfig,

    /// Symbol to product id table.
    ///
    /// Keys are matched case-insensitively. Supplying the section replaces
    /// the built-in table entirely.
    #[serde(default = "default_symbols")]
    pub symbols: BTreeMap<String, u64>,

    /// Wallet configuration for transaction signing.
    ///
    /// Private key is loaded from `WALLET_PRIVATE_KEY` environment variable.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_symbols() -> BTreeMap<String, u64> {
    BTreeMap::from([("BTC".into(), 1), ("ETH".into(), 2), ("BNB".into(), 3)])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exchange: ExchangeSettings::default(),
            http: HttpConfig::default(),
            trading: TradingConfig::default(),
            symbols: default_symbols(),
            wallet: WalletConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the private key from the `WALLET_PRIVATE_KEY` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., invalid slippage values)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Never from the config file
        config.wallet.load_private_key_from_env();

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.exchange.validate()?;
        self.trading.policy()?;
        self.symbol_table()?;

        if self.symbols.is_empty() {
            return Err(ConfigError::MissingField { field: "symbols" }.into());
        }
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(address) = &self.wallet.address {
            if !super::exchange::is_hex_address(address) {
                return Err(ConfigError::InvalidValue {
                    field: "wallet.address",
                    reason: format!("'{address}' is not a 20-byte hex address"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Build the symbol table.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate symbols or zero product ids.
    pub fn symbol_table(&self) -> Result<SymbolTable> {
        Ok(SymbolTable::from_entries(
            self.symbols.iter().map(|(symbol, id)| (symbol.as_str(), *id)),
        )?)
    }

    /// Build the trade policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the slippage is out of range.
    pub fn policy(&self) -> Result<TradePolicy> {
        Ok(self.trading.policy()?)
    }

    /// Runtime exchange config including wallet credentials.
    #[must_use]
    pub fn exchange_config(&self) -> ExchangeConfig {
        self.exchange.to_exchange_config(&self.wallet)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::executor::SideParsing;
    use crate::domain::product::ProductId;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.exchange.chain_id, 204);
        assert_eq!(config.exchange.chain_name, "OPBNB");
        assert_eq!(config.exchange.gas_limit, 500_000);
        assert_eq!(config.trading.slippage, dec!(0.005));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.policy().unwrap().side_parsing, SideParsing::Lenient);
    }

    #[test]
    fn symbols_section_replaces_defaults() {
        let config = Config::parse_toml(
            r#"
[symbols]
sol = 7
BTC = 1
"#,
        )
        .unwrap();
        let table = config.symbol_table().unwrap();
        assert_eq!(table.get("SOL"), Some(ProductId::new(7)));
        assert_eq!(table.get("ETH"), None);
    }

    #[test]
    fn rejects_case_duplicate_symbols() {
        let result = Config::parse_toml(
            r#"
[symbols]
btc = 1
BTC = 2
"#,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "symbols",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_slippage_of_one() {
        let result = Config::parse_toml(
            r#"
[trading]
slippage = 1.0
"#,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "slippage",
                ..
            }))
        ));
    }

    #[test]
    fn strict_side_switches_policy() {
        let config = Config::parse_toml(
            r#"
[trading]
strict_side = true
slippage = 0.01
"#,
        )
        .unwrap();
        let policy = config.policy().unwrap();
        assert_eq!(policy.side_parsing, SideParsing::Strict);
        assert_eq!(policy.slippage.fraction(), dec!(0.01));
    }

    #[test]
    fn rejects_bad_wallet_address() {
        let result = Config::parse_toml(
            r#"
[wallet]
address = "not-an-address"
"#,
        );
        assert!(result.is_err());
    }
}
