//! Trading policy configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::executor::{SideParsing, TradePolicy};
use crate::domain::price::{Slippage, DEFAULT_SLIPPAGE};
use crate::error::ConfigError;

/// Trading policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TradingConfig {
    /// Slippage fraction applied to both sides (0.005 = 0.5%).
    #[serde(default = "default_slippage")]
    pub slippage: Decimal,
    /// Reject sides other than "buy"/"sell" instead of treating them as short.
    #[serde(default)]
    pub strict_side: bool,
}

fn default_slippage() -> Decimal {
    DEFAULT_SLIPPAGE
}

impl TradingConfig {
    /// Build the executor policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the slippage is outside `[0, 1)`.
    pub fn policy(&self) -> Result<TradePolicy, ConfigError> {
        Ok(TradePolicy {
            slippage: Slippage::new(self.slippage)?,
            side_parsing: if self.strict_side {
                SideParsing::Strict
            } else {
                SideParsing::Lenient
            },
        })
    }
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            slippage: default_slippage(),
            strict_side: false,
        }
    }
}
