use thiserror::Error;

use crate::domain::product::ProductId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Stage of a trade at which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeStage {
    /// Mapping the symbol to a product id.
    SymbolResolution,
    /// Parsing side, leverage and margin.
    ParameterParsing,
    /// Querying the reference price.
    PriceFetch,
    /// Broadcasting the transaction.
    Submission,
}

impl std::fmt::Display for TradeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SymbolResolution => write!(f, "symbol_resolution"),
            Self::ParameterParsing => write!(f, "parameter_parsing"),
            Self::PriceFetch => write!(f, "price_fetch"),
            Self::Submission => write!(f, "submission"),
        }
    }
}

/// Trade execution errors, one variant per failing stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("unsupported symbol: {symbol}")]
    UnsupportedSymbol { symbol: String },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidParameter {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("price unavailable for {symbol} (product {product_id}): {reason}")]
    PriceUnavailable {
        symbol: String,
        product_id: ProductId,
        reason: String,
    },

    #[error("failed to submit {symbol} order: {reason}")]
    Submission { symbol: String, reason: String },
}

impl TradeError {
    /// The stage this error terminated the trade at.
    #[must_use]
    pub const fn stage(&self) -> TradeStage {
        match self {
            Self::UnsupportedSymbol { .. } => TradeStage::SymbolResolution,
            Self::InvalidParameter { .. } => TradeStage::ParameterParsing,
            Self::PriceUnavailable { .. } => TradeStage::PriceFetch,
            Self::Submission { .. } => TradeStage::Submission,
        }
    }

    /// Whether the caller may retry the same intent after a delay.
    ///
    /// Submission failures are not retryable as-is: a new attempt must
    /// fetch a fresh price and recompute the acceptable price.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::PriceUnavailable { .. })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Trade(#[from] TradeError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("chain error: {0}")]
    Chain(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_matches_variant() {
        let err = TradeError::UnsupportedSymbol {
            symbol: "doge".into(),
        };
        assert_eq!(err.stage(), TradeStage::SymbolResolution);

        let err = TradeError::Submission {
            symbol: "BTC".into(),
            reason: "nonce too low".into(),
        };
        assert_eq!(err.stage(), TradeStage::Submission);
        assert_eq!(err.stage().to_string(), "submission");
    }

    #[test]
    fn only_price_failures_are_retryable() {
        let price = TradeError::PriceUnavailable {
            symbol: "BTC".into(),
            product_id: ProductId::new(1),
            reason: "timeout".into(),
        };
        let submission = TradeError::Submission {
            symbol: "BTC".into(),
            reason: "reverted".into(),
        };
        assert!(price.is_retryable());
        assert!(!submission.is_retryable());
    }

    #[test]
    fn unsupported_symbol_message_keeps_original_input() {
        let err = TradeError::UnsupportedSymbol {
            symbol: "dOgE".into(),
        };
        assert_eq!(err.to_string(), "unsupported symbol: dOgE");
    }

    #[test]
    fn trade_error_converts_into_crate_error() {
        let err: Error = TradeError::InvalidParameter {
            field: "margin",
            value: "-1".into(),
            reason: "must be greater than 0".into(),
        }
        .into();
        assert!(matches!(err, Error::Trade(TradeError::InvalidParameter { .. })));
    }
}
