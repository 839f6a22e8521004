//! Trade intents, sides and results.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::product::ProductId;
use crate::error::TradeError;

/// Direction requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Two-way classification: any casing of "buy" is a buy, everything
    /// else is a sell. Typos such as "byu" become sells.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("buy") {
            Self::Buy
        } else {
            Self::Sell
        }
    }

    /// Accept only "buy" or "sell" (case-insensitive). Like [`Self::classify`],
    /// whitespace is not stripped, so no input maps to a different direction.
    #[must_use]
    pub fn parse_strict(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("buy") {
            Some(Self::Buy)
        } else if raw.eq_ignore_ascii_case("sell") {
            Some(Self::Sell)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_long(self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Position direction opened by this side.
    #[must_use]
    pub const fn position(self) -> PositionSide {
        match self {
            Self::Buy => PositionSide::Long,
            Self::Sell => PositionSide::Short,
        }
    }
}

/// Direction of the opened position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    Long,
    Short,
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

/// A request to open a market position.
///
/// Side, leverage and margin are kept as the caller supplied them and are
/// interpreted during execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TradeIntent {
    pub symbol: String,
    pub side: String,
    #[serde(deserialize_with = "string_or_number")]
    pub leverage: String,
    #[serde(deserialize_with = "string_or_number")]
    pub margin: String,
}

impl TradeIntent {
    pub fn new(
        symbol: impl Into<String>,
        side: impl Into<String>,
        leverage: impl ToString,
        margin: impl ToString,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side: side.into(),
            leverage: leverage.to_string(),
            margin: margin.to_string(),
        }
    }

    /// Leverage as a positive decimal.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::InvalidParameter`] if the value is not a
    /// positive decimal.
    pub fn leverage(&self) -> Result<Decimal, TradeError> {
        parse_positive("leverage", &self.leverage)
    }

    /// Margin as a positive decimal.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::InvalidParameter`] if the value is not a
    /// positive decimal.
    pub fn margin(&self) -> Result<Decimal, TradeError> {
        parse_positive("margin", &self.margin)
    }
}

fn parse_positive(field: &'static str, raw: &str) -> Result<Decimal, TradeError> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| TradeError::InvalidParameter {
            field,
            value: raw.to_string(),
            reason: e.to_string(),
        })?;
    if value <= Decimal::ZERO {
        return Err(TradeError::InvalidParameter {
            field,
            value: raw.to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    Ok(value)
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Outcome status of a trade.
///
/// `Submitted` means the transaction was broadcast. It says nothing about
/// inclusion or fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
}

/// Record of a broadcast market order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeResult {
    /// Transaction hash, lowercase hex without prefix.
    pub tx_hash: String,
    /// Symbol as supplied by the caller.
    pub symbol: String,
    pub product_id: ProductId,
    pub side: PositionSide,
    /// Reference price the acceptable price was derived from.
    pub market_price: Decimal,
    pub acceptable_price: Decimal,
    pub leverage: Decimal,
    pub margin: Decimal,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}
