//! Wire types of the KiloEx price API.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Envelope returned by the index price endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexPriceResponse {
    /// Zero on success.
    #[serde(default)]
    pub code: i64,
    #[serde(default, alias = "message")]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<IndexPriceData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPriceData {
    #[serde(default)]
    pub product_id: Option<u64>,
    /// Accepts both JSON numbers and strings.
    pub price: Decimal,
}
