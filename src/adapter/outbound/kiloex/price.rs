//! KiloEx index price client.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::debug;

use super::dto::IndexPriceResponse;
use crate::domain::product::ProductId;
use crate::error::{Error, Result};
use crate::infrastructure::config::http::HttpConfig;
use crate::port::PriceSource;

/// Fetches index prices from the KiloEx HTTP API.
///
/// Every call issues a fresh request; prices are never cached.
pub struct KiloexPriceClient {
    client: Client,
    url: String,
}

impl KiloexPriceClient {
    /// Create a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(http.timeout())
            .connect_timeout(http.connect_timeout())
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

/// Extract a usable price from a response body.
///
/// Rejects error codes, missing data and non-positive prices.
pub(crate) fn parse_index_price(body: &str, product_id: ProductId) -> Result<Decimal> {
    let response: IndexPriceResponse = serde_json::from_str(body)?;
    if response.code != 0 {
        return Err(Error::Parse(format!(
            "price API returned code {}: {}",
            response.code,
            response.msg.unwrap_or_default()
        )));
    }
    let data = response
        .data
        .ok_or_else(|| Error::Parse("price API returned no data".to_string()))?;
    if let Some(returned) = data.product_id {
        if returned != product_id.value() {
            return Err(Error::Parse(format!(
                "price API returned product {returned}, expected {product_id}"
            )));
        }
    }
    if data.price <= Decimal::ZERO {
        return Err(Error::Parse(format!("non-positive price {}", data.price)));
    }
    Ok(data.price)
}

#[async_trait]
impl PriceSource for KiloexPriceClient {
    async fn index_price(&self, product_id: ProductId, chain: &str) -> Result<Decimal> {
        debug!(url = %self.url, product_id = %product_id, chain = chain, "Fetching index price");

        let body = self
            .client
            .get(&self.url)
            .query(&[("productId", product_id.to_string()), ("chain", chain.to_string())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_index_price(&body, product_id)
    }

    fn source_name(&self) -> &'static str {
        "kiloex"
    }
}
