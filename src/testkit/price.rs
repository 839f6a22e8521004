//! Fake price sources.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::product::ProductId;
use crate::error::{Error, Result};
use crate::port::PriceSource;

/// Returns the same price for every product and records each query.
pub struct FixedPriceSource {
    price: Decimal,
    calls: Mutex<Vec<(ProductId, String)>>,
}

impl FixedPriceSource {
    pub fn new(price: Decimal) -> Self {
        Self {
            price,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in order.
    pub fn calls(&self) -> Vec<(ProductId, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceSource for FixedPriceSource {
    async fn index_price(&self, product_id: ProductId, chain: &str) -> Result<Decimal> {
        self.calls
            .lock()
            .unwrap()
            .push((product_id, chain.to_string()));
        Ok(self.price)
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// Always fails with the configured reason.
pub struct FailingPriceSource {
    reason: String,
}

impl FailingPriceSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// A source that behaves like a timed-out request.
    pub fn timeout() -> Self {
        Self::new("request timed out")
    }
}

#[async_trait]
impl PriceSource for FailingPriceSource {
    async fn index_price(&self, _product_id: ProductId, _chain: &str) -> Result<Decimal> {
        Err(Error::Connection(self.reason.clone()))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}
