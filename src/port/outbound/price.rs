//! Price source port.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::product::ProductId;
use crate::error::Result;

/// Source of reference index prices.
///
/// Implementations must fail loudly when no price is available. Returning
/// zero in place of an error is a contract violation.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`); a single source is
/// shared by concurrent trades.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current index price of a product on the given chain.
    ///
    /// # Arguments
    ///
    /// * `product_id` - Exchange product identifier
    /// * `chain` - Chain label understood by the source (e.g. "OPBNB")
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be obtained.
    async fn index_price(&self, product_id: ProductId, chain: &str) -> Result<Decimal>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}
