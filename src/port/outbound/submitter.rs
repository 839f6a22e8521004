//! Chain submitter port.

use async_trait::async_trait;

use crate::domain::submission::{SubmissionRequest, TxHash};
use crate::error::Result;

/// Signs and broadcasts market-increase orders.
///
/// One call is one broadcast attempt. Implementations must not retry
/// internally: a resubmission is a new trade and needs a fresh price.
#[async_trait]
pub trait ChainSubmitter: Send + Sync {
    /// Open a market position and return the transaction hash.
    ///
    /// The hash proves broadcast only, not inclusion or fill.
    ///
    /// # Errors
    ///
    /// Returns an error if signing, simulation or broadcast fails.
    async fn open_market_increase_position(&self, request: &SubmissionRequest) -> Result<TxHash>;

    /// Exchange name for logging.
    fn exchange_name(&self) -> &'static str;
}
