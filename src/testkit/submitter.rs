//! Fake chain submitters.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::submission::{SubmissionRequest, TxHash};
use crate::error::{Error, Result};
use crate::port::ChainSubmitter;

/// Records every request and returns a deterministic hash.
///
/// The n-th submission (starting at 1) returns 32 bytes of value `n`.
pub struct RecordingSubmitter {
    requests: Mutex<Vec<SubmissionRequest>>,
    counter: AtomicU8,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            counter: AtomicU8::new(0),
        }
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<SubmissionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for RecordingSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainSubmitter for RecordingSubmitter {
    async fn open_market_increase_position(&self, request: &SubmissionRequest) -> Result<TxHash> {
        self.requests.lock().unwrap().push(request.clone());
        let n = self.counter.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        Ok(TxHash::from([n; 32]))
    }

    fn exchange_name(&self) -> &'static str {
        "recording"
    }
}

/// Always fails with the configured reason.
pub struct FailingSubmitter {
    reason: String,
}

impl FailingSubmitter {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ChainSubmitter for FailingSubmitter {
    async fn open_market_increase_position(&self, _request: &SubmissionRequest) -> Result<TxHash> {
        Err(Error::Chain(self.reason.clone()))
    }

    fn exchange_name(&self) -> &'static str {
        "failing"
    }
}
