//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`price`]: Fake [`PriceSource`](crate::port::PriceSource)
//!   implementations: `FixedPriceSource`, `FailingPriceSource`.
//! - [`submitter`]: Fake [`ChainSubmitter`](crate::port::ChainSubmitter)
//!   implementations: `RecordingSubmitter`, `FailingSubmitter`.
//! - [`config`]: Canonical exchange config and symbol table.

pub mod config;
pub mod price;
pub mod submitter;
