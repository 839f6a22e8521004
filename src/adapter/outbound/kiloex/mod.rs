//! KiloEx exchange integration.
//!
//! - [`price`] - Index prices over the public HTTP API
//! - [`submitter`] - Market-increase orders signed and broadcast with alloy
//! - [`units`] - Decimal to on-chain fixed-point conversion

pub mod dto;
pub mod price;
pub mod submitter;
pub mod units;

pub use price::KiloexPriceClient;
pub use submitter::KiloexSubmitter;
