//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! trading logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring a [`TradeExecutor`](crate::application::TradeExecutor)
//! - [`config`] - Configuration loading and validation

#[cfg(feature = "kiloex")]
pub mod bootstrap;
pub mod config;
