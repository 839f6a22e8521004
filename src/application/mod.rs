//! Application layer: trade orchestration over the ports.
//!
//! - [`resolver`] - Symbol to product id lookup
//! - [`executor`] - Price, slippage and submission for one trade

pub mod executor;
pub mod resolver;

pub use executor::{SideParsing, TradeExecutor, TradePolicy};
pub use resolver::SymbolResolver;
