#![allow(dead_code)]

use std::sync::Arc;

use perpwire::application::{SymbolResolver, TradeExecutor, TradePolicy};
use perpwire::port::{ChainSubmitter, PriceSource};
use perpwire::testkit::config::{exchange_config, symbol_table};

/// Executor over the canonical test config with the given ports.
pub fn executor(
    prices: Arc<dyn PriceSource>,
    submitter: Arc<dyn ChainSubmitter>,
    policy: TradePolicy,
) -> TradeExecutor {
    TradeExecutor::new(
        exchange_config(),
        SymbolResolver::new(symbol_table()),
        policy,
        prices,
        submitter,
    )
}
