//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::kiloex::{KiloexPriceClient, KiloexSubmitter};
use crate::application::executor::TradeExecutor;
use crate::application::resolver::SymbolResolver;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build a trade executor wired to the KiloEx adapters.
///
/// # Errors
///
/// Returns an error if the wallet key is missing or invalid, the symbol
/// table or policy is invalid, or the HTTP client cannot be built.
pub fn build_executor(config: &Config) -> Result<TradeExecutor> {
    let exchange = config.exchange_config();
    let resolver = SymbolResolver::new(config.symbol_table()?);
    let policy = config.policy()?;

    let prices = KiloexPriceClient::new(config.exchange.price_api_url.clone(), &config.http)?;
    let submitter = KiloexSubmitter::new(&exchange)?;

    info!(
        chain = %exchange.chain_name,
        chain_id = exchange.chain_id,
        wallet = %submitter.wallet_address(),
        symbols = resolver.table().len(),
        slippage = %policy.slippage.fraction(),
        "Trade executor ready"
    );

    Ok(TradeExecutor::new(
        exchange,
        resolver,
        policy,
        Arc::new(prices),
        Arc::new(submitter),
    ))
}
