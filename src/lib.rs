//! Perpwire - market order execution for perpetual-futures exchanges.
//!
//! This crate turns a trade intent (symbol, side, leverage, margin) into a
//! signed market order on a decentralized perpetuals exchange running on an
//! EVM chain.
//!
//! # Architecture
//!
//! - **`domain`** - Value types: product ids, intents, slippage, results
//! - **`port`** - Capability traits: `PriceSource`, `ChainSubmitter`
//! - **`application`** - `SymbolResolver` and `TradeExecutor`
//! - **`adapter`** - KiloEx implementations of the ports (requires `kiloex` feature)
//! - **`infrastructure`** - TOML configuration, logging, wiring
//!
//! # Features
//!
//! - `kiloex` - KiloEx price API and alloy-based order submission (default)
//! - `testkit` - Fake ports for integration tests
//!
//! # Example
//!
//! ```no_run
//! use perpwire::domain::TradeIntent;
//! use perpwire::infrastructure::bootstrap::build_executor;
//! use perpwire::infrastructure::config::settings::Config;
//!
//! # async fn run() -> perpwire::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let executor = build_executor(&config)?;
//! let result = executor.execute(&TradeIntent::new("BTC", "buy", 5, 100)).await?;
//! println!("{}", result.tx_hash);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
