//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the trade core meets the outside world.
//! Adapters implement them for a concrete exchange; tests implement them
//! with fakes.
//!
//! ```text
//!                ┌─────────────────────────┐
//!                │       Application       │
//!                │  SymbolResolver         │
//!                │  TradeExecutor          │
//!                └───────────┬─────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!       ┌─────────────┐             ┌──────────────┐
//!       │ PriceSource │             │ChainSubmitter│
//!       └─────────────┘             └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`PriceSource`] - Reference index price for a product
//! - [`ChainSubmitter`] - Signs and broadcasts the market order

pub mod outbound;

pub use outbound::price::PriceSource;
pub use outbound::submitter::ChainSubmitter;
