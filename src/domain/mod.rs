//! Exchange-agnostic value types. No I/O.
//!
//! - [`product`] - Product identifiers and the symbol table
//! - [`trade`] - Trade intents, sides and results
//! - [`price`] - Slippage-bounded acceptable prices
//! - [`submission`] - Submission requests, referral codes, transaction hashes
//! - [`exchange`] - Static exchange deployment configuration

pub mod exchange;
pub mod price;
pub mod product;
pub mod submission;
pub mod trade;

pub use exchange::{ContractAddresses, ExchangeConfig, UnitScales};
pub use price::Slippage;
pub use product::{ProductId, SymbolTable};
pub use submission::{ReferralCode, SubmissionRequest, TxHash};
pub use trade::{PositionSide, Side, SubmissionStatus, TradeIntent, TradeResult};
