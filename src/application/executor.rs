//! Trade execution.
//!
//! Provides [`TradeExecutor`], which turns a [`TradeIntent`] into a broadcast
//! market order:
//!
//! ```text
//! Start -> SymbolResolved -> PriceFetched -> PriceBounded -> RequestAssembled
//!       -> Submitted | Failed(stage)
//! ```
//!
//! Every call is independent. The only shared state is the read-only
//! [`ExchangeConfig`], and nothing is retried: a failure at any stage ends
//! the call with a [`TradeError`] tagged by that stage.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use super::resolver::SymbolResolver;
use crate::domain::exchange::ExchangeConfig;
use crate::domain::price::Slippage;
use crate::domain::product::ProductId;
use crate::domain::submission::{ReferralCode, SubmissionRequest};
use crate::domain::trade::{Side, SubmissionStatus, TradeIntent, TradeResult};
use crate::error::TradeError;
use crate::port::{ChainSubmitter, PriceSource};

/// How the free-form side string of an intent is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SideParsing {
    /// Case-insensitive "buy" is long, anything else is short.
    #[default]
    Lenient,
    /// Only "buy" or "sell" are accepted; anything else is rejected.
    Strict,
}

/// Per-process trading policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradePolicy {
    pub slippage: Slippage,
    pub side_parsing: SideParsing,
}

/// Executes market orders against one exchange deployment.
pub struct TradeExecutor {
    config: Arc<ExchangeConfig>,
    resolver: SymbolResolver,
    policy: TradePolicy,
    prices: Arc<dyn PriceSource>,
    submitter: Arc<dyn ChainSubmitter>,
}

impl TradeExecutor {
    pub fn new(
        config: ExchangeConfig,
        resolver: SymbolResolver,
        policy: TradePolicy,
        prices: Arc<dyn PriceSource>,
        submitter: Arc<dyn ChainSubmitter>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
            policy,
            prices,
            submitter,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    #[must_use]
    pub const fn resolver(&self) -> &SymbolResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn policy(&self) -> TradePolicy {
        self.policy
    }

    /// Open a market position for the intent.
    ///
    /// Returns only once the transaction has been broadcast. The result's
    /// status reflects submission, not inclusion or fill.
    ///
    /// # Errors
    ///
    /// - [`TradeError::UnsupportedSymbol`] before any I/O when the symbol is unknown
    /// - [`TradeError::InvalidParameter`] for a bad side (strict mode), leverage or margin
    /// - [`TradeError::PriceUnavailable`] when the price source fails, returns a
    ///   non-positive price, or the slippage bound overflows; the submitter is
    ///   never called in that case
    /// - [`TradeError::Submission`] when the chain submitter fails
    pub async fn execute(&self, intent: &TradeIntent) -> Result<TradeResult, TradeError> {
        let product_id = self
            .resolver
            .resolve(&intent.symbol)
            .map_err(|e| self.reject(intent, e))?;

        let side = self.parse_side(&intent.side).map_err(|e| self.reject(intent, e))?;
        let leverage = intent.leverage().map_err(|e| self.reject(intent, e))?;
        let margin = intent.margin().map_err(|e| self.reject(intent, e))?;

        let market_price = self
            .fetch_price(&intent.symbol, product_id)
            .await
            .map_err(|e| self.reject(intent, e))?;
        info!(
            symbol = %intent.symbol,
            product_id = %product_id,
            price = %market_price,
            source = self.prices.source_name(),
            "Fetched market price"
        );

        let acceptable_price = self
            .policy
            .slippage
            .acceptable_price(market_price, side)
            .ok_or_else(|| {
                self.reject(
                    intent,
                    TradeError::PriceUnavailable {
                        symbol: intent.symbol.clone(),
                        product_id,
                        reason: format!("acceptable price overflows for quote {market_price}"),
                    },
                )
            })?;
        let position = side.position();

        info!(
            symbol = %intent.symbol,
            side = %position,
            margin = %margin,
            leverage = %leverage,
            market_price = %market_price,
            acceptable_price = %acceptable_price,
            "Submitting market order"
        );

        let request = SubmissionRequest {
            config: Arc::clone(&self.config),
            product_id,
            margin,
            leverage,
            is_long: side.is_long(),
            acceptable_price,
            referral_code: ReferralCode::NONE,
        };

        let tx_hash = self
            .submitter
            .open_market_increase_position(&request)
            .await
            .map_err(|e| {
                self.reject_priced(
                    intent,
                    &request,
                    market_price,
                    TradeError::Submission {
                        symbol: intent.symbol.clone(),
                        reason: e.to_string(),
                    },
                )
            })?;

        let result = TradeResult {
            tx_hash: tx_hash.to_hex(),
            symbol: intent.symbol.clone(),
            product_id,
            side: position,
            market_price,
            acceptable_price,
            leverage,
            margin,
            status: SubmissionStatus::Submitted,
            submitted_at: Utc::now(),
        };

        info!(
            tx_hash = %result.tx_hash,
            symbol = %result.symbol,
            side = %result.side,
            exchange = self.submitter.exchange_name(),
            "Trade submitted"
        );

        Ok(result)
    }

    fn parse_side(&self, raw: &str) -> Result<Side, TradeError> {
        match self.policy.side_parsing {
            SideParsing::Lenient => {
                let side = Side::classify(raw);
                if !raw.eq_ignore_ascii_case("buy") && !raw.eq_ignore_ascii_case("sell") {
                    warn!(side = raw, classified = %side.position(), "Unrecognized side");
                }
                Ok(side)
            }
            SideParsing::Strict => {
                Side::parse_strict(raw).ok_or_else(|| TradeError::InvalidParameter {
                    field: "side",
                    value: raw.to_string(),
                    reason: "expected 'buy' or 'sell'".to_string(),
                })
            }
        }
    }

    async fn fetch_price(&self, symbol: &str, product_id: ProductId) -> Result<Decimal, TradeError> {
        let unavailable = |reason: String| TradeError::PriceUnavailable {
            symbol: symbol.to_string(),
            product_id,
            reason,
        };

        let price = self
            .prices
            .index_price(product_id, &self.config.chain_name)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if price <= Decimal::ZERO {
            return Err(unavailable(format!("non-positive price {price}")));
        }
        Ok(price)
    }

    /// Log a failed trade with its full context and hand the error back.
    fn reject(&self, intent: &TradeIntent, err: TradeError) -> TradeError {
        error!(
            stage = %err.stage(),
            symbol = %intent.symbol,
            side = %intent.side,
            leverage = %intent.leverage,
            margin = %intent.margin,
            chain = %self.config.chain_name,
            error = %err,
            "Trade failed"
        );
        err
    }

    /// Like [`Self::reject`], for failures after the order was priced.
    fn reject_priced(
        &self,
        intent: &TradeIntent,
        request: &SubmissionRequest,
        market_price: Decimal,
        err: TradeError,
    ) -> TradeError {
        error!(
            stage = %err.stage(),
            symbol = %intent.symbol,
            side = %intent.side,
            leverage = %intent.leverage,
            margin = %intent.margin,
            chain = %self.config.chain_name,
            product_id = request.product_id.value(),
            is_long = request.is_long,
            market_price = %market_price,
            acceptable_price = %request.acceptable_price,
            exchange = self.submitter.exchange_name(),
            error = %err,
            "Trade failed"
        );
        err
    }
}
