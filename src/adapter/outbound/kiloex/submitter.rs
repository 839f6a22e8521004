//! Market order submission to the KiloEx router contract.
//!
//! Signs `increaseMarket` with the configured wallet and broadcasts it over
//! the deployment's RPC endpoint. Returns as soon as the node accepts the
//! transaction; inclusion is not awaited.

use std::str::FromStr;

use alloy_primitives::{Address, FixedBytes, U256};
use alloy_provider::ProviderBuilder;
use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::info;

use super::units::to_units;
use crate::domain::exchange::ExchangeConfig;
use crate::domain::submission::{SubmissionRequest, TxHash};
use crate::error::{ConfigError, Error, Result};
use crate::port::ChainSubmitter;

// Market router interface (market orders only)
sol! {
    #[sol(rpc)]
    interface IMarketRouter {
        function increaseMarket(
            uint256 productId,
            uint256 margin,
            uint256 leverage,
            bool isLong,
            uint256 acceptablePrice,
            uint256 executionFee,
            bytes32 referralCode
        ) external payable;
    }
}

/// Chain submitter for KiloEx market orders.
pub struct KiloexSubmitter {
    /// Local signer derived from the wallet private key.
    signer: PrivateKeySigner,
}

impl KiloexSubmitter {
    /// Create a submitter from the exchange configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the private key is missing or invalid, or if it
    /// does not match the configured wallet address.
    pub fn new(config: &ExchangeConfig) -> Result<Self> {
        let key = config
            .signing_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY",
            })?;

        let signer = PrivateKeySigner::from_str(key.trim())
            .map_err(|e| ConfigError::InvalidValue {
                field: "WALLET_PRIVATE_KEY",
                reason: e.to_string(),
            })?
            .with_chain_id(Some(config.chain_id));

        if let Some(expected) = &config.wallet_address {
            let expected = parse_address("wallet.address", expected)?;
            if expected != signer.address() {
                return Err(ConfigError::InvalidValue {
                    field: "wallet.address",
                    reason: format!(
                        "private key controls {}, not {expected}",
                        signer.address()
                    ),
                }
                .into());
            }
        }

        Ok(Self { signer })
    }

    /// Return the wallet address derived from the private key.
    #[must_use]
    pub fn wallet_address(&self) -> Address {
        self.signer.address()
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address> {
    Address::from_str(value).map_err(|e| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Encoded `increaseMarket` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IncreaseMarketArgs {
    pub product_id: U256,
    pub margin: U256,
    pub leverage: U256,
    pub is_long: bool,
    pub acceptable_price: U256,
    pub execution_fee: U256,
    pub referral_code: FixedBytes<32>,
}

impl IncreaseMarketArgs {
    pub(crate) fn encode(request: &SubmissionRequest) -> Result<Self> {
        let units = request.config.units;
        Ok(Self {
            product_id: U256::from(request.product_id.value()),
            margin: to_units(request.margin, units.margin_decimals)?,
            leverage: to_units(request.leverage, units.leverage_decimals)?,
            is_long: request.is_long,
            acceptable_price: to_units(request.acceptable_price, units.price_decimals)?,
            execution_fee: U256::from(request.config.execution_fee),
            referral_code: FixedBytes::from(*request.referral_code.as_bytes()),
        })
    }
}

#[async_trait]
impl ChainSubmitter for KiloexSubmitter {
    async fn open_market_increase_position(&self, request: &SubmissionRequest) -> Result<TxHash> {
        let config = &request.config;
        let args = IncreaseMarketArgs::encode(request)?;
        let market = parse_address("contracts.market", &config.contracts.market)?;

        let rpc_url: url::Url = config.rpc_url.parse()?;
        let wallet = alloy_provider::network::EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(rpc_url);

        let router = IMarketRouter::new(market, &provider);
        let pending = router
            .increaseMarket(
                args.product_id,
                args.margin,
                args.leverage,
                args.is_long,
                args.acceptable_price,
                args.execution_fee,
                args.referral_code,
            )
            .value(args.execution_fee)
            .gas(config.gas_limit)
            .send()
            .await
            .map_err(|e| Error::Chain(format!("failed to send increaseMarket: {e}")))?;

        let tx_hash = TxHash::from(pending.tx_hash().0);
        info!(
            tx_hash = %tx_hash,
            from = %self.signer.address(),
            market = %market,
            chain_id = config.chain_id,
            "Market order broadcast"
        );

        Ok(tx_hash)
    }

    fn exchange_name(&self) -> &'static str {
        "KiloEx"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::product::ProductId;
    use crate::domain::submission::ReferralCode;
    use crate::testkit::config::exchange_config;
    use rust_decimal_macros::dec;

    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn request() -> SubmissionRequest {
        SubmissionRequest {
            config: Arc::new(exchange_config()),
            product_id: ProductId::new(1),
            margin: dec!(100),
            leverage: dec!(5),
            is_long: true,
            acceptable_price: dec!(60000) * dec!(1.005),
            referral_code: ReferralCode::NONE,
        }
    }

    #[test]
    fn derives_wallet_address_from_key() {
        let submitter = KiloexSubmitter::new(&exchange_config()).unwrap();
        assert_eq!(
            submitter.wallet_address(),
            Address::from_str(DEV_ADDRESS).unwrap()
        );
    }

    #[test]
    fn rejects_missing_key() {
        let config = ExchangeConfig {
            signing_key: None,
            ..exchange_config()
        };
        assert!(matches!(
            KiloexSubmitter::new(&config),
            Err(Error::Config(ConfigError::MissingField {
                field: "WALLET_PRIVATE_KEY"
            }))
        ));
    }

    #[test]
    fn rejects_malformed_key() {
        let config = ExchangeConfig {
            signing_key: Some("not-hex".into()),
            ..exchange_config()
        };
        assert!(KiloexSubmitter::new(&config).is_err());
    }

    #[test]
    fn rejects_key_for_other_wallet() {
        let config = ExchangeConfig {
            wallet_address: Some("0x0000000000000000000000000000000000000001".into()),
            ..exchange_config()
        };
        assert!(matches!(
            KiloexSubmitter::new(&config),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "wallet.address",
                ..
            }))
        ));
    }

    #[test]
    fn accepts_matching_wallet_address() {
        let config = ExchangeConfig {
            wallet_address: Some(DEV_ADDRESS.to_lowercase()),
            ..exchange_config()
        };
        assert!(KiloexSubmitter::new(&config).is_ok());
    }

    #[tokio::test]
    async fn malformed_rpc_url_fails_before_broadcast() {
        let submitter = KiloexSubmitter::new(&exchange_config()).unwrap();
        let mut request = request();
        request.config = Arc::new(ExchangeConfig {
            rpc_url: "not a url".into(),
            ..exchange_config()
        });

        let err = submitter
            .open_market_increase_position(&request)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn encodes_call_arguments() {
        let args = IncreaseMarketArgs::encode(&request()).unwrap();
        let wad = U256::from(10u128.pow(18));
        assert_eq!(args.product_id, U256::from(1u8));
        assert_eq!(args.margin, U256::from(100u8) * wad);
        assert_eq!(args.leverage, U256::from(5u8) * wad);
        assert_eq!(args.acceptable_price, U256::from(60_300u32) * wad);
        assert_eq!(args.execution_fee, U256::from(7_000_000_000_000u64));
        assert_eq!(args.referral_code, FixedBytes::<32>::ZERO);
        assert!(args.is_long);
    }
}
