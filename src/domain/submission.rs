//! Submission requests handed to the chain submitter.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::exchange::ExchangeConfig;
use super::product::ProductId;

/// Fixed-length referral field of the market-increase call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferralCode([u8; 32]);

impl ReferralCode {
    /// All-zero code meaning "no referral".
    pub const NONE: Self = Self([0u8; 32]);

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl Default for ReferralCode {
    fn default() -> Self {
        Self::NONE
    }
}

/// Everything the chain submitter needs to open one market position.
///
/// Built fresh for every trade.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub config: Arc<ExchangeConfig>,
    pub product_id: ProductId,
    pub margin: Decimal,
    pub leverage: Decimal,
    pub is_long: bool,
    pub acceptable_price: Decimal,
    pub referral_code: ReferralCode,
}

/// Raw transaction hash bytes returned by the chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(Vec<u8>);

impl TxHash {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex without a `0x` prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<Vec<u8>> for TxHash {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 32]> for TxHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_referral_is_32_zero_bytes() {
        let code = ReferralCode::default();
        assert!(code.is_none());
        assert_eq!(code.as_bytes().len(), 32);
        assert!(code.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn tx_hash_renders_lowercase_hex_without_prefix() {
        let hash = TxHash::from(vec![0xAB, 0x01, 0xff, 0x00]);
        assert_eq!(hash.to_hex(), "ab01ff00");
        assert_eq!(hash.to_string(), "ab01ff00");
    }

    #[test]
    fn full_width_hash_is_64_chars() {
        let hash = TxHash::from([0x5au8; 32]);
        assert_eq!(hash.to_hex().len(), 64);
        assert!(!hash.to_hex().starts_with("0x"));
    }
}
