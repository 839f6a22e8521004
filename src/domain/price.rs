//! Slippage-bounded acceptable prices.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::trade::Side;
use crate::error::ConfigError;

/// Default tolerated deviation from the reference price (0.5%).
pub const DEFAULT_SLIPPAGE: Decimal = dec!(0.005);

/// Maximum tolerated fractional deviation between the reference quote and
/// the execution price. Always in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slippage(Decimal);

impl Slippage {
    /// Create a slippage bound from a fraction (0.005 = 0.5%).
    ///
    /// # Errors
    ///
    /// Returns an error if the fraction is negative or not below 1.
    pub fn new(fraction: Decimal) -> Result<Self, ConfigError> {
        if fraction < Decimal::ZERO || fraction >= Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "slippage",
                reason: "must be >= 0 and < 1".to_string(),
            });
        }
        Ok(Self(fraction))
    }

    #[must_use]
    pub const fn fraction(self) -> Decimal {
        self.0
    }

    /// Worst price the order may fill at.
    ///
    /// Longs accept up to `quote * (1 + s)`, shorts down to `quote * (1 - s)`.
    /// Returns `None` when the bound does not fit in a [`Decimal`].
    #[must_use]
    pub fn acceptable_price(self, quote: Decimal, side: Side) -> Option<Decimal> {
        let factor = if side.is_long() {
            Decimal::ONE + self.0
        } else {
            Decimal::ONE - self.0
        };
        quote.checked_mul(factor)
    }
}

impl Default for Slippage {
    fn default() -> Self {
        Self(DEFAULT_SLIPPAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bound_is_above_quote() {
        let slippage = Slippage::default();
        assert_eq!(
            slippage.acceptable_price(dec!(60000), Side::Buy),
            Some(dec!(60300))
        );
    }

    #[test]
    fn short_bound_is_below_quote() {
        let slippage = Slippage::default();
        assert_eq!(
            slippage.acceptable_price(dec!(3000), Side::Sell),
            Some(dec!(2985))
        );
    }

    #[test]
    fn both_sides_differ_by_quote_times_fraction() {
        let slippage = Slippage::new(dec!(0.013)).unwrap();
        for quote in [dec!(0.0001), dec!(1), dec!(1234.5678), dec!(99999999)] {
            let long = slippage.acceptable_price(quote, Side::Buy).unwrap();
            let short = slippage.acceptable_price(quote, Side::Sell).unwrap();
            assert!(long > quote);
            assert!(short < quote);
            assert_eq!(long - quote, quote * dec!(0.013));
            assert_eq!(quote - short, quote * dec!(0.013));
        }
    }

    #[test]
    fn zero_slippage_returns_quote() {
        let slippage = Slippage::new(Decimal::ZERO).unwrap();
        assert_eq!(
            slippage.acceptable_price(dec!(42.5), Side::Buy),
            Some(dec!(42.5))
        );
        assert_eq!(
            slippage.acceptable_price(dec!(42.5), Side::Sell),
            Some(dec!(42.5))
        );
    }

    #[test]
    fn long_bound_past_decimal_range_is_none() {
        let slippage = Slippage::default();
        assert_eq!(slippage.acceptable_price(Decimal::MAX, Side::Buy), None);
        assert!(slippage
            .acceptable_price(Decimal::MAX, Side::Sell)
            .is_some_and(|p| p < Decimal::MAX));
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        assert!(Slippage::new(dec!(-0.001)).is_err());
        assert!(Slippage::new(Decimal::ONE).is_err());
        assert!(Slippage::new(dec!(0.999)).is_ok());
    }
}
