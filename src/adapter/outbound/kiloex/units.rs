//! Decimal to on-chain fixed-point conversion.
//!
//! Conversion is exact: the decimal mantissa is rescaled in 256-bit integer
//! space, never through floating point. Digits beyond `decimals` are
//! truncated.

use alloy_primitives::U256;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Convert a non-negative decimal to an integer with `decimals` implied
/// fractional digits.
///
/// # Errors
///
/// Returns an error for negative values or on overflow.
pub fn to_units(value: Decimal, decimals: u32) -> Result<U256> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::Parse(format!("cannot encode negative amount {value}")));
    }

    let mantissa = U256::from(value.mantissa().unsigned_abs());
    let scale = value.scale();

    if decimals >= scale {
        pow10(decimals - scale)
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or_else(|| Error::Parse(format!("{value} overflows 256 bits at {decimals} decimals")))
    } else {
        let divisor = pow10(scale - decimals)
            .ok_or_else(|| Error::Parse(format!("scale {scale} out of range")))?;
        Ok(mantissa / divisor)
    }
}

fn pow10(exp: u32) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}
