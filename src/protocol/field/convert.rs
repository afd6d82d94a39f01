//! Range-checked conversions shared by the field variants.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};

pub(crate) fn to_i16(value: i64) -> Result<i16> {
    i16::try_from(value).map_err(|_| Error::overflow(value, "i16"))
}

pub(crate) fn to_i32(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::overflow(value, "i32"))
}

/// Truncate a float toward zero; NaN and out-of-range values overflow.
pub(crate) fn f64_to_i64(value: f64, target: &'static str) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if value.is_nan() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(Error::overflow(value, target));
    }
    Ok(value.trunc() as i64)
}

/// Narrow a double to a float; finite values beyond the float range overflow.
pub(crate) fn f64_to_f32(value: f64) -> Result<f32> {
    if value.is_finite() && value.abs() > f32::MAX as f64 {
        return Err(Error::overflow(value, "f32"));
    }
    Ok(value as f32)
}

/// Truncate the fraction of a decimal; out-of-range values overflow.
pub(crate) fn decimal_to_i64(value: Decimal, target: &'static str) -> Result<i64> {
    value
        .trunc()
        .to_i64()
        .ok_or_else(|| Error::overflow(value, target))
}

pub(crate) fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Exact decimal value of a float's shortest rendering.
pub(crate) fn f64_to_decimal(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::overflow(value, "Decimal"));
    }
    Decimal::from_str(&value.to_string()).map_err(|_| Error::overflow(value, "Decimal"))
}

/// Raw integer holding `value` at `scale` (`value = raw * 10^scale`).
///
/// Excess fraction digits round half away from zero, for negative values
/// too: `-5.125` at scale `-2` is `-513`.
pub(crate) fn decimal_to_scaled(value: Decimal, scale: i32, target: &'static str) -> Result<i64> {
    let overflow = || Error::overflow(value, target);
    let raw: i128 = if scale <= 0 {
        let dp = scale.unsigned_abs();
        let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        let factor = 10i128
            .checked_pow(dp - rounded.scale())
            .ok_or_else(overflow)?;
        rounded.mantissa().checked_mul(factor).ok_or_else(overflow)?
    } else {
        let divisor = 10i64
            .checked_pow(scale as u32)
            .map(Decimal::from)
            .ok_or_else(overflow)?;
        let shifted = value.checked_div(divisor).ok_or_else(overflow)?;
        shifted
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i128()
            .ok_or_else(overflow)?
    };
    i64::try_from(raw).map_err(|_| overflow())
}

/// Decimal value of `raw * 10^scale`.
pub(crate) fn scaled_to_decimal(raw: i64, scale: i32) -> Result<Decimal> {
    if scale <= 0 {
        Decimal::try_from_i128_with_scale(raw as i128, scale.unsigned_abs())
            .map_err(|_| Error::malformed(format!("scale {} is not supported", scale)))
    } else {
        10i64
            .checked_pow(scale as u32)
            .and_then(|factor| Decimal::from(raw).checked_mul(Decimal::from(factor)))
            .ok_or_else(|| Error::overflow(raw, "Decimal"))
    }
}

/// Parse text as an integer for a column of type `to`.
pub(crate) fn parse_i64(text: &str, to: &str) -> Result<i64> {
    text.trim()
        .parse()
        .map_err(|_| Error::type_conversion_with("String", to, format!("'{}' is not an integer", text)))
}

pub(crate) fn parse_f64(text: &str, to: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| Error::type_conversion_with("String", to, format!("'{}' is not a number", text)))
}

pub(crate) fn parse_decimal(text: &str, to: &str) -> Result<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| Error::type_conversion_with("String", to, format!("'{}' is not a decimal", text)))
}

/// Recognise the boolean spellings `true`/`t`/`y`/`1` and `false`/`f`/`n`/`0`.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "y" | "1" => Some(true),
        "false" | "f" | "n" | "0" => Some(false),
        _ => None,
    }
}
