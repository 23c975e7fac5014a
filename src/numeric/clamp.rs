// ============================================================================
// Clamping and Downsampling
// Narrow arbitrary-precision values into fixed widths
// ============================================================================
//
// Two families live here:
// - saturating (downsample_*, clamp_*, *_to_wide): pin to the target width's
//   bounds, never fail
// - exact_*: refuse values that do not fit, raising CurrencyError::Inexact
//
// The conversion matrix only ever uses the saturating family. The exact
// family backs the checked getters on the currency contract.
//
// Decimals are bracketed by order of magnitude before any rescaling. A value
// like 1e20000000 is recognised as out of range from its exponent alone and
// never expanded into a full integer.

use super::errors::{CurrencyError, CurrencyResult};
use super::Precision;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// Smallest decimal order at which a value no longer fits in an `i128`.
const WIDE_ORDER: i64 = 39;

/// Narrow a big integer into an `i32`, saturating on overflow.
#[inline]
pub fn downsample_to_i32(value: &BigInt) -> i32 {
    value.to_i32().unwrap_or(if value.is_negative() {
        i32::MIN
    } else {
        i32::MAX
    })
}

/// Narrow a big integer into an `i64`, saturating on overflow.
#[inline]
pub fn downsample_to_i64(value: &BigInt) -> i64 {
    value.to_i64().unwrap_or(if value.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Narrow a big integer into an `i128`, saturating on overflow.
#[inline]
pub fn downsample_to_wide(value: &BigInt) -> i128 {
    value.to_i128().unwrap_or(if value.is_negative() {
        i128::MIN
    } else {
        i128::MAX
    })
}

/// Narrow an `i64` into an `i32`, saturating on overflow.
#[inline]
pub const fn clamp_to_i32(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

/// Narrow an `i128` into an `i32`, saturating on overflow.
#[inline]
pub const fn clamp_wide_to_i32(value: i128) -> i32 {
    if value > i32::MAX as i128 {
        i32::MAX
    } else if value < i32::MIN as i128 {
        i32::MIN
    } else {
        value as i32
    }
}

/// Narrow an `i128` into an `i64`, saturating on overflow.
#[inline]
pub const fn clamp_wide_to_i64(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

// ============================================================================
// Decimal Magnitude
// ============================================================================

/// Decimal orders `(lo, hi)` with `10^lo <= |value| < 10^hi`, or `None` for
/// zero.
///
/// Derived from the exponent and the bit length of the unscaled integer, so
/// the cost does not depend on how large the exponent is.
pub fn order_bounds(value: &BigDecimal) -> Option<(i64, i64)> {
    let (unscaled, scale) = value.as_bigint_and_exponent();
    if unscaled.is_zero() {
        return None;
    }
    // decimal digits never exceed the bit count
    let bits = i64::try_from(unscaled.bits()).unwrap_or(i64::MAX);
    Some((scale.saturating_neg(), bits.saturating_sub(scale)))
}

fn saturating_wide(value: &BigDecimal, mode: RoundingMode) -> i128 {
    match order_bounds(value) {
        None => 0,
        Some((lo, _)) if lo >= WIDE_ORDER => {
            if value.is_negative() {
                i128::MIN
            } else {
                i128::MAX
            }
        },
        // below 0.1 in magnitude
        Some((_, hi)) if hi <= -1 => 0,
        Some(_) => downsample_to_wide(&value.with_scale_round(0, mode).into_bigint_and_exponent().0),
    }
}

/// Integer part of a decimal as an `i128`, truncated toward zero and saturated.
pub fn truncate_to_wide(value: &BigDecimal) -> i128 {
    saturating_wide(value, RoundingMode::Down)
}

/// Nearest `i128` to a decimal, ties away from zero, saturated.
pub fn round_to_wide(value: &BigDecimal) -> i128 {
    saturating_wide(value, RoundingMode::HalfUp)
}

// ============================================================================
// Exact Narrowing
// ============================================================================

fn inexact(value: &BigDecimal, target: Precision) -> CurrencyError {
    CurrencyError::Inexact {
        value: value.to_string(),
        target,
    }
}

fn exact_wide(value: &BigDecimal, target: Precision) -> CurrencyResult<i128> {
    match order_bounds(value) {
        None => Ok(0),
        Some((lo, _)) if lo >= WIDE_ORDER => Err(inexact(value, target)),
        // nonzero and below one: necessarily fractional
        Some((_, hi)) if hi <= 0 => Err(inexact(value, target)),
        Some(_) => {
            let truncated = value.with_scale(0);
            if &truncated != value {
                return Err(inexact(value, target));
            }
            truncated
                .into_bigint_and_exponent()
                .0
                .to_i128()
                .ok_or_else(|| inexact(value, target))
        },
    }
}

/// Narrow a decimal into an `i32`.
///
/// # Errors
/// Returns `Inexact` if the value has a fractional part or is outside the
/// `i32` range.
pub fn exact_i32(value: &BigDecimal) -> CurrencyResult<i32> {
    let wide = exact_wide(value, Precision::Int)?;
    i32::try_from(wide).map_err(|_| inexact(value, Precision::Int))
}

/// Narrow a decimal into an `i64`.
///
/// # Errors
/// Returns `Inexact` if the value has a fractional part or is outside the
/// `i64` range.
pub fn exact_i64(value: &BigDecimal) -> CurrencyResult<i64> {
    let wide = exact_wide(value, Precision::Long)?;
    i64::try_from(wide).map_err(|_| inexact(value, Precision::Long))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::time::{Duration, Instant};

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_downsample_in_range() {
        assert_eq!(downsample_to_i32(&BigInt::from(25_000)), 25_000);
        assert_eq!(downsample_to_i32(&BigInt::from(-7)), -7);
        assert_eq!(downsample_to_i64(&BigInt::from(i64::MIN)), i64::MIN);
        assert_eq!(downsample_to_wide(&BigInt::from(i64::MIN)), i64::MIN as i128);
    }

    #[test]
    fn test_downsample_saturates() {
        let huge: BigInt = BigInt::from(i64::MAX) * 1000;
        assert_eq!(downsample_to_i32(&huge), i32::MAX);
        assert_eq!(downsample_to_i64(&huge), i64::MAX);
        assert_eq!(downsample_to_i32(&-huge.clone()), i32::MIN);
        assert_eq!(downsample_to_i64(&-huge), i64::MIN);

        // exactly one past the boundary
        assert_eq!(downsample_to_i32(&(BigInt::from(i32::MAX) + 1)), i32::MAX);
        assert_eq!(downsample_to_i32(&(BigInt::from(i32::MIN) - 1)), i32::MIN);

        let beyond: BigInt = BigInt::from(10).pow(50);
        assert_eq!(downsample_to_wide(&beyond), i128::MAX);
        assert_eq!(downsample_to_wide(&-beyond), i128::MIN);
    }

    #[test]
    fn test_clamp_to_i32() {
        assert_eq!(clamp_to_i32(i64::MAX), i32::MAX);
        assert_eq!(clamp_to_i32(i64::MIN), i32::MIN);
        assert_eq!(clamp_to_i32(-42), -42);
    }

    #[test]
    fn test_clamp_wide() {
        assert_eq!(clamp_wide_to_i32(i128::from(i32::MAX) + 1), i32::MAX);
        assert_eq!(clamp_wide_to_i32(i128::from(i64::MIN)), i32::MIN);
        assert_eq!(clamp_wide_to_i64(i128::MAX), i64::MAX);
        assert_eq!(clamp_wide_to_i64(i128::from(i64::MAX) + i128::from(i64::MIN)), -1);
    }

    #[test]
    fn test_order_bounds() {
        assert_eq!(order_bounds(&dec("0")), None);
        assert_eq!(order_bounds(&dec("0.000")), None);

        for s in ["1", "9", "12.5", "-0.03", "1e30", "7e-12", "123456789"] {
            let value = dec(s);
            let (lo, hi) = order_bounds(&value).unwrap();
            let magnitude = value.abs();
            assert!(BigDecimal::new(BigInt::from(1), -lo) <= magnitude, "{}", s);
            assert!(magnitude < BigDecimal::new(BigInt::from(1), -hi), "{}", s);
        }
    }

    #[test]
    fn test_wide_rounding() {
        assert_eq!(truncate_to_wide(&dec("99.99")), 99);
        assert_eq!(truncate_to_wide(&dec("-99.99")), -99);
        assert_eq!(round_to_wide(&dec("2.5")), 3);
        assert_eq!(round_to_wide(&dec("-2.5")), -3);
        assert_eq!(round_to_wide(&dec("0.05")), 0);
        assert_eq!(round_to_wide(&dec("0.5")), 1);
        assert_eq!(truncate_to_wide(&dec("1e38")), 10i128.pow(38));
        assert_eq!(truncate_to_wide(&dec("1e39")), i128::MAX);
        assert_eq!(round_to_wide(&dec("-1e39")), i128::MIN);
    }

    #[test]
    fn test_extreme_exponents_short_circuit() {
        let start = Instant::now();

        assert_eq!(round_to_wide(&dec("1e20000000")), i128::MAX);
        assert_eq!(truncate_to_wide(&dec("-1e20000000")), i128::MIN);
        assert_eq!(round_to_wide(&dec("1e-20000000")), 0);
        assert_eq!(truncate_to_wide(&BigDecimal::new(BigInt::from(5), i64::MIN + 1)), i128::MAX);
        assert_eq!(truncate_to_wide(&BigDecimal::new(BigInt::from(5), i64::MAX)), 0);
        assert!(exact_i64(&dec("1e20000000")).is_err());
        assert!(exact_i32(&dec("1e-20000000")).is_err());

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_exact_narrowing() {
        assert_eq!(exact_i32(&dec("12")), Ok(12));
        assert_eq!(exact_i32(&dec("42.000")), Ok(42));
        assert_eq!(exact_i32(&dec("0")), Ok(0));
        assert_eq!(exact_i64(&dec("9223372036854775807")), Ok(i64::MAX));
        assert_eq!(exact_i64(&dec("-17")), Ok(-17));
        assert_eq!(exact_i64(&dec("1e12")), Ok(1_000_000_000_000));

        assert_eq!(
            exact_i32(&dec("2147483648")),
            Err(CurrencyError::Inexact {
                value: "2147483648".to_string(),
                target: Precision::Int,
            })
        );
        assert!(exact_i64(&dec("-9223372036854775809")).is_err());
        assert!(matches!(
            exact_i32(&dec("2.5")),
            Err(CurrencyError::Inexact { target: Precision::Int, .. })
        ));
        assert!(exact_i64(&dec("0.5")).is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_downsample_matches_i64_clamp(value in any::<i64>()) {
            let big = BigInt::from(value);
            prop_assert_eq!(downsample_to_i32(&big), clamp_to_i32(value));
            prop_assert_eq!(downsample_to_i64(&big), value);
        }

        #[test]
        fn prop_exact_when_in_range(value in any::<i32>()) {
            let decimal = BigDecimal::from(value);
            prop_assert_eq!(exact_i32(&decimal), Ok(value));
            prop_assert_eq!(truncate_to_wide(&decimal), i128::from(value));
        }

        /// the magnitude shortcut agrees with plain rescaling
        #[test]
        fn prop_wide_rounding_matches_rescale(unscaled in any::<i64>(), scale in -30i64..30) {
            let decimal = BigDecimal::new(BigInt::from(unscaled), scale);
            let truncated = decimal.with_scale(0).into_bigint_and_exponent().0;
            let rounded = decimal
                .with_scale_round(0, RoundingMode::HalfUp)
                .into_bigint_and_exponent()
                .0;
            prop_assert_eq!(truncate_to_wide(&decimal), downsample_to_wide(&truncated));
            prop_assert_eq!(round_to_wide(&decimal), downsample_to_wide(&rounded));
        }
    }
}
