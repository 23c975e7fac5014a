// ============================================================================
// Conversion Matrix
// Read/write coercion rules between the six numeric representations
// ============================================================================
//
// Every representation implements `Numeric`, which carries two families of
// conversions:
// - to_*   (read direction): native value -> requested representation
// - from_* (write direction): requested representation -> native value
//
// The two directions differ on purpose. Reads truncate fractional parts,
// writes round half away from zero. Both clamp when narrowing into a fixed
// width. `write_into` / `read_from` double-dispatch between any pair so a
// currency only ever has to know its own native type.
//
// Adding a foreign delta to a fixed-width native goes through `add_from`,
// which sums in `i128` and clamps once. Clamping the delta first would let
// `i32::MAX + clamp(i64::MIN)` land on -1 instead of saturating.

use super::clamp::{
    clamp_to_i32, clamp_wide_to_i32, clamp_wide_to_i64, downsample_to_i32, downsample_to_i64,
    downsample_to_wide, order_bounds, round_to_wide, truncate_to_wide,
};
use super::Precision;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

/// A numeric representation a balance can be read or written in.
pub trait Numeric: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The precision tag of this representation when used natively.
    const PRECISION: Precision;

    /// The representation's zero, returned on resolution misses.
    fn zero_value() -> Self;

    /// Native add semantics: saturating for fixed-width integers, IEEE for
    /// floats, exact for arbitrary precision.
    fn combine(&self, delta: &Self) -> Self;

    /// Value under the integer write rules, saturated to `i128` instead of
    /// the native width.
    fn to_wide(&self) -> i128;

    /// Add a delta held in any representation.
    ///
    /// The default converts the delta with the write rules and then uses
    /// `combine`. Fixed-width integers override it to clamp the exact sum.
    fn add_from<R: Numeric>(&self, delta: &R) -> Self {
        self.combine(&delta.write_into())
    }

    // ------------------------------------------------------------------------
    // Read direction
    // ------------------------------------------------------------------------

    fn to_int(&self) -> i32;
    fn to_long(&self) -> i64;
    fn to_float(&self) -> f32;
    fn to_double(&self) -> f64;
    fn to_big_int(&self) -> BigInt;
    fn to_big_decimal(&self) -> BigDecimal;

    // ------------------------------------------------------------------------
    // Write direction
    // ------------------------------------------------------------------------

    fn from_int(value: i32) -> Self;
    fn from_long(value: i64) -> Self;
    fn from_float(value: f32) -> Self;
    fn from_double(value: f64) -> Self;
    fn from_big_int(value: &BigInt) -> Self;
    fn from_big_decimal(value: &BigDecimal) -> Self;

    // ------------------------------------------------------------------------
    // Double dispatch
    // ------------------------------------------------------------------------

    /// Convert `self` into native representation `N` using the write rules.
    fn write_into<N: Numeric>(&self) -> N;

    /// Convert a native `N` into this representation using the read rules.
    fn read_from<N: Numeric>(native: &N) -> Self;
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Decimal value of an `f64` taken from its shortest round-trip string.
///
/// NaN maps to zero and the infinities to the signed largest finite double.
pub fn decimal_from_f64(value: f64) -> BigDecimal {
    let finite = if value.is_nan() {
        0.0
    } else if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    };
    BigDecimal::from_str(&finite.to_string()).unwrap_or_else(|_| BigDecimal::zero())
}

/// Decimal value of an `f32` taken from its shortest round-trip string.
///
/// NaN maps to zero and the infinities to the signed largest finite float.
pub fn decimal_from_f32(value: f32) -> BigDecimal {
    let finite = if value.is_nan() {
        0.0
    } else if value.is_infinite() {
        f32::MAX.copysign(value)
    } else {
        value
    };
    BigDecimal::from_str(&finite.to_string()).unwrap_or_else(|_| BigDecimal::zero())
}

/// Integer part of a decimal, truncated toward zero.
pub fn truncate_to_integer(value: &BigDecimal) -> BigInt {
    match order_bounds(value) {
        Some((_, hi)) if hi > 0 => value.with_scale(0).into_bigint_and_exponent().0,
        _ => BigInt::zero(),
    }
}

fn signed_infinity(negative: bool) -> f64 {
    if negative {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

fn big_int_to_f64(value: &BigInt) -> f64 {
    value
        .to_f64()
        .unwrap_or_else(|| signed_infinity(value.is_negative()))
}

fn big_int_to_f32(value: &BigInt) -> f32 {
    value
        .to_f32()
        .unwrap_or_else(|| signed_infinity(value.is_negative()) as f32)
}

fn signed_zero(negative: bool) -> f64 {
    if negative {
        -0.0
    } else {
        0.0
    }
}

// orders past the finite range overflow, orders below half the smallest
// subnormal underflow
fn decimal_to_f64(value: &BigDecimal) -> f64 {
    let negative = value.is_negative();
    match order_bounds(value) {
        None => 0.0,
        Some((lo, _)) if lo >= 309 => signed_infinity(negative),
        Some((_, hi)) if hi <= -324 => signed_zero(negative),
        Some(_) => value
            .to_f64()
            .unwrap_or_else(|| signed_infinity(negative)),
    }
}

fn decimal_to_f32(value: &BigDecimal) -> f32 {
    let negative = value.is_negative();
    match order_bounds(value) {
        None => 0.0,
        Some((lo, _)) if lo >= 39 => signed_infinity(negative) as f32,
        Some((_, hi)) if hi <= -46 => signed_zero(negative) as f32,
        Some(_) => value
            .to_f32()
            .unwrap_or_else(|| signed_infinity(negative) as f32),
    }
}

fn decimal_from_integer(value: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), 0)
}

// ============================================================================
// Int (i32)
// ============================================================================

impl Numeric for i32 {
    const PRECISION: Precision = Precision::Int;

    fn zero_value() -> Self {
        0
    }

    fn combine(&self, delta: &Self) -> Self {
        self.saturating_add(*delta)
    }

    fn to_wide(&self) -> i128 {
        i128::from(*self)
    }

    fn add_from<R: Numeric>(&self, delta: &R) -> Self {
        clamp_wide_to_i32(i128::from(*self).saturating_add(delta.to_wide()))
    }

    fn to_int(&self) -> i32 {
        *self
    }

    fn to_long(&self) -> i64 {
        i64::from(*self)
    }

    fn to_float(&self) -> f32 {
        *self as f32
    }

    fn to_double(&self) -> f64 {
        f64::from(*self)
    }

    fn to_big_int(&self) -> BigInt {
        BigInt::from(*self)
    }

    fn to_big_decimal(&self) -> BigDecimal {
        decimal_from_integer(i64::from(*self))
    }

    fn from_int(value: i32) -> Self {
        value
    }

    fn from_long(value: i64) -> Self {
        clamp_to_i32(value)
    }

    fn from_float(value: f32) -> Self {
        // `as` saturates and maps NaN to zero
        value.round() as i32
    }

    fn from_double(value: f64) -> Self {
        value.round() as i32
    }

    fn from_big_int(value: &BigInt) -> Self {
        downsample_to_i32(value)
    }

    fn from_big_decimal(value: &BigDecimal) -> Self {
        clamp_wide_to_i32(round_to_wide(value))
    }

    fn write_into<N: Numeric>(&self) -> N {
        N::from_int(*self)
    }

    fn read_from<N: Numeric>(native: &N) -> Self {
        native.to_int()
    }
}

// ============================================================================
// Long (i64)
// ============================================================================

impl Numeric for i64 {
    const PRECISION: Precision = Precision::Long;

    fn zero_value() -> Self {
        0
    }

    fn combine(&self, delta: &Self) -> Self {
        self.saturating_add(*delta)
    }

    fn to_wide(&self) -> i128 {
        i128::from(*self)
    }

    fn add_from<R: Numeric>(&self, delta: &R) -> Self {
        clamp_wide_to_i64(i128::from(*self).saturating_add(delta.to_wide()))
    }

    fn to_int(&self) -> i32 {
        clamp_to_i32(*self)
    }

    fn to_long(&self) -> i64 {
        *self
    }

    fn to_float(&self) -> f32 {
        *self as f32
    }

    fn to_double(&self) -> f64 {
        *self as f64
    }

    fn to_big_int(&self) -> BigInt {
        BigInt::from(*self)
    }

    fn to_big_decimal(&self) -> BigDecimal {
        decimal_from_integer(*self)
    }

    fn from_int(value: i32) -> Self {
        i64::from(value)
    }

    fn from_long(value: i64) -> Self {
        value
    }

    fn from_float(value: f32) -> Self {
        value.round() as i64
    }

    fn from_double(value: f64) -> Self {
        value.round() as i64
    }

    fn from_big_int(value: &BigInt) -> Self {
        downsample_to_i64(value)
    }

    fn from_big_decimal(value: &BigDecimal) -> Self {
        clamp_wide_to_i64(round_to_wide(value))
    }

    fn write_into<N: Numeric>(&self) -> N {
        N::from_long(*self)
    }

    fn read_from<N: Numeric>(native: &N) -> Self {
        native.to_long()
    }
}

// ============================================================================
// Float (f32)
// ============================================================================

impl Numeric for f32 {
    const PRECISION: Precision = Precision::Float;

    fn zero_value() -> Self {
        0.0
    }

    fn combine(&self, delta: &Self) -> Self {
        self + delta
    }

    fn to_wide(&self) -> i128 {
        self.round() as i128
    }

    fn to_int(&self) -> i32 {
        // truncates toward zero
        *self as i32
    }

    fn to_long(&self) -> i64 {
        *self as i64
    }

    fn to_float(&self) -> f32 {
        *self
    }

    fn to_double(&self) -> f64 {
        f64::from(*self)
    }

    fn to_big_int(&self) -> BigInt {
        truncate_to_integer(&decimal_from_f32(*self))
    }

    fn to_big_decimal(&self) -> BigDecimal {
        decimal_from_f32(*self)
    }

    fn from_int(value: i32) -> Self {
        value as f32
    }

    fn from_long(value: i64) -> Self {
        value as f32
    }

    fn from_float(value: f32) -> Self {
        value
    }

    fn from_double(value: f64) -> Self {
        value as f32
    }

    fn from_big_int(value: &BigInt) -> Self {
        big_int_to_f32(value)
    }

    fn from_big_decimal(value: &BigDecimal) -> Self {
        decimal_to_f64(value) as f32
    }

    fn write_into<N: Numeric>(&self) -> N {
        N::from_float(*self)
    }

    fn read_from<N: Numeric>(native: &N) -> Self {
        native.to_float()
    }
}

// ============================================================================
// Double (f64)
// ============================================================================

impl Numeric for f64 {
    const PRECISION: Precision = Precision::Double;

    fn zero_value() -> Self {
        0.0
    }

    fn combine(&self, delta: &Self) -> Self {
        self + delta
    }

    fn to_wide(&self) -> i128 {
        self.round() as i128
    }

    fn to_int(&self) -> i32 {
        *self as i32
    }

    fn to_long(&self) -> i64 {
        *self as i64
    }

    fn to_float(&self) -> f32 {
        *self as f32
    }

    fn to_double(&self) -> f64 {
        *self
    }

    fn to_big_int(&self) -> BigInt {
        truncate_to_integer(&decimal_from_f64(*self))
    }

    fn to_big_decimal(&self) -> BigDecimal {
        decimal_from_f64(*self)
    }

    fn from_int(value: i32) -> Self {
        f64::from(value)
    }

    fn from_long(value: i64) -> Self {
        value as f64
    }

    fn from_float(value: f32) -> Self {
        f64::from(value)
    }

    fn from_double(value: f64) -> Self {
        value
    }

    fn from_big_int(value: &BigInt) -> Self {
        big_int_to_f64(value)
    }

    fn from_big_decimal(value: &BigDecimal) -> Self {
        decimal_to_f64(value)
    }

    fn write_into<N: Numeric>(&self) -> N {
        N::from_double(*self)
    }

    fn read_from<N: Numeric>(native: &N) -> Self {
        native.to_double()
    }
}

// ============================================================================
// BigInt
// ============================================================================

impl Numeric for BigInt {
    const PRECISION: Precision = Precision::BigInt;

    fn zero_value() -> Self {
        <BigInt as Zero>::zero()
    }

    fn combine(&self, delta: &Self) -> Self {
        self + delta
    }

    fn to_wide(&self) -> i128 {
        downsample_to_wide(self)
    }

    fn to_int(&self) -> i32 {
        downsample_to_i32(self)
    }

    fn to_long(&self) -> i64 {
        downsample_to_i64(self)
    }

    fn to_float(&self) -> f32 {
        big_int_to_f32(self)
    }

    fn to_double(&self) -> f64 {
        big_int_to_f64(self)
    }

    fn to_big_int(&self) -> BigInt {
        self.clone()
    }

    fn to_big_decimal(&self) -> BigDecimal {
        BigDecimal::new(self.clone(), 0)
    }

    fn from_int(value: i32) -> Self {
        BigInt::from(value)
    }

    fn from_long(value: i64) -> Self {
        BigInt::from(value)
    }

    fn from_float(value: f32) -> Self {
        truncate_to_integer(&decimal_from_f32(value))
    }

    fn from_double(value: f64) -> Self {
        truncate_to_integer(&decimal_from_f64(value))
    }

    fn from_big_int(value: &BigInt) -> Self {
        value.clone()
    }

    fn from_big_decimal(value: &BigDecimal) -> Self {
        truncate_to_integer(value)
    }

    fn write_into<N: Numeric>(&self) -> N {
        N::from_big_int(self)
    }

    fn read_from<N: Numeric>(native: &N) -> Self {
        native.to_big_int()
    }
}

// ============================================================================
// BigDecimal
// ============================================================================

impl Numeric for BigDecimal {
    const PRECISION: Precision = Precision::BigDecimal;

    fn zero_value() -> Self {
        <BigDecimal as Zero>::zero()
    }

    fn combine(&self, delta: &Self) -> Self {
        self + delta
    }

    fn to_wide(&self) -> i128 {
        round_to_wide(self)
    }

    fn to_int(&self) -> i32 {
        clamp_wide_to_i32(truncate_to_wide(self))
    }

    fn to_long(&self) -> i64 {
        clamp_wide_to_i64(truncate_to_wide(self))
    }

    fn to_float(&self) -> f32 {
        decimal_to_f32(self)
    }

    fn to_double(&self) -> f64 {
        decimal_to_f64(self)
    }

    fn to_big_int(&self) -> BigInt {
        truncate_to_integer(self)
    }

    fn to_big_decimal(&self) -> BigDecimal {
        self.clone()
    }

    fn from_int(value: i32) -> Self {
        decimal_from_integer(i64::from(value))
    }

    fn from_long(value: i64) -> Self {
        decimal_from_integer(value)
    }

    fn from_float(value: f32) -> Self {
        decimal_from_f32(value)
    }

    fn from_double(value: f64) -> Self {
        decimal_from_f64(value)
    }

    fn from_big_int(value: &BigInt) -> Self {
        BigDecimal::new(value.clone(), 0)
    }

    fn from_big_decimal(value: &BigDecimal) -> Self {
        value.clone()
    }

    fn write_into<N: Numeric>(&self) -> N {
        N::from_big_decimal(self)
    }

    fn read_from<N: Numeric>(native: &N) -> Self {
        native.to_big_decimal()
    }
}
