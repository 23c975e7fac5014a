// ============================================================================
// Numeric Module
// Precision tags, clamping and the cross-representation conversion matrix
// ============================================================================
//
// This module provides:
// - Precision: tag naming the six native numeric shapes
// - Numeric: read/write conversion rules implemented per representation
// - clamp: saturating and exact narrowing of arbitrary-precision values
// - CurrencyError: error taxonomy shared across the crate
//
// Design principles:
// - Conversions are pure functions, no synchronization
// - Narrowing clamps; only the explicit exact_* helpers can fail
// - Every derived operation composes through the native type

pub mod clamp;
mod convert;
mod errors;
mod precision;

pub use convert::{decimal_from_f32, decimal_from_f64, truncate_to_integer, Numeric};
pub use errors::{CurrencyError, CurrencyResult};
pub use precision::Precision;

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
