// ============================================================================
// Precision Tag
// Identifies which of the six numeric shapes a currency stores natively
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The native numeric domain of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Precision {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit IEEE float
    Float,
    /// 64-bit IEEE float
    Double,
    /// Arbitrary-precision integer
    BigInt,
    /// Arbitrary-precision decimal
    BigDecimal,
}

impl Precision {
    pub const ALL: [Precision; 6] = [
        Precision::Int,
        Precision::Long,
        Precision::Float,
        Precision::Double,
        Precision::BigInt,
        Precision::BigDecimal,
    ];

    /// Whether balances of this precision can only hold whole numbers.
    pub fn is_integer(&self) -> bool {
        matches!(self, Precision::Int | Precision::Long | Precision::BigInt)
    }

    pub fn is_decimal(&self) -> bool {
        !self.is_integer()
    }

    /// Whether the precision has a fixed width (and therefore clamps).
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Precision::BigInt | Precision::BigDecimal)
    }

    /// Name of the built-in currency type bound to this precision.
    pub fn type_name(&self) -> &'static str {
        match self {
            Precision::Int => "IntCurrency",
            Precision::Long => "LongCurrency",
            Precision::Float => "FloatCurrency",
            Precision::Double => "DoubleCurrency",
            Precision::BigInt => "BigIntCurrency",
            Precision::BigDecimal => "BigDecimalCurrency",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precision::Int => "int",
            Precision::Long => "long",
            Precision::Float => "float",
            Precision::Double => "double",
            Precision::BigInt => "big_int",
            Precision::BigDecimal => "big_decimal",
        };
        f.write_str(name)
    }
}
