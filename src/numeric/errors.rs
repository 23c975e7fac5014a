// ============================================================================
// Currency Errors
// Error types shared by conversions, the registry and configuration
// ============================================================================

use super::Precision;
use thiserror::Error;

/// Errors surfaced by the currency core.
///
/// Resolution misses are deliberately absent: an unknown display name reads
/// and writes as the representation's zero instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// A currency was cast to a shape it does not have
    #[error("You cannot cast a {actual} to a {requested}")]
    TypeMismatch { actual: String, requested: String },

    /// An exact conversion was requested but the value does not fit
    #[error("value {value} cannot be represented exactly as {target}")]
    Inexact { value: String, target: Precision },

    /// Currency key is not of the form `namespace:value`
    #[error("invalid currency key: {0}")]
    InvalidKey(String),

    /// Configuration failed validation
    #[error("invalid currency configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurrencyError::TypeMismatch {
            actual: "IntCurrency".to_string(),
            requested: "BigDecimalCurrency".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "You cannot cast a IntCurrency to a BigDecimalCurrency"
        );

        let err = CurrencyError::Inexact {
            value: "2.5".to_string(),
            target: Precision::Long,
        };
        assert_eq!(
            err.to_string(),
            "value 2.5 cannot be represented exactly as long"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CurrencyError::InvalidKey("x".into()),
            CurrencyError::InvalidKey("x".into())
        );
        assert_ne!(
            CurrencyError::InvalidKey("x".into()),
            CurrencyError::InvalidConfig("x".into())
        );
    }
}
