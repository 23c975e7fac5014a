// ============================================================================
// Currency Configuration
// Declarative description of a currency: key, native precision and type name
// ============================================================================

use crate::numeric::{CurrencyError, CurrencyResult, Precision};

use super::CurrencyKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Complete Currency Configuration
// ============================================================================

/// Configuration for creating a currency
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyConfig {
    /// Namespaced key, e.g. "economy:gold"
    pub key: String,

    /// Native precision balances are stored in
    pub precision: Precision,

    /// Optional: type name reported in cast errors
    /// None means the built-in name of the precision ("IntCurrency", ...)
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_name: Option<String>,
}

impl CurrencyConfig {
    /// Create a new configuration with required parameters
    pub fn new(key: impl Into<String>, precision: Precision) -> Self {
        Self {
            key: key.into(),
            precision,
            type_name: None,
        }
    }

    /// Builder method: Set the reported type name
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Type name the currency will report.
    pub fn effective_type_name(&self) -> &str {
        self.type_name
            .as_deref()
            .unwrap_or_else(|| self.precision.type_name())
    }

    /// Validate the configuration and parse its key.
    ///
    /// # Errors
    /// - `InvalidKey` if the key is malformed
    /// - `InvalidConfig` if a type name override is blank
    pub fn validate(&self) -> CurrencyResult<CurrencyKey> {
        let key = self.key.parse::<CurrencyKey>()?;

        if let Some(name) = &self.type_name {
            if name.trim().is_empty() {
                return Err(CurrencyError::InvalidConfig(
                    "Type name cannot be blank".to_string(),
                ));
            }
        }

        Ok(key)
    }

    /// Load a configuration from JSON.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the document does not describe a currency.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> CurrencyResult<Self> {
        serde_json::from_str(json).map_err(|e| CurrencyError::InvalidConfig(e.to_string()))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CurrencyConfig {
    /// Whole-number coins fitting comfortably in 32 bits
    pub fn coins(key: impl Into<String>) -> Self {
        Self::new(key, Precision::Int)
    }

    /// Long-running point counters
    pub fn points(key: impl Into<String>) -> Self {
        Self::new(key, Precision::Long)
    }

    /// Fractional gold-style money with fast float arithmetic
    pub fn gold(key: impl Into<String>) -> Self {
        Self::new(key, Precision::Double)
    }

    /// Exact decimal credits without range limits
    pub fn credits(key: impl Into<String>) -> Self {
        Self::new(key, Precision::BigDecimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CurrencyConfig::new("economy:gold", Precision::Double);

        assert_eq!(config.key, "economy:gold");
        assert_eq!(config.precision, Precision::Double);
        assert_eq!(config.effective_type_name(), "DoubleCurrency");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CurrencyConfig::coins("economy:coins").with_type_name("VaultCoins");

        assert_eq!(config.precision, Precision::Int);
        assert_eq!(config.effective_type_name(), "VaultCoins");
    }

    #[test]
    fn test_validation() {
        let config = CurrencyConfig::new("Not A Key", Precision::Int);
        assert!(matches!(config.validate(), Err(CurrencyError::InvalidKey(_))));

        let config = CurrencyConfig::new("economy:coins", Precision::Int).with_type_name("  ");
        assert!(matches!(
            config.validate(),
            Err(CurrencyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(CurrencyConfig::points("a:b").precision, Precision::Long);
        assert_eq!(CurrencyConfig::gold("a:b").precision, Precision::Double);
        assert_eq!(
            CurrencyConfig::credits("a:b").precision,
            Precision::BigDecimal
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config =
            CurrencyConfig::from_json(r#"{"key": "economy:gems", "precision": "big_int"}"#)
                .unwrap();
        assert_eq!(config.precision, Precision::BigInt);
        assert_eq!(config.type_name, None);

        assert!(matches!(
            CurrencyConfig::from_json(r#"{"key": "economy:gems"}"#),
            Err(CurrencyError::InvalidConfig(_))
        ));
    }
}
