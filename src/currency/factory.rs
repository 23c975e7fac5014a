// ============================================================================
// Currency Factory
// Creates currencies with the configured native precision
// ============================================================================

use crate::currency::{
    AnyCurrency, BigDecimalCurrency, BigIntCurrency, DoubleCurrency, FloatCurrency, IntCurrency,
    LongCurrency,
};
use crate::domain::config::CurrencyConfig;
use crate::domain::CurrencyKey;
use crate::interfaces::{NameResolver, NoOpResolver};
use crate::numeric::{CurrencyResult, Precision};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a currency from configuration
///
/// # Arguments
/// * `config` - Currency configuration
/// * `resolver` - Resolver used by the by-name operations
///
/// # Returns
/// * `CurrencyResult<AnyCurrency>` - Configured currency or error
///
/// # Example
/// ```
/// use currency_precision::prelude::*;
/// use currency_precision::currency::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CurrencyConfig::gold("economy:gold");
/// let currency = create_from_config(config, Arc::new(NoOpResolver)).unwrap();
/// assert_eq!(currency.type_name(), "DoubleCurrency");
/// ```
pub fn create_from_config(
    config: CurrencyConfig,
    resolver: Arc<dyn NameResolver>,
) -> CurrencyResult<AnyCurrency> {
    // Validate configuration first
    let key = config.validate()?;
    let type_name = config.effective_type_name().to_string();

    let currency = create_currency(key, config.precision, type_name, resolver);

    tracing::info!(
        currency = %currency.key(),
        precision = %config.precision,
        type_name = currency.type_name(),
        "currency created"
    );

    Ok(currency)
}

/// Binds a fresh store of the requested precision
fn create_currency(
    key: CurrencyKey,
    precision: Precision,
    type_name: String,
    resolver: Arc<dyn NameResolver>,
) -> AnyCurrency {
    match precision {
        Precision::Int => {
            AnyCurrency::new(IntCurrency::in_memory(key, resolver).with_type_name(type_name))
        }
        Precision::Long => {
            AnyCurrency::new(LongCurrency::in_memory(key, resolver).with_type_name(type_name))
        }
        Precision::Float => {
            AnyCurrency::new(FloatCurrency::in_memory(key, resolver).with_type_name(type_name))
        }
        Precision::Double => {
            AnyCurrency::new(DoubleCurrency::in_memory(key, resolver).with_type_name(type_name))
        }
        Precision::BigInt => {
            AnyCurrency::new(BigIntCurrency::in_memory(key, resolver).with_type_name(type_name))
        }
        Precision::BigDecimal => AnyCurrency::new(
            BigDecimalCurrency::in_memory(key, resolver).with_type_name(type_name),
        ),
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating currencies with fluent API
///
/// # Example
/// ```
/// use currency_precision::prelude::*;
/// use currency_precision::currency::factory::CurrencyBuilder;
///
/// let currency = CurrencyBuilder::new("economy:points")
///     .long_precision()
///     .with_type_name("PointsCurrency")
///     .build()
///     .unwrap();
///
/// assert_eq!(currency.precision(), Precision::Long);
/// ```
pub struct CurrencyBuilder {
    config: CurrencyConfig,
    resolver: Arc<dyn NameResolver>,
}

impl CurrencyBuilder {
    /// Create a new builder; the precision defaults to `BigDecimal`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            config: CurrencyConfig::new(key, Precision::BigDecimal),
            resolver: Arc::new(NoOpResolver),
        }
    }

    // ========================================================================
    // Precision Configuration
    // ========================================================================

    pub fn precision(mut self, precision: Precision) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn int_precision(self) -> Self {
        self.precision(Precision::Int)
    }

    pub fn long_precision(self) -> Self {
        self.precision(Precision::Long)
    }

    pub fn float_precision(self) -> Self {
        self.precision(Precision::Float)
    }

    pub fn double_precision(self) -> Self {
        self.precision(Precision::Double)
    }

    pub fn big_int_precision(self) -> Self {
        self.precision(Precision::BigInt)
    }

    pub fn big_decimal_precision(self) -> Self {
        self.precision(Precision::BigDecimal)
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set the type name reported in cast errors
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.config = self.config.with_type_name(type_name);
        self
    }

    /// Set the resolver used by by-name operations
    pub fn with_resolver(mut self, resolver: Arc<dyn NameResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Start from an existing configuration
    pub fn from_config(config: CurrencyConfig) -> Self {
        Self {
            config,
            resolver: Arc::new(NoOpResolver),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the currency
    pub fn build(self) -> CurrencyResult<AnyCurrency> {
        create_from_config(self.config, self.resolver)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CurrencyConfig {
        &self.config
    }
}
