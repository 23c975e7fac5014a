// ============================================================================
// Currency Module
// Precision adapters, the generic handle and the factory
// ============================================================================

mod any_currency;
mod precision_currency;

pub mod factory;

pub use any_currency::{AnyCurrency, CurrencyShape};
pub use factory::{create_from_config, CurrencyBuilder};
pub use precision_currency::{
    BigDecimalCurrency, BigIntCurrency, DoubleCurrency, FloatCurrency, IntCurrency, LongCurrency,
    PrecisionCurrency,
};
