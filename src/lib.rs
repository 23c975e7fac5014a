// ============================================================================
// Currency Precision Library
// Multi-precision currency balances with lock-free per-account updates
// ============================================================================

//! # Currency Precision
//!
//! A currency core that stores every balance in one native numeric precision
//! while letting callers read, set and add it in any of six representations.
//!
//! ## Features
//!
//! - **Six native precisions**: `i32`, `i64`, `f32`, `f64`, `BigInt`, `BigDecimal`
//! - **Clamping conversion matrix**: narrowing saturates, never wraps
//! - **Lock-free concurrent storage** using atomic compare-and-swap per account
//! - **Name resolution** through a pluggable resolver; unknown names read as zero
//! - **Runtime type discrimination** of generic currency handles
//!
//! ## Example
//!
//! ```rust
//! use currency_precision::prelude::*;
//! use std::sync::Arc;
//!
//! let names = Arc::new(NameDirectory::new());
//! let steve = AccountId::new();
//! names.register("steve", steve);
//!
//! // Coins are stored as i32
//! let coins = CurrencyBuilder::new("economy:coins")
//!     .int_precision()
//!     .with_resolver(names)
//!     .build()
//!     .unwrap();
//!
//! // Writes round, then clamp into the native range
//! coins.set_double_value_by_name("steve", 24.6);
//! assert_eq!(coins.int_value(&steve), 25);
//!
//! coins.add_long_value(&steve, i64::MAX);
//! assert_eq!(coins.long_value(&steve), i32::MAX as i64);
//!
//! // Narrow the generic handle to its native view
//! let typed = CurrencyType::int().cast(&coins).unwrap();
//! assert_eq!(typed.balance(&steve), i32::MAX);
//! ```

pub mod currency;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod registry;
pub mod store;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{
        create_from_config, AnyCurrency, BigDecimalCurrency, BigIntCurrency, CurrencyBuilder,
        CurrencyShape, DoubleCurrency, FloatCurrency, IntCurrency, LongCurrency,
        PrecisionCurrency,
    };
    pub use crate::domain::{AccountId, CurrencyConfig, CurrencyKey};
    pub use crate::interfaces::{
        Currency, NameDirectory, NameResolver, NativeCurrency, NoOpResolver,
    };
    pub use crate::numeric::{BigDecimal, BigInt, CurrencyError, CurrencyResult, Precision};
    pub use crate::registry::CurrencyType;
    pub use crate::store::BalanceStore;
}
