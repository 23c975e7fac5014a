// ============================================================================
// Generic Currency Handle
// Tagged union over the six native shapes
// ============================================================================

use crate::interfaces::{Currency, NativeCurrency};
use crate::numeric::{BigDecimal, BigInt, Numeric, Precision};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to a currency whose native precision is only known at runtime.
///
/// Derefs to the full [`Currency`] surface; use a `CurrencyType` to narrow it
/// to a typed view exposing the native operations.
#[derive(Clone)]
pub enum AnyCurrency {
    Int(Arc<dyn NativeCurrency<Native = i32>>),
    Long(Arc<dyn NativeCurrency<Native = i64>>),
    Float(Arc<dyn NativeCurrency<Native = f32>>),
    Double(Arc<dyn NativeCurrency<Native = f64>>),
    BigInt(Arc<dyn NativeCurrency<Native = BigInt>>),
    BigDecimal(Arc<dyn NativeCurrency<Native = BigDecimal>>),
}

impl AnyCurrency {
    /// Wrap a concrete currency.
    pub fn new<C>(currency: C) -> Self
    where
        C: NativeCurrency + 'static,
        C::Native: CurrencyShape,
    {
        Self::from_native(Arc::new(currency))
    }

    /// Wrap an already shared typed currency.
    pub fn from_native<N: CurrencyShape>(currency: Arc<dyn NativeCurrency<Native = N>>) -> Self {
        N::wrap(currency)
    }

    /// The native shape tag.
    pub fn precision(&self) -> Precision {
        match self {
            AnyCurrency::Int(_) => Precision::Int,
            AnyCurrency::Long(_) => Precision::Long,
            AnyCurrency::Float(_) => Precision::Float,
            AnyCurrency::Double(_) => Precision::Double,
            AnyCurrency::BigInt(_) => Precision::BigInt,
            AnyCurrency::BigDecimal(_) => Precision::BigDecimal,
        }
    }

    pub fn as_currency(&self) -> &(dyn Currency + 'static) {
        match self {
            AnyCurrency::Int(c) => &**c,
            AnyCurrency::Long(c) => &**c,
            AnyCurrency::Float(c) => &**c,
            AnyCurrency::Double(c) => &**c,
            AnyCurrency::BigInt(c) => &**c,
            AnyCurrency::BigDecimal(c) => &**c,
        }
    }

    /// Typed view if the native shape is `N`.
    pub fn narrow<N: CurrencyShape>(&self) -> Option<&Arc<dyn NativeCurrency<Native = N>>> {
        N::narrow(self)
    }

    /// True if both handles share the same underlying currency.
    pub fn ptr_eq(&self, other: &AnyCurrency) -> bool {
        std::ptr::addr_eq(
            self.as_currency() as *const dyn Currency,
            other.as_currency() as *const dyn Currency,
        )
    }
}

impl Deref for AnyCurrency {
    type Target = dyn Currency;

    fn deref(&self) -> &Self::Target {
        self.as_currency()
    }
}

impl fmt::Debug for AnyCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyCurrency")
            .field("key", &self.key().to_string())
            .field("type_name", &self.type_name())
            .field("precision", &self.precision())
            .finish()
    }
}

// ============================================================================
// Shape Tags
// ============================================================================

/// Native numeric types a currency can be stored in.
///
/// Links each of the six types to its `AnyCurrency` variant.
pub trait CurrencyShape: Numeric {
    fn narrow(currency: &AnyCurrency) -> Option<&Arc<dyn NativeCurrency<Native = Self>>>;

    fn wrap(currency: Arc<dyn NativeCurrency<Native = Self>>) -> AnyCurrency;
}

macro_rules! currency_shape {
    ($native:ty, $variant:ident) => {
        impl CurrencyShape for $native {
            fn narrow(currency: &AnyCurrency) -> Option<&Arc<dyn NativeCurrency<Native = Self>>> {
                match currency {
                    AnyCurrency::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn wrap(currency: Arc<dyn NativeCurrency<Native = Self>>) -> AnyCurrency {
                AnyCurrency::$variant(currency)
            }
        }
    };
}

currency_shape!(i32, Int);
currency_shape!(i64, Long);
currency_shape!(f32, Float);
currency_shape!(f64, Double);
currency_shape!(BigInt, BigInt);
currency_shape!(BigDecimal, BigDecimal);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{BigDecimalCurrency, DoubleCurrency, IntCurrency, LongCurrency};
    use crate::domain::AccountId;

    #[test]
    fn test_wrap_picks_variant() {
        let int = AnyCurrency::new(IntCurrency::unnamed("test:int".parse().unwrap()));
        let long = AnyCurrency::new(LongCurrency::unnamed("test:long".parse().unwrap()));
        let double = AnyCurrency::new(DoubleCurrency::unnamed("test:double".parse().unwrap()));
        let decimal =
            AnyCurrency::new(BigDecimalCurrency::unnamed("test:decimal".parse().unwrap()));

        assert!(matches!(int, AnyCurrency::Int(_)));
        assert_eq!(long.precision(), Precision::Long);
        assert_eq!(double.precision(), Precision::Double);
        assert_eq!(decimal.precision(), Precision::BigDecimal);
    }

    #[test]
    fn test_deref_to_currency() {
        let currency = AnyCurrency::new(IntCurrency::unnamed("test:deref".parse().unwrap()));
        let account = AccountId::new();

        assert_eq!(currency.set_double_value(&account, 2.5), 0.0);
        assert_eq!(currency.long_value(&account), 3);
        assert_eq!(currency.type_name(), "IntCurrency");
        assert_eq!(currency.key().to_string(), "test:deref");
    }

    #[test]
    fn test_narrow() {
        let currency = AnyCurrency::new(LongCurrency::unnamed("test:narrow".parse().unwrap()));
        let account = AccountId::new();

        assert!(currency.narrow::<i32>().is_none());
        assert!(currency.narrow::<f64>().is_none());

        let typed = currency.narrow::<i64>().unwrap();
        typed.set_balance(&account, i64::MAX);
        assert_eq!(currency.int_value(&account), i32::MAX);
    }

    #[test]
    fn test_clones_share_state() {
        let currency = AnyCurrency::new(IntCurrency::unnamed("test:shared".parse().unwrap()));
        let other = currency.clone();
        let account = AccountId::new();

        other.add_int_value(&account, 10);
        assert_eq!(currency.int_value(&account), 10);
        assert!(currency.ptr_eq(&other));

        let fresh = AnyCurrency::new(IntCurrency::unnamed("test:shared".parse().unwrap()));
        assert!(!currency.ptr_eq(&fresh));
    }
}
