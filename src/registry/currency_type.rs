// ============================================================================
// Currency Type
// Runtime discrimination of currencies by native shape and predicate
// ============================================================================

use crate::currency::{AnyCurrency, CurrencyShape};
use crate::interfaces::NativeCurrency;
use crate::numeric::{BigDecimal, BigInt, CurrencyError, CurrencyResult, Precision};
use std::fmt;
use std::sync::{Arc, LazyLock};

type Predicate<N> = Arc<dyn Fn(&dyn NativeCurrency<Native = N>) -> bool + Send + Sync>;

/// A named kind of currency: a native shape `N` refined by a predicate.
///
/// Two currencies can share a shape while being different types, e.g. a
/// bank-backed and a wallet-backed big-integer currency distinguished by
/// their key namespace.
pub struct CurrencyType<N: CurrencyShape> {
    name: Arc<str>,
    predicate: Predicate<N>,
}

impl<N: CurrencyShape> CurrencyType<N> {
    /// Type accepting every currency of shape `N`.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_predicate(name, |_| true)
    }

    /// Type accepting currencies of shape `N` that also satisfy `predicate`.
    pub fn with_predicate<F>(name: impl Into<Arc<str>>, predicate: F) -> Self
    where
        F: Fn(&dyn NativeCurrency<Native = N>) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn precision(&self) -> Precision {
        N::PRECISION
    }

    /// True iff `currency` has shape `N` and the predicate accepts it.
    pub fn is_instance(&self, currency: &AnyCurrency) -> bool {
        N::narrow(currency).is_some_and(|typed| (self.predicate)(&**typed))
    }

    /// Typed view of `currency`; only the shape is checked.
    ///
    /// # Errors
    /// Returns `TypeMismatch` naming both types if the shape differs.
    pub fn cast(&self, currency: &AnyCurrency) -> CurrencyResult<Arc<dyn NativeCurrency<Native = N>>> {
        match N::narrow(currency) {
            Some(typed) => Ok(Arc::clone(typed)),
            None => {
                tracing::debug!(
                    currency = %currency.key(),
                    actual = currency.type_name(),
                    requested = %self.name,
                    "currency cast rejected"
                );
                Err(CurrencyError::TypeMismatch {
                    actual: currency.type_name().to_string(),
                    requested: self.name.to_string(),
                })
            },
        }
    }
}

impl<N: CurrencyShape> Clone for CurrencyType<N> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

/// Shape is part of the Rust type, so equal names mean equal types.
impl<N: CurrencyShape> PartialEq for CurrencyType<N> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<N: CurrencyShape> Eq for CurrencyType<N> {}

impl<N: CurrencyShape> fmt::Debug for CurrencyType<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyType")
            .field("name", &self.name)
            .field("precision", &N::PRECISION)
            .finish()
    }
}

impl<N: CurrencyShape> fmt::Display for CurrencyType<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// Built-in Types
// ============================================================================

static INT: LazyLock<CurrencyType<i32>> =
    LazyLock::new(|| CurrencyType::new(Precision::Int.type_name()));
static LONG: LazyLock<CurrencyType<i64>> =
    LazyLock::new(|| CurrencyType::new(Precision::Long.type_name()));
static FLOAT: LazyLock<CurrencyType<f32>> =
    LazyLock::new(|| CurrencyType::new(Precision::Float.type_name()));
static DOUBLE: LazyLock<CurrencyType<f64>> =
    LazyLock::new(|| CurrencyType::new(Precision::Double.type_name()));
static BIG_INT: LazyLock<CurrencyType<BigInt>> =
    LazyLock::new(|| CurrencyType::new(Precision::BigInt.type_name()));
static BIG_DECIMAL: LazyLock<CurrencyType<BigDecimal>> =
    LazyLock::new(|| CurrencyType::new(Precision::BigDecimal.type_name()));

impl CurrencyType<i32> {
    pub fn int() -> &'static Self {
        &INT
    }
}

impl CurrencyType<i64> {
    pub fn long() -> &'static Self {
        &LONG
    }
}

impl CurrencyType<f32> {
    pub fn float() -> &'static Self {
        &FLOAT
    }
}

impl CurrencyType<f64> {
    pub fn double() -> &'static Self {
        &DOUBLE
    }
}

impl CurrencyType<BigInt> {
    pub fn big_int() -> &'static Self {
        &BIG_INT
    }
}

impl CurrencyType<BigDecimal> {
    pub fn big_decimal() -> &'static Self {
        &BIG_DECIMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{
        BigDecimalCurrency, BigIntCurrency, DoubleCurrency, FloatCurrency, IntCurrency,
        LongCurrency,
    };
    use crate::domain::AccountId;
    use crate::interfaces::Currency;

    fn all_builtin() -> Vec<AnyCurrency> {
        vec![
            AnyCurrency::new(IntCurrency::unnamed("test:int".parse().unwrap())),
            AnyCurrency::new(LongCurrency::unnamed("test:long".parse().unwrap())),
            AnyCurrency::new(FloatCurrency::unnamed("test:float".parse().unwrap())),
            AnyCurrency::new(DoubleCurrency::unnamed("test:double".parse().unwrap())),
            AnyCurrency::new(BigIntCurrency::unnamed("test:bigint".parse().unwrap())),
            AnyCurrency::new(BigDecimalCurrency::unnamed("test:bigdec".parse().unwrap())),
        ]
    }

    #[test]
    fn test_builtin_types_match_exactly_one_shape() {
        let currencies = all_builtin();

        for (index, currency) in currencies.iter().enumerate() {
            let hits = [
                CurrencyType::int().is_instance(currency),
                CurrencyType::long().is_instance(currency),
                CurrencyType::float().is_instance(currency),
                CurrencyType::double().is_instance(currency),
                CurrencyType::big_int().is_instance(currency),
                CurrencyType::big_decimal().is_instance(currency),
            ];
            let expected: Vec<bool> = (0..6).map(|i| i == index).collect();
            assert_eq!(hits.to_vec(), expected, "{:?}", currency);
        }
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(CurrencyType::int().name(), "IntCurrency");
        assert_eq!(CurrencyType::long().name(), "LongCurrency");
        assert_eq!(CurrencyType::float().name(), "FloatCurrency");
        assert_eq!(CurrencyType::double().name(), "DoubleCurrency");
        assert_eq!(CurrencyType::big_int().name(), "BigIntCurrency");
        assert_eq!(CurrencyType::big_decimal().name(), "BigDecimalCurrency");
        assert_eq!(CurrencyType::double().precision(), Precision::Double);
        assert_eq!(CurrencyType::big_int().precision(), Precision::BigInt);
    }

    #[test]
    fn test_cast_success_exposes_native_ops() {
        let currency = AnyCurrency::new(BigIntCurrency::unnamed("test:cast".parse().unwrap()));
        let account = AccountId::new();

        let typed = CurrencyType::big_int().cast(&currency).unwrap();
        typed.add_balance(&account, BigInt::from(7));
        assert_eq!(currency.int_value(&account), 7);
    }

    #[test]
    fn test_cast_failure_message() {
        let currency = AnyCurrency::new(IntCurrency::unnamed("test:cast".parse().unwrap()));

        let err = CurrencyType::big_decimal().cast(&currency).unwrap_err();
        assert_eq!(
            err,
            CurrencyError::TypeMismatch {
                actual: "IntCurrency".to_string(),
                requested: "BigDecimalCurrency".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "You cannot cast a IntCurrency to a BigDecimalCurrency"
        );
    }

    #[test]
    fn test_cast_result_formats_with_debug() {
        let currency = AnyCurrency::new(LongCurrency::unnamed("test:debug".parse().unwrap()));

        let rendered = format!("{:?}", CurrencyType::long().cast(&currency));
        assert!(rendered.starts_with("Ok(NativeCurrency"));
        assert!(rendered.contains("test:debug"));
        assert!(rendered.contains("LongCurrency"));

        let rendered = format!("{:?}", CurrencyType::int().cast(&currency));
        assert!(rendered.starts_with("Err(TypeMismatch"));
    }

    #[test]
    fn test_cast_failure_uses_custom_type_name() {
        let currency = AnyCurrency::new(
            DoubleCurrency::unnamed("test:gold".parse().unwrap()).with_type_name("GoldCurrency"),
        );

        let err = CurrencyType::long().cast(&currency).unwrap_err();
        assert_eq!(err.to_string(), "You cannot cast a GoldCurrency to a LongCurrency");
    }

    #[test]
    fn test_shape_mismatch_ignores_accepting_predicate() {
        let anything = CurrencyType::<i64>::with_predicate("AnyLong", |_| true);
        let currency = AnyCurrency::new(IntCurrency::unnamed("test:int".parse().unwrap()));

        assert!(!anything.is_instance(&currency));
        assert!(anything.cast(&currency).is_err());
    }

    #[test]
    fn test_predicate_refines_shape() {
        let bank = CurrencyType::<BigInt>::with_predicate("BankCurrency", |c| {
            c.key().namespace() == "bank"
        });
        let wallet = CurrencyType::<BigInt>::with_predicate("WalletCurrency", |c| {
            c.key().namespace() == "wallet"
        });

        let bank_credits =
            AnyCurrency::new(BigIntCurrency::unnamed("bank:credits".parse().unwrap()));
        let wallet_credits =
            AnyCurrency::new(BigIntCurrency::unnamed("wallet:credits".parse().unwrap()));

        assert!(bank.is_instance(&bank_credits));
        assert!(!bank.is_instance(&wallet_credits));
        assert!(wallet.is_instance(&wallet_credits));
        assert!(CurrencyType::big_int().is_instance(&bank_credits));

        // cast checks the shape only
        assert!(bank.cast(&wallet_credits).is_ok());
    }

    #[test]
    fn test_equality_by_name() {
        let first = CurrencyType::<f64>::new("GoldCurrency");
        let second = CurrencyType::<f64>::with_predicate("GoldCurrency", |_| false);
        let other = CurrencyType::<f64>::new("SilverCurrency");

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(first.clone(), first);
        assert_eq!(*CurrencyType::double(), CurrencyType::new("DoubleCurrency"));
        assert_eq!(first.to_string(), "GoldCurrency");
    }
}
