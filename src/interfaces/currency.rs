// ============================================================================
// Currency Interface
// The six-representation get/set/add contract shared by every currency
// ============================================================================

use crate::domain::{AccountId, CurrencyKey};
use crate::numeric::clamp::{exact_i32, exact_i64};
use crate::numeric::{BigDecimal, BigInt, CurrencyResult, Numeric, Precision};
use std::fmt;

/// A currency: a balance per account, readable and writable in any of the six
/// numeric representations whatever the native one is.
///
/// Setters and adders return the balance as it was *before* the call,
/// converted into the caller's representation. Narrowing conversions clamp
/// rather than overflow.
///
/// Every operation also exists addressed by display name. When the name
/// cannot be resolved nothing is mutated and the representation's zero is
/// returned; an unknown name is indistinguishable from an untouched balance.
pub trait Currency: Send + Sync {
    /// Unique key of this currency.
    fn key(&self) -> &CurrencyKey;

    /// Native precision of the stored balances.
    fn precision(&self) -> Precision;

    /// Name of this currency's type, as reported in cast errors.
    fn type_name(&self) -> &str;

    /// Resolve a display name into an account, if known.
    fn account_for_name(&self, name: &str) -> Option<AccountId>;

    // ========================================================================
    // Getters
    // ========================================================================

    /// Balance as `i32`; fractions truncated, overflow clamped.
    fn int_value(&self, account: &AccountId) -> i32;

    /// Balance as `i64`; fractions truncated, overflow clamped.
    fn long_value(&self, account: &AccountId) -> i64;

    fn float_value(&self, account: &AccountId) -> f32;

    fn double_value(&self, account: &AccountId) -> f64;

    /// Balance as a big integer; fractions truncated.
    fn big_int_value(&self, account: &AccountId) -> BigInt;

    fn big_decimal_value(&self, account: &AccountId) -> BigDecimal;

    // ========================================================================
    // Setters
    // ========================================================================

    fn set_int_value(&self, account: &AccountId, value: i32) -> i32;
    fn set_long_value(&self, account: &AccountId, value: i64) -> i64;
    fn set_float_value(&self, account: &AccountId, value: f32) -> f32;
    fn set_double_value(&self, account: &AccountId, value: f64) -> f64;
    fn set_big_int_value(&self, account: &AccountId, value: BigInt) -> BigInt;
    fn set_big_decimal_value(&self, account: &AccountId, value: BigDecimal) -> BigDecimal;

    // ========================================================================
    // Adders
    // ========================================================================

    fn add_int_value(&self, account: &AccountId, delta: i32) -> i32;
    fn add_long_value(&self, account: &AccountId, delta: i64) -> i64;
    fn add_float_value(&self, account: &AccountId, delta: f32) -> f32;
    fn add_double_value(&self, account: &AccountId, delta: f64) -> f64;
    fn add_big_int_value(&self, account: &AccountId, delta: BigInt) -> BigInt;
    fn add_big_decimal_value(&self, account: &AccountId, delta: BigDecimal) -> BigDecimal;

    // ========================================================================
    // Exact Getters
    // ========================================================================

    /// Balance as `i32`, refusing fractions and out-of-range values.
    ///
    /// # Errors
    /// Returns `Inexact` instead of truncating or clamping.
    fn int_value_exact(&self, account: &AccountId) -> CurrencyResult<i32> {
        exact_i32(&self.big_decimal_value(account))
    }

    /// Balance as `i64`, refusing fractions and out-of-range values.
    ///
    /// # Errors
    /// Returns `Inexact` instead of truncating or clamping.
    fn long_value_exact(&self, account: &AccountId) -> CurrencyResult<i64> {
        exact_i64(&self.big_decimal_value(account))
    }

    // ========================================================================
    // By-Name Getters
    // ========================================================================

    fn int_value_by_name(&self, name: &str) -> i32 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.int_value(&account)
        })
    }

    fn long_value_by_name(&self, name: &str) -> i64 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.long_value(&account)
        })
    }

    fn float_value_by_name(&self, name: &str) -> f32 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.float_value(&account)
        })
    }

    fn double_value_by_name(&self, name: &str) -> f64 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.double_value(&account)
        })
    }

    fn big_int_value_by_name(&self, name: &str) -> BigInt {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.big_int_value(&account)
        })
    }

    fn big_decimal_value_by_name(&self, name: &str) -> BigDecimal {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.big_decimal_value(&account)
        })
    }

    // ========================================================================
    // By-Name Setters
    // ========================================================================

    fn set_int_value_by_name(&self, name: &str, value: i32) -> i32 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.set_int_value(&account, value)
        })
    }

    fn set_long_value_by_name(&self, name: &str, value: i64) -> i64 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.set_long_value(&account, value)
        })
    }

    fn set_float_value_by_name(&self, name: &str, value: f32) -> f32 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.set_float_value(&account, value)
        })
    }

    fn set_double_value_by_name(&self, name: &str, value: f64) -> f64 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.set_double_value(&account, value)
        })
    }

    fn set_big_int_value_by_name(&self, name: &str, value: BigInt) -> BigInt {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.set_big_int_value(&account, value)
        })
    }

    fn set_big_decimal_value_by_name(&self, name: &str, value: BigDecimal) -> BigDecimal {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.set_big_decimal_value(&account, value)
        })
    }

    // ========================================================================
    // By-Name Adders
    // ========================================================================

    fn add_int_value_by_name(&self, name: &str, delta: i32) -> i32 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.add_int_value(&account, delta)
        })
    }

    fn add_long_value_by_name(&self, name: &str, delta: i64) -> i64 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.add_long_value(&account, delta)
        })
    }

    fn add_float_value_by_name(&self, name: &str, delta: f32) -> f32 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.add_float_value(&account, delta)
        })
    }

    fn add_double_value_by_name(&self, name: &str, delta: f64) -> f64 {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.add_double_value(&account, delta)
        })
    }

    fn add_big_int_value_by_name(&self, name: &str, delta: BigInt) -> BigInt {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.add_big_int_value(&account, delta)
        })
    }

    fn add_big_decimal_value_by_name(&self, name: &str, delta: BigDecimal) -> BigDecimal {
        resolve_or_zero(self.key(), name, self.account_for_name(name), |account| {
            self.add_big_decimal_value(&account, delta)
        })
    }
}

/// Forward to `op` when the name resolved, otherwise yield zero untouched.
fn resolve_or_zero<R: Numeric>(
    key: &CurrencyKey,
    name: &str,
    account: Option<AccountId>,
    op: impl FnOnce(AccountId) -> R,
) -> R {
    match account {
        Some(account) => op(account),
        None => {
            tracing::debug!(currency = %key, name, "name did not resolve to an account");
            R::zero_value()
        },
    }
}

/// Precision-specific view of a currency exposing its native operations.
///
/// Obtained through `CurrencyType::cast` on a generic handle.
pub trait NativeCurrency: Currency {
    type Native: Numeric;

    fn balance(&self, account: &AccountId) -> Self::Native;

    /// Overwrite the native balance, returning the previous one.
    fn set_balance(&self, account: &AccountId, value: Self::Native) -> Self::Native;

    /// Add to the native balance atomically, returning the previous one.
    fn add_balance(&self, account: &AccountId, delta: Self::Native) -> Self::Native;
}

impl<N: Numeric> fmt::Debug for dyn NativeCurrency<Native = N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeCurrency")
            .field("key", &self.key().to_string())
            .field("type_name", &self.type_name())
            .field("precision", &self.precision())
            .finish()
    }
}
