// ============================================================================
// Precision Currency
// A currency bound to one native balance store
// ============================================================================
//
// The store supplies the native get/set/add triple. Everything else is
// derived here through the conversion matrix: the caller's value is written
// into the native type, exactly one native operation runs, and the previous
// balance is read back into the caller's representation.

use crate::domain::{AccountId, CurrencyKey};
use crate::interfaces::{Currency, NameResolver, NativeCurrency, NoOpResolver};
use crate::numeric::{BigDecimal, BigInt, Numeric, Precision};
use crate::store::{
    BalanceStore, BigDecimalBalances, BigIntBalances, DoubleBalances, FloatBalances, IntBalances,
    LongBalances,
};
use std::fmt;
use std::sync::Arc;

/// Currency storing balances natively in `S::Value`.
pub struct PrecisionCurrency<S: BalanceStore> {
    key: CurrencyKey,
    type_name: Arc<str>,
    store: S,
    resolver: Arc<dyn NameResolver>,
}

impl<S: BalanceStore> PrecisionCurrency<S> {
    /// Create a currency over `store`, resolving names through `resolver`.
    pub fn new(key: CurrencyKey, store: S, resolver: Arc<dyn NameResolver>) -> Self {
        Self {
            key,
            type_name: Arc::from(S::Value::PRECISION.type_name()),
            store,
            resolver,
        }
    }

    /// Override the type name reported in cast errors.
    pub fn with_type_name(mut self, type_name: impl Into<Arc<str>>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// The backing native store.
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    fn read<R: Numeric>(&self, account: &AccountId) -> R {
        R::read_from(&self.store.get(account))
    }

    #[inline]
    fn write<R: Numeric>(&self, account: &AccountId, value: R) -> R {
        let previous = self.store.set(account, value.write_into());
        R::read_from(&previous)
    }

    #[inline]
    fn credit<R: Numeric>(&self, account: &AccountId, delta: R) -> R {
        let previous = self.store.add_from(account, &delta);
        R::read_from(&previous)
    }
}

impl<S: BalanceStore + Default> PrecisionCurrency<S> {
    /// Currency over a fresh, empty store.
    pub fn in_memory(key: CurrencyKey, resolver: Arc<dyn NameResolver>) -> Self {
        Self::new(key, S::default(), resolver)
    }

    /// Currency over a fresh store that resolves no names.
    pub fn unnamed(key: CurrencyKey) -> Self {
        Self::in_memory(key, Arc::new(NoOpResolver))
    }
}

impl<S: BalanceStore> fmt::Debug for PrecisionCurrency<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrecisionCurrency")
            .field("key", &self.key.to_string())
            .field("type_name", &self.type_name)
            .field("precision", &S::Value::PRECISION)
            .field("accounts", &self.store.len())
            .finish()
    }
}

impl<S: BalanceStore> Currency for PrecisionCurrency<S> {
    fn key(&self) -> &CurrencyKey {
        &self.key
    }

    fn precision(&self) -> Precision {
        S::Value::PRECISION
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn account_for_name(&self, name: &str) -> Option<AccountId> {
        self.resolver.resolve(name)
    }

    fn int_value(&self, account: &AccountId) -> i32 {
        self.read(account)
    }

    fn long_value(&self, account: &AccountId) -> i64 {
        self.read(account)
    }

    fn float_value(&self, account: &AccountId) -> f32 {
        self.read(account)
    }

    fn double_value(&self, account: &AccountId) -> f64 {
        self.read(account)
    }

    fn big_int_value(&self, account: &AccountId) -> BigInt {
        self.read(account)
    }

    fn big_decimal_value(&self, account: &AccountId) -> BigDecimal {
        self.read(account)
    }

    fn set_int_value(&self, account: &AccountId, value: i32) -> i32 {
        self.write(account, value)
    }

    fn set_long_value(&self, account: &AccountId, value: i64) -> i64 {
        self.write(account, value)
    }

    fn set_float_value(&self, account: &AccountId, value: f32) -> f32 {
        self.write(account, value)
    }

    fn set_double_value(&self, account: &AccountId, value: f64) -> f64 {
        self.write(account, value)
    }

    fn set_big_int_value(&self, account: &AccountId, value: BigInt) -> BigInt {
        self.write(account, value)
    }

    fn set_big_decimal_value(&self, account: &AccountId, value: BigDecimal) -> BigDecimal {
        self.write(account, value)
    }

    fn add_int_value(&self, account: &AccountId, delta: i32) -> i32 {
        self.credit(account, delta)
    }

    fn add_long_value(&self, account: &AccountId, delta: i64) -> i64 {
        self.credit(account, delta)
    }

    fn add_float_value(&self, account: &AccountId, delta: f32) -> f32 {
        self.credit(account, delta)
    }

    fn add_double_value(&self, account: &AccountId, delta: f64) -> f64 {
        self.credit(account, delta)
    }

    fn add_big_int_value(&self, account: &AccountId, delta: BigInt) -> BigInt {
        self.credit(account, delta)
    }

    fn add_big_decimal_value(&self, account: &AccountId, delta: BigDecimal) -> BigDecimal {
        self.credit(account, delta)
    }
}

impl<S: BalanceStore> NativeCurrency for PrecisionCurrency<S> {
    type Native = S::Value;

    fn balance(&self, account: &AccountId) -> S::Value {
        self.store.get(account)
    }

    fn set_balance(&self, account: &AccountId, value: S::Value) -> S::Value {
        self.store.set(account, value)
    }

    fn add_balance(&self, account: &AccountId, delta: S::Value) -> S::Value {
        self.store.add(account, delta)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Currency stored as `i32`
pub type IntCurrency = PrecisionCurrency<IntBalances>;

/// Currency stored as `i64`
pub type LongCurrency = PrecisionCurrency<LongBalances>;

/// Currency stored as `f32`
pub type FloatCurrency = PrecisionCurrency<FloatBalances>;

/// Currency stored as `f64`
pub type DoubleCurrency = PrecisionCurrency<DoubleBalances>;

/// Currency stored as an arbitrary-precision integer
pub type BigIntCurrency = PrecisionCurrency<BigIntBalances>;

/// Currency stored as an arbitrary-precision decimal
pub type BigDecimalCurrency = PrecisionCurrency<BigDecimalBalances>;
