// ============================================================================
// Account Balances
// Concurrent balance store keyed by account, one native precision per store
// ============================================================================

use super::cell::{AtomicF32, AtomicF64, BalanceCell};
use crate::domain::AccountId;
use crate::numeric::{BigDecimal, BigInt, Numeric};
use crossbeam_skiplist::SkipMap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicI32, AtomicI64};

/// The native operation triple of one precision.
///
/// Implementations must make `add` atomic per account. Nothing is required
/// across accounts.
pub trait BalanceStore: Send + Sync + 'static {
    type Value: Numeric;

    /// Balance of `account`, zero if the account has never been written.
    fn get(&self, account: &AccountId) -> Self::Value;

    /// Overwrite the balance, returning the previous one.
    fn set(&self, account: &AccountId, value: Self::Value) -> Self::Value;

    /// Add a native `delta` to the balance, returning the previous one.
    fn add(&self, account: &AccountId, delta: Self::Value) -> Self::Value {
        self.add_from(account, &delta)
    }

    /// Add a `delta` held in any representation, returning the previous
    /// balance. The sum is formed before narrowing into the native width.
    fn add_from<R: Numeric>(&self, account: &AccountId, delta: &R) -> Self::Value;

    /// Whether `account` has ever been written.
    fn contains(&self, account: &AccountId) -> bool;

    /// Number of accounts holding a balance.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store: a lock-free skip list of per-account cells.
pub struct AccountBalances<C: BalanceCell> {
    /// Key: account id, Value: that account's cell
    accounts: SkipMap<AccountId, C>,
}

impl<C: BalanceCell> AccountBalances<C> {
    pub fn new() -> Self {
        Self {
            accounts: SkipMap::new(),
        }
    }

    /// Point-in-time copy of every balance, ordered by account id.
    pub fn snapshot(&self) -> Vec<(AccountId, C::Value)> {
        self.accounts
            .iter()
            .map(|entry| (*entry.key(), entry.value().current()))
            .collect()
    }

    fn cell(&self, account: &AccountId) -> crossbeam_skiplist::map::Entry<'_, AccountId, C> {
        self.accounts
            .get_or_insert_with(*account, || C::with_value(C::Value::zero_value()))
    }
}

impl<C: BalanceCell> Default for AccountBalances<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BalanceCell> fmt::Debug for AccountBalances<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountBalances")
            .field("precision", &C::Value::PRECISION)
            .field("accounts", &self.accounts.len())
            .finish()
    }
}

impl<C: BalanceCell> BalanceStore for AccountBalances<C> {
    type Value = C::Value;

    fn get(&self, account: &AccountId) -> C::Value {
        // reads never create an entry
        self.accounts
            .get(account)
            .map_or_else(C::Value::zero_value, |entry| entry.value().current())
    }

    fn set(&self, account: &AccountId, value: C::Value) -> C::Value {
        self.cell(account).value().replace(value)
    }

    fn add_from<R: Numeric>(&self, account: &AccountId, delta: &R) -> C::Value {
        self.cell(account).value().accumulate(delta)
    }

    fn contains(&self, account: &AccountId) -> bool {
        self.accounts.contains_key(account)
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}

// ============================================================================
// Type Aliases for the Six Native Precisions
// ============================================================================

pub type IntBalances = AccountBalances<AtomicI32>;
pub type LongBalances = AccountBalances<AtomicI64>;
pub type FloatBalances = AccountBalances<AtomicF32>;
pub type DoubleBalances = AccountBalances<AtomicF64>;
pub type BigIntBalances = AccountBalances<Mutex<BigInt>>;
pub type BigDecimalBalances = AccountBalances<Mutex<BigDecimal>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_get_does_not_create_account() {
        let store = IntBalances::new();
        let account = AccountId::new();

        assert_eq!(store.get(&account), 0);
        assert!(!store.contains(&account));
        assert!(store.is_empty());
    }

    #[test]
    fn test_native_triple() {
        let store = LongBalances::new();
        let account = AccountId::new();

        assert_eq!(store.set(&account, 24), 0);
        assert_eq!(store.add(&account, 5), 24);
        assert_eq!(store.add(&account, -10), 29);
        assert_eq!(store.get(&account), 19);
        assert!(store.contains(&account));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_foreign_delta_saturates_on_the_sum() {
        let store = IntBalances::new();
        let account = AccountId::new();

        store.set(&account, i32::MAX);
        assert_eq!(store.add_from(&account, &i64::MIN), i32::MAX);
        assert_eq!(store.get(&account), i32::MIN);

        assert_eq!(store.add_from(&account, &i64::MAX), i32::MIN);
        assert_eq!(store.get(&account), i32::MAX);
    }

    #[test]
    fn test_accounts_are_independent() {
        let store = BigDecimalBalances::new();
        let alice = AccountId::new();
        let bob = AccountId::new();

        store.set(&alice, BigDecimal::from_str("10.5").unwrap());
        store.add(&bob, BigDecimal::from_str("-1.25").unwrap());

        assert_eq!(store.get(&alice), BigDecimal::from_str("10.5").unwrap());
        assert_eq!(store.get(&bob), BigDecimal::from_str("-1.25").unwrap());
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_concurrent_adds_lose_no_updates() {
        const THREADS: usize = 8;
        const ADDS_PER_THREAD: usize = 1_000;

        let store = Arc::new(DoubleBalances::new());
        let account = AccountId::new();

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..ADDS_PER_THREAD {
                        store.add(&account, 1.0);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get(&account), (THREADS * ADDS_PER_THREAD) as f64);
    }

    #[test]
    fn test_concurrent_big_int_adds() {
        let store = Arc::new(BigIntBalances::new());
        let account = AccountId::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..500 {
                        store.add(&account, BigInt::from(2));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get(&account), BigInt::from(4_000));
    }
}
