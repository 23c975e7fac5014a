// ============================================================================
// Balance Cells
// Per-account storage slots with atomic read-modify-write
// ============================================================================
//
// Fixed-width cells are lock-free: integers live in native atomics, floats in
// atomics holding their IEEE bit patterns. Every accumulate is a CAS loop
// (read current, compute, compare-exchange, retry on contention). The next
// value comes from `Numeric::add_from`, so a foreign delta is folded in
// without being narrowed first.
//
// Arbitrary-precision values cannot be swapped atomically, so each account
// gets its own mutex. The critical section covers one account only.

use crate::numeric::Numeric;
use crossbeam::utils::Backoff;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU32, AtomicU64, Ordering};

/// A single account's balance slot.
pub trait BalanceCell: Send + Sync + 'static {
    type Value: Numeric;

    /// Create a slot holding `value`.
    fn with_value(value: Self::Value) -> Self;

    /// Current value.
    fn current(&self) -> Self::Value;

    /// Store `value`, returning the previous value.
    fn replace(&self, value: Self::Value) -> Self::Value;

    /// Atomically add `delta`, returning the previous value.
    ///
    /// The delta may be in any representation, see `Numeric::add_from`.
    fn accumulate<R: Numeric>(&self, delta: &R) -> Self::Value;
}

// ============================================================================
// Integer Cells
// ============================================================================

impl BalanceCell for AtomicI32 {
    type Value = i32;

    fn with_value(value: i32) -> Self {
        AtomicI32::new(value)
    }

    #[inline]
    fn current(&self) -> i32 {
        self.load(Ordering::Acquire)
    }

    #[inline]
    fn replace(&self, value: i32) -> i32 {
        self.swap(value, Ordering::AcqRel)
    }

    fn accumulate<R: Numeric>(&self, delta: &R) -> i32 {
        let backoff = Backoff::new();
        let mut current = self.load(Ordering::Acquire);

        loop {
            let next = current.add_from(delta);

            match self.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire) {
                Ok(previous) => return previous,
                Err(actual) => {
                    // CAS failed, retry against the fresh value
                    current = actual;
                    backoff.spin();
                },
            }
        }
    }
}

impl BalanceCell for AtomicI64 {
    type Value = i64;

    fn with_value(value: i64) -> Self {
        AtomicI64::new(value)
    }

    #[inline]
    fn current(&self) -> i64 {
        self.load(Ordering::Acquire)
    }

    #[inline]
    fn replace(&self, value: i64) -> i64 {
        self.swap(value, Ordering::AcqRel)
    }

    fn accumulate<R: Numeric>(&self, delta: &R) -> i64 {
        let backoff = Backoff::new();
        let mut current = self.load(Ordering::Acquire);

        loop {
            let next = current.add_from(delta);

            match self.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire) {
                Ok(previous) => return previous,
                Err(actual) => {
                    current = actual;
                    backoff.spin();
                },
            }
        }
    }
}

// ============================================================================
// Float Cells
// ============================================================================

/// `f32` balance stored as its bit pattern in an `AtomicU32`.
#[derive(Debug, Default)]
#[repr(transparent)]
pub struct AtomicF32(AtomicU32);

impl BalanceCell for AtomicF32 {
    type Value = f32;

    fn with_value(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    fn current(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    #[inline]
    fn replace(&self, value: f32) -> f32 {
        f32::from_bits(self.0.swap(value.to_bits(), Ordering::AcqRel))
    }

    fn accumulate<R: Numeric>(&self, delta: &R) -> f32 {
        let backoff = Backoff::new();
        let mut current_bits = self.0.load(Ordering::Acquire);

        loop {
            // compare on bits so NaN balances cannot spin forever
            let next = f32::from_bits(current_bits).add_from(delta).to_bits();

            match self.0.compare_exchange_weak(
                current_bits,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(previous) => return f32::from_bits(previous),
                Err(actual) => {
                    current_bits = actual;
                    backoff.spin();
                },
            }
        }
    }
}

/// `f64` balance stored as its bit pattern in an `AtomicU64`.
#[derive(Debug, Default)]
#[repr(transparent)]
pub struct AtomicF64(AtomicU64);

impl BalanceCell for AtomicF64 {
    type Value = f64;

    fn with_value(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    #[inline]
    fn current(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    #[inline]
    fn replace(&self, value: f64) -> f64 {
        f64::from_bits(self.0.swap(value.to_bits(), Ordering::AcqRel))
    }

    fn accumulate<R: Numeric>(&self, delta: &R) -> f64 {
        let backoff = Backoff::new();
        let mut current_bits = self.0.load(Ordering::Acquire);

        loop {
            let next = f64::from_bits(current_bits).add_from(delta).to_bits();

            match self.0.compare_exchange_weak(
                current_bits,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(previous) => return f64::from_bits(previous),
                Err(actual) => {
                    current_bits = actual;
                    backoff.spin();
                },
            }
        }
    }
}

// ============================================================================
// Arbitrary-Precision Cells
// ============================================================================

impl<T: Numeric> BalanceCell for Mutex<T> {
    type Value = T;

    fn with_value(value: T) -> Self {
        Mutex::new(value)
    }

    fn current(&self) -> T {
        self.lock().clone()
    }

    fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.lock(), value)
    }

    fn accumulate<R: Numeric>(&self, delta: &R) -> T {
        let mut guard = self.lock();
        let next = guard.add_from(delta);
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_integer_cell() {
        let cell = AtomicI32::with_value(24);
        assert_eq!(cell.accumulate(&5), 24);
        assert_eq!(cell.current(), 29);
        assert_eq!(cell.replace(0), 29);
        assert_eq!(cell.current(), 0);
    }

    #[test]
    fn test_integer_cell_saturates() {
        let cell = AtomicI64::with_value(i64::MAX - 1);
        assert_eq!(cell.accumulate(&10), i64::MAX - 1);
        assert_eq!(cell.current(), i64::MAX);

        let cell = AtomicI32::with_value(-5);
        cell.accumulate(&i32::MIN);
        assert_eq!(cell.current(), i32::MIN);
    }

    #[test]
    fn test_integer_cell_clamps_wide_delta() {
        let cell = AtomicI32::with_value(i32::MAX);
        assert_eq!(cell.accumulate(&i64::MIN), i32::MAX);
        assert_eq!(cell.current(), i32::MIN);

        let cell = AtomicI64::with_value(-3);
        cell.accumulate(&BigInt::from(10).pow(30));
        assert_eq!(cell.current(), i64::MAX);
    }

    #[test]
    fn test_float_cells() {
        let cell = AtomicF32::with_value(1.5);
        assert_eq!(cell.accumulate(&0.25), 1.5);
        assert_eq!(cell.current(), 1.75);

        let cell = AtomicF64::with_value(-0.5);
        assert_eq!(cell.replace(f64::INFINITY), -0.5);
        assert_eq!(cell.accumulate(&1.0), f64::INFINITY);
        assert_eq!(cell.current(), f64::INFINITY);
    }

    #[test]
    fn test_float_cell_nan_does_not_spin() {
        let cell = AtomicF64::with_value(f64::NAN);
        assert!(cell.accumulate(&1.0).is_nan());
        assert!(cell.current().is_nan());
    }

    #[test]
    fn test_locked_cell() {
        let cell: Mutex<BigInt> = BalanceCell::with_value(BigInt::from(i64::MAX));
        assert_eq!(cell.accumulate(&BigInt::from(1)), BigInt::from(i64::MAX));
        assert_eq!(cell.current(), BigInt::from(i64::MAX) + 1);
        assert_eq!(cell.replace(BigInt::from(3)), BigInt::from(i64::MAX) + 1);

        cell.accumulate(&2.9f64);
        assert_eq!(cell.current(), BigInt::from(5));
    }
}
