// ============================================================================
// Store Module
// Native per-precision balance storage
// ============================================================================

mod balances;
mod cell;

pub use balances::{
    AccountBalances, BalanceStore, BigDecimalBalances, BigIntBalances, DoubleBalances,
    FloatBalances, IntBalances, LongBalances,
};
pub use cell::{AtomicF32, AtomicF64, BalanceCell};
