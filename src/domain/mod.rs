// ============================================================================
// Domain Models Module
// Identity and configuration value objects
// ============================================================================

pub mod account;
pub mod config;
pub mod key;

pub use account::AccountId;
pub use config::CurrencyConfig;
pub use key::{CurrencyKey, DEFAULT_NAMESPACE};
