// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod currency;
mod name_resolver;

pub use currency::{Currency, NativeCurrency};
pub use name_resolver::{NameDirectory, NameResolver, NoOpResolver};
