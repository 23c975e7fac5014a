// ============================================================================
// Registry Module
// Currency types used to narrow generic handles
// ============================================================================

mod currency_type;

pub use currency_type::CurrencyType;
