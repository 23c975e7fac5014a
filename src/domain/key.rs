// ============================================================================
// Currency Key
// Namespaced, immutable identity of a currency
// ============================================================================

use crate::numeric::{CurrencyError, CurrencyResult};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Namespace used when a key is parsed without one.
pub const DEFAULT_NAMESPACE: &str = "currency";

/// A `namespace:value` key uniquely naming a currency.
///
/// Uniqueness across registered currencies is the caller's responsibility;
/// this type only guarantees the format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyKey {
    namespace: Arc<str>,
    value: Arc<str>,
}

impl CurrencyKey {
    /// Build a key from its two halves.
    ///
    /// # Errors
    /// Returns `InvalidKey` if either half is empty or contains characters
    /// outside `[a-z0-9._-]` (namespace) or `[a-z0-9._/-]` (value).
    pub fn new(namespace: &str, value: &str) -> CurrencyResult<Self> {
        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(CurrencyError::InvalidKey(format!(
                "namespace '{}' must match [a-z0-9._-]+",
                namespace
            )));
        }
        if value.is_empty() || !value.chars().all(is_value_char) {
            return Err(CurrencyError::InvalidKey(format!(
                "value '{}' must match [a-z0-9._/-]+",
                value
            )));
        }
        Ok(Self {
            namespace: Arc::from(namespace),
            value: Arc::from(value),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')
}

fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for CurrencyKey {
    type Err = CurrencyError;

    /// Parse `namespace:value`, or a bare `value` in the default namespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl fmt::Display for CurrencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CurrencyKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CurrencyKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
