// ============================================================================
// Name Resolver Interface
// Maps display names onto account identifiers
// ============================================================================

use crate::domain::AccountId;
use crossbeam_skiplist::SkipMap;
use parking_lot::Mutex;

/// Collaborator resolving a display name into an account.
///
/// The currency core neither caches nor validates what this returns.
pub trait NameResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<AccountId>;
}

impl<F> NameResolver for F
where
    F: Fn(&str) -> Option<AccountId> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<AccountId> {
        self(name)
    }
}

/// Resolver that knows no names; every by-name call reads as zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpResolver;

impl NameResolver for NoOpResolver {
    fn resolve(&self, _name: &str) -> Option<AccountId> {
        None
    }
}

/// Concurrent in-memory name table.
///
/// Lookups are lock-free. Writers serialize on a single lock so that each
/// `register` and `forget` observes the binding it replaces.
pub struct NameDirectory {
    names: SkipMap<String, AccountId>,
    writers: Mutex<()>,
}

impl NameDirectory {
    pub fn new() -> Self {
        Self {
            names: SkipMap::new(),
            writers: Mutex::new(()),
        }
    }

    /// Bind `name` to `account`, returning the previous binding.
    pub fn register(&self, name: impl Into<String>, account: AccountId) -> Option<AccountId> {
        let name = name.into();
        let _guard = self.writers.lock();
        let previous = self.names.get(&name).map(|entry| *entry.value());
        self.names.insert(name, account);
        previous
    }

    /// Drop the binding for `name`.
    pub fn forget(&self, name: &str) -> Option<AccountId> {
        let _guard = self.writers.lock();
        self.names.remove(name).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NameDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver for NameDirectory {
    fn resolve(&self, name: &str) -> Option<AccountId> {
        self.names.get(name).map(|entry| *entry.value())
    }
}
