//! Caching Scope Registry
//!
//! Memoizing front for a [`BeanLocator`]. Scope lookups may walk a
//! dependency graph, while scope bindings are static configuration for the
//! process lifetime, so every outcome - bound or unbound - is cached
//! permanently on first resolution.
//!
//! ## Resolution flow
//!
//! ```text
//! caller ──▶ find_scope(id)
//!               │
//!               ├─ cache hit ──▶ cached handle (no locator call)
//!               │
//!               └─ cache miss ─▶ BeanLocator::find_scope(ByScopeId(id))
//!                                   │
//!                                   ├─ Ok(outcome) ──▶ cached forever
//!                                   └─ Err(e) ───────▶ propagated, not cached
//! ```

use beanscope_domain::error::Result;
use beanscope_domain::key::ScopeId;
use beanscope_domain::ports::{BeanLocator, CustomScope, ScopeRegistry};
use beanscope_domain::qualifier::Qualifier;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::debug;

use crate::config::RegistryConfig;

/// Scope registry with permanent memoization of locator answers
///
/// The cache is append-only: once an id has an entry, that entry never
/// changes for the registry's lifetime. Negative answers (`None`) are
/// cached exactly like positive ones; locator errors are not cached at
/// all, so a transient failure cannot poison an id.
///
/// Owned by the composition root and passed by reference - multiple
/// independent registries can coexist, each with its own cache.
pub struct CachingScopeRegistry {
    locator: Arc<dyn BeanLocator>,
    scopes: DashMap<ScopeId, Option<Arc<dyn CustomScope>>>,
}

impl CachingScopeRegistry {
    /// Create a registry backed by `locator`
    ///
    /// Most processes bind only a handful of custom scopes, so the cache
    /// starts at minimal capacity.
    pub fn new(locator: Arc<dyn BeanLocator>) -> Self {
        Self::with_capacity(locator, crate::constants::DEFAULT_REGISTRY_CAPACITY)
    }

    /// Create a registry with a pre-sized cache
    pub fn with_capacity(locator: Arc<dyn BeanLocator>, capacity: usize) -> Self {
        Self {
            locator,
            scopes: DashMap::with_capacity(capacity),
        }
    }

    /// Create a registry from configuration
    pub fn from_config(locator: Arc<dyn BeanLocator>, config: &RegistryConfig) -> Self {
        Self::with_capacity(locator, config.initial_capacity)
    }

    /// Whether an outcome (bound or unbound) is already memoized for `id`
    ///
    /// A probe only - never triggers a resolution.
    pub fn is_cached(&self, id: &ScopeId) -> bool {
        self.scopes.contains_key(id)
    }

    /// Number of memoized outcomes
    pub fn cached_len(&self) -> usize {
        self.scopes.len()
    }
}

impl ScopeRegistry for CachingScopeRegistry {
    fn find_scope(&self, id: &ScopeId) -> Result<Option<Arc<dyn CustomScope>>> {
        // Hit path: shared shard lock only, no allocation.
        if let Some(cached) = self.scopes.get(id) {
            return Ok(cached.clone());
        }

        match self.scopes.entry(id.clone()) {
            // Another caller filled the entry between the probe above and
            // taking the entry lock.
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(slot) => {
                // The shard stays write-locked for the duration of the
                // lookup: callers racing on this id block here and then
                // take the occupied branch, so the locator runs at most
                // once per id. An error returns before anything is
                // inserted, leaving the slot vacant for a later retry.
                let qualifier = Qualifier::by_scope_id(id.clone());
                let found = self.locator.find_scope(&qualifier)?;

                debug!(scope_id = %id, bound = found.is_some(), "resolved custom scope");

                let handle = found.clone();
                slot.insert(found);
                Ok(handle)
            }
        }
    }
}

impl std::fmt::Debug for CachingScopeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingScopeRegistry")
            .field("cached", &self.scopes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locators::NullBeanLocator;

    #[test]
    fn test_new_registry_starts_empty() {
        let registry = CachingScopeRegistry::new(Arc::new(NullBeanLocator::new()));
        assert_eq!(registry.cached_len(), 0);
        assert!(!registry.is_cached(&ScopeId::new("request")));
    }

    #[test]
    fn test_debug_reports_cache_size() {
        let registry = CachingScopeRegistry::with_capacity(Arc::new(NullBeanLocator::new()), 4);
        let rendered = format!("{:?}", registry);
        assert!(rendered.contains("CachingScopeRegistry"));
        assert!(rendered.contains("cached"));
    }
}
