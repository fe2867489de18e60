//! In-memory scope implementation

use beanscope_domain::key::{BeanIdentifier, ScopeId};
use beanscope_domain::ports::scope::{BeanFactory, BeanInstance, CustomScope};
use dashmap::DashMap;

/// Scope holding one shared instance per bean identifier
///
/// Instances live until they are removed or the scope is dropped.
/// Get-or-create collapses concurrent callers for the same identifier into
/// a single creation, the same way the registry collapses lookups.
pub struct InMemoryScope {
    id: ScopeId,
    instances: DashMap<BeanIdentifier, BeanInstance>,
}

impl InMemoryScope {
    /// Create an empty scope managing the given scope kind
    pub fn new(id: ScopeId) -> Self {
        Self {
            id,
            instances: DashMap::new(),
        }
    }

    /// Number of live instances held by this scope
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Whether an instance is held under `id`
    pub fn contains(&self, id: &BeanIdentifier) -> bool {
        self.instances.contains_key(id)
    }

    /// Drop every instance held by this scope
    pub fn clear(&self) {
        self.instances.clear();
    }
}

impl CustomScope for InMemoryScope {
    fn scope_id(&self) -> &ScopeId {
        &self.id
    }

    fn get_or_create(&self, id: &BeanIdentifier, create: BeanFactory<'_>) -> BeanInstance {
        self.instances
            .entry(id.clone())
            .or_insert_with(create)
            .clone()
    }

    fn remove(&self, id: &BeanIdentifier) -> Option<BeanInstance> {
        self.instances.remove(id).map(|(_, instance)| instance)
    }
}

impl std::fmt::Debug for InMemoryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryScope")
            .field("scope_id", &self.id)
            .field("instances", &self.instances.len())
            .finish()
    }
}
