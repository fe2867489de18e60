//! Fixed-table bean locator

use beanscope_domain::error::Result;
use beanscope_domain::key::ScopeId;
use beanscope_domain::ports::{BeanLocator, CustomScope};
use beanscope_domain::qualifier::Qualifier;
use std::collections::HashMap;
use std::sync::Arc;

/// Locator answering from a table assembled at construction time
///
/// Scope-id entries serve the registry's exact-id queries; name entries
/// serve configuration-driven selection. The table is immutable once
/// built, matching the assumption that scope bindings are static for the
/// process lifetime.
///
/// # Example
///
/// ```ignore
/// use beanscope_infrastructure::locators::FixedBeanLocator;
/// use beanscope_infrastructure::scopes::InMemoryScope;
///
/// let locator = FixedBeanLocator::builder()
///     .scope(Arc::new(InMemoryScope::new(ScopeId::new("request"))))
///     .build();
/// ```
pub struct FixedBeanLocator {
    by_scope_id: HashMap<ScopeId, Arc<dyn CustomScope>>,
    by_name: HashMap<String, Arc<dyn CustomScope>>,
}

impl FixedBeanLocator {
    /// Start building a locator table
    pub fn builder() -> FixedBeanLocatorBuilder {
        FixedBeanLocatorBuilder::default()
    }

    /// Number of registered bindings across both tables
    pub fn binding_count(&self) -> usize {
        self.by_scope_id.len() + self.by_name.len()
    }
}

impl BeanLocator for FixedBeanLocator {
    fn find_scope(&self, qualifier: &Qualifier) -> Result<Option<Arc<dyn CustomScope>>> {
        let found = match qualifier {
            Qualifier::ByScopeId(id) => self.by_scope_id.get(id),
            Qualifier::ByName(name) => self.by_name.get(name),
        };

        Ok(found.cloned())
    }
}

impl std::fmt::Debug for FixedBeanLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedBeanLocator")
            .field("by_scope_id", &self.by_scope_id.len())
            .field("by_name", &self.by_name.len())
            .finish()
    }
}

/// Builder for [`FixedBeanLocator`]
#[derive(Default)]
pub struct FixedBeanLocatorBuilder {
    by_scope_id: HashMap<ScopeId, Arc<dyn CustomScope>>,
    by_name: HashMap<String, Arc<dyn CustomScope>>,
}

impl FixedBeanLocatorBuilder {
    /// Bind a scope under its own scope id
    ///
    /// A later binding for the same id replaces the earlier one.
    pub fn scope(mut self, scope: Arc<dyn CustomScope>) -> Self {
        self.by_scope_id.insert(scope.scope_id().clone(), scope);
        self
    }

    /// Bind a scope under an explicit name
    pub fn named_scope(mut self, name: impl Into<String>, scope: Arc<dyn CustomScope>) -> Self {
        self.by_name.insert(name.into(), scope);
        self
    }

    /// Finish the table
    pub fn build(self) -> FixedBeanLocator {
        FixedBeanLocator {
            by_scope_id: self.by_scope_id,
            by_name: self.by_name,
        }
    }
}
