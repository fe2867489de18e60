//! Custom Scope Port
//!
//! A scope is a policy governing the lifetime and sharing of bean
//! instances (per-request, per-session, ...). The registry treats scopes
//! as opaque capabilities; this port is the minimal surface a scope
//! implementation exposes to code that actually manages instances.

use crate::key::{BeanIdentifier, ScopeId};
use std::any::Any;
use std::sync::Arc;

/// A bean instance as held by a scope
///
/// Scopes store instances type-erased; callers downcast at the use site.
pub type BeanInstance = Arc<dyn Any + Send + Sync>;

/// Factory callback producing a bean instance on first use
pub type BeanFactory<'a> = &'a dyn Fn() -> BeanInstance;

/// Custom Scope Port
///
/// Defines the contract for scope implementations. An implementation owns
/// the instances living in its scope and decides when they are created and
/// discarded.
///
/// # Example
///
/// ```ignore
/// use beanscope_domain::{BeanIdentifier, CustomScope};
/// use std::sync::Arc;
///
/// let ident = BeanIdentifier::new("connection-pool");
/// let pool = scope.get_or_create(&ident, &|| Arc::new(Pool::new()));
/// ```
pub trait CustomScope: Send + Sync + std::fmt::Debug {
    /// Identifier of the scope kind this implementation manages
    fn scope_id(&self) -> &ScopeId;

    /// Get the instance held under `id`, creating it with `create` on
    /// first use
    ///
    /// Concurrent callers for the same identifier must all observe the
    /// same instance.
    fn get_or_create(&self, id: &BeanIdentifier, create: BeanFactory<'_>) -> BeanInstance;

    /// Remove and return the instance held under `id`, if any
    fn remove(&self, id: &BeanIdentifier) -> Option<BeanInstance>;
}
