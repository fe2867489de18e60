//! Scope Registry Port
//!
//! The caller-facing resolution contract. A registry answers "which scope
//! implementation, if any, handles this scope kind" and memoizes the
//! answer so the expensive lookup behind it runs at most once per id.

use crate::error::Result;
use crate::key::ScopeId;
use crate::ports::scope::CustomScope;
use std::sync::Arc;

/// Scope Registry Port
///
/// # Contract
///
/// - `Ok(Some(_))` - a scope implementation is bound to this id. Every
///   call for the same id returns the same instance.
/// - `Ok(None)` - no implementation is bound. This outcome is cached like
///   a positive one; repeat calls answer without consulting the locator.
/// - `Err(_)` - the locator failed during a first-time lookup. The failure
///   is not cached; the next call for that id retries.
pub trait ScopeRegistry: Send + Sync {
    /// Resolve the scope implementation for `id`, if one is bound
    fn find_scope(&self, id: &ScopeId) -> Result<Option<Arc<dyn CustomScope>>>;
}
