//! Bean Locator Port
//!
//! The external collaborator capable of locating a scope implementation
//! matching a qualifier. How it finds one (a dependency graph, a static
//! table, a network call) is its own concern; the registry only sees the
//! zero-or-one answer.

use crate::error::Result;
use crate::ports::scope::CustomScope;
use crate::qualifier::Qualifier;
use std::sync::Arc;

/// Bean Locator Port
///
/// # Contract
///
/// - `Ok(None)` means no implementation matches the qualifier. This is a
///   clean, stable answer, not a failure.
/// - `Ok(Some(_))` carries the single matching implementation. If more
///   than one candidate could match, the locator must collapse or reject
///   the ambiguity itself before answering.
/// - `Err(_)` is the locator's own failure signal (unavailable backend,
///   broken wiring). Callers propagate it; the registry never caches it.
/// - Implementations must not call back into a [`ScopeRegistry`] that is
///   mid-resolution: the registry performs lookups while holding a cache
///   lock for the key being resolved.
///
/// [`ScopeRegistry`]: crate::ports::ScopeRegistry
pub trait BeanLocator: Send + Sync {
    /// Locate the scope implementation matching `qualifier`
    fn find_scope(&self, qualifier: &Qualifier) -> Result<Option<Arc<dyn CustomScope>>>;
}
