//! # Beanscope
//!
//! A caching custom scope registry for dependency injection.
//!
//! A scope governs the lifetime and sharing of bean instances
//! (per-request, per-session, ...). Locating the implementation for a
//! scope kind is expensive - it may walk a dependency graph - while scope
//! bindings are static for the process lifetime. Beanscope sits in front
//! of that lookup and memoizes every outcome, including "nothing is
//! bound", so each scope kind is resolved at most once.
//!
//! ## Example
//!
//! ```ignore
//! use beanscope::ScopeId;
//! use beanscope::infrastructure::di::bootstrap;
//! use beanscope::infrastructure::locators::FixedBeanLocator;
//! use beanscope::infrastructure::scopes::InMemoryScope;
//! use std::sync::Arc;
//!
//! let locator = Arc::new(
//!     FixedBeanLocator::builder()
//!         .scope(Arc::new(InMemoryScope::new(ScopeId::new("request"))))
//!         .build(),
//! );
//! let ctx = bootstrap(Default::default(), locator)?;
//! let scope = ctx.registry.find_scope(&ScopeId::new("request"))?;
//! ```
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture principles:
//!
//! - `domain` - identifiers, qualifiers, errors, and the port traits
//! - `infrastructure` - the caching registry, reference locators and
//!   scopes, configuration, logging, and the composition root

/// Domain layer - core types and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use beanscope_domain::*;
}

/// Infrastructure layer - registry, config, and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use beanscope_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registry and composition root for convenience
pub use infrastructure::CachingScopeRegistry;
pub use infrastructure::di::{AppContext, bootstrap, bootstrap_from_env};
