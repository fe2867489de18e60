//! Tests for the composition root wiring

use beanscope_domain::key::ScopeId;
use beanscope_domain::ports::{CustomScope, ScopeRegistry};
use beanscope_infrastructure::config::AppConfig;
use beanscope_infrastructure::di::{bootstrap, bootstrap_from_env};
use beanscope_infrastructure::locators::{FixedBeanLocator, NullBeanLocator};
use beanscope_infrastructure::scopes::InMemoryScope;
use std::sync::Arc;

#[test]
fn test_bootstrap_wires_registry_to_locator() {
    let scope: Arc<dyn CustomScope> = Arc::new(InMemoryScope::new(ScopeId::new("request")));
    let locator = Arc::new(FixedBeanLocator::builder().scope(scope.clone()).build());

    let ctx = bootstrap(AppConfig::default(), locator).unwrap();

    let resolved = ctx
        .registry
        .find_scope(&ScopeId::new("request"))
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &scope));
}

#[test]
fn test_bootstrap_applies_registry_config() {
    let mut config = AppConfig::default();
    config.registry.initial_capacity = 16;

    let ctx = bootstrap(config, Arc::new(NullBeanLocator::new())).unwrap();

    assert_eq!(ctx.config.registry.initial_capacity, 16);
    assert_eq!(ctx.registry.cached_len(), 0);
}

#[test]
fn test_independent_contexts_have_independent_caches() {
    let scope: Arc<dyn CustomScope> = Arc::new(InMemoryScope::new(ScopeId::new("request")));
    let locator = Arc::new(FixedBeanLocator::builder().scope(scope).build());

    let first = bootstrap(AppConfig::default(), locator.clone()).unwrap();
    let second = bootstrap(AppConfig::default(), locator).unwrap();

    first
        .registry
        .find_scope(&ScopeId::new("request"))
        .unwrap();

    assert!(first.registry.is_cached(&ScopeId::new("request")));
    assert!(!second.registry.is_cached(&ScopeId::new("request")));
}

#[test]
fn test_bootstrap_from_env_uses_layered_defaults() {
    let ctx = bootstrap_from_env(Arc::new(NullBeanLocator::new())).unwrap();

    // No config file in the test environment, so defaults apply
    assert_eq!(ctx.registry.cached_len(), 0);
    assert!(
        ctx.registry
            .find_scope(&ScopeId::new("request"))
            .unwrap()
            .is_none()
    );
}
