//! Tests for the reference locators and the in-memory scope

use beanscope_domain::key::{BeanIdentifier, ScopeId};
use beanscope_domain::ports::{BeanLocator, CustomScope};
use beanscope_domain::qualifier::Qualifier;
use beanscope_infrastructure::locators::{FixedBeanLocator, NullBeanLocator};
use beanscope_infrastructure::scopes::InMemoryScope;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};

#[test]
fn test_null_locator_always_answers_absent() {
    let locator = NullBeanLocator::new();

    let by_id = Qualifier::by_scope_id(ScopeId::new("request"));
    let by_name = Qualifier::by_name("request");

    assert!(locator.find_scope(&by_id).unwrap().is_none());
    assert!(locator.find_scope(&by_name).unwrap().is_none());
}

#[test]
fn test_fixed_locator_answers_by_scope_id() {
    let scope: Arc<dyn CustomScope> = Arc::new(InMemoryScope::new(ScopeId::new("request")));
    let locator = FixedBeanLocator::builder().scope(scope.clone()).build();

    let hit = locator
        .find_scope(&Qualifier::by_scope_id(ScopeId::new("request")))
        .unwrap();
    let miss = locator
        .find_scope(&Qualifier::by_scope_id(ScopeId::new("session")))
        .unwrap();

    assert!(Arc::ptr_eq(&hit.unwrap(), &scope));
    assert!(miss.is_none());
    assert_eq!(locator.binding_count(), 1);
}

#[test]
fn test_fixed_locator_answers_by_name() {
    let scope: Arc<dyn CustomScope> = Arc::new(InMemoryScope::new(ScopeId::new("request")));
    let locator = FixedBeanLocator::builder()
        .named_scope("per-request", scope.clone())
        .build();

    let hit = locator
        .find_scope(&Qualifier::by_name("per-request"))
        .unwrap();
    let miss = locator.find_scope(&Qualifier::by_name("unknown")).unwrap();

    assert!(Arc::ptr_eq(&hit.unwrap(), &scope));
    assert!(miss.is_none());
}

#[test]
fn test_fixed_locator_later_binding_replaces_earlier() {
    let first: Arc<dyn CustomScope> = Arc::new(InMemoryScope::new(ScopeId::new("request")));
    let second: Arc<dyn CustomScope> = Arc::new(InMemoryScope::new(ScopeId::new("request")));

    let locator = FixedBeanLocator::builder()
        .scope(first)
        .scope(second.clone())
        .build();

    let resolved = locator
        .find_scope(&Qualifier::by_scope_id(ScopeId::new("request")))
        .unwrap()
        .unwrap();

    assert!(Arc::ptr_eq(&resolved, &second));
    assert_eq!(locator.binding_count(), 1);
}

#[test]
fn test_in_memory_scope_shares_one_instance_per_identifier() {
    let scope = InMemoryScope::new(ScopeId::new("request"));
    let ident = BeanIdentifier::new("connection-pool");

    let first = scope.get_or_create(&ident, &|| Arc::new(42_u32));
    let second = scope.get_or_create(&ident, &|| Arc::new(7_u32));

    // The second factory never ran; both callers share the first instance
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first.downcast::<u32>().unwrap(), 42);
    assert_eq!(scope.instance_count(), 1);
}

#[test]
fn test_in_memory_scope_remove() {
    let scope = InMemoryScope::new(ScopeId::new("request"));
    let ident = BeanIdentifier::new("connection-pool");

    scope.get_or_create(&ident, &|| Arc::new(42_u32));
    assert!(scope.contains(&ident));

    let removed = scope.remove(&ident);
    assert!(removed.is_some());
    assert!(!scope.contains(&ident));
    assert!(scope.remove(&ident).is_none());
}

#[test]
fn test_in_memory_scope_clear() {
    let scope = InMemoryScope::new(ScopeId::new("request"));

    scope.get_or_create(&BeanIdentifier::new("a"), &|| Arc::new(1_u32));
    scope.get_or_create(&BeanIdentifier::new("b"), &|| Arc::new(2_u32));
    assert_eq!(scope.instance_count(), 2);

    scope.clear();
    assert_eq!(scope.instance_count(), 0);
}

#[test]
fn test_in_memory_scope_concurrent_creation_runs_factory_once() {
    const CALLERS: usize = 8;

    let scope = InMemoryScope::new(ScopeId::new("request"));
    let ident = BeanIdentifier::new("connection-pool");
    let factory_runs = AtomicUsize::new(0);
    let barrier = Barrier::new(CALLERS);

    std::thread::scope(|s| {
        let workers: Vec<_> = (0..CALLERS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    scope.get_or_create(&ident, &|| {
                        factory_runs.fetch_add(1, Ordering::SeqCst);
                        Arc::new(42_u32)
                    })
                })
            })
            .collect();

        let instances: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();
        for pair in instances.windows(2) {
            assert!(Arc::ptr_eq(&pair[0], &pair[1]));
        }
    });

    assert_eq!(factory_runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_in_memory_scope_reports_its_scope_id() {
    let scope = InMemoryScope::new(ScopeId::new("request"));
    assert_eq!(scope.scope_id(), &ScopeId::new("request"));
}
