//! Tests for scope identifier and qualifier value types

use beanscope_domain::{BeanIdentifier, Qualifier, ScopeId};
use std::collections::HashSet;

#[test]
fn test_scope_id_value_equality() {
    let a = ScopeId::new("request");
    let b = ScopeId::new("request");
    let c = ScopeId::new("session");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_scope_id_stable_hash() {
    let mut set = HashSet::new();
    set.insert(ScopeId::new("request"));
    set.insert(ScopeId::new("request"));
    set.insert(ScopeId::new("session"));

    assert_eq!(set.len(), 2);
    assert!(set.contains(&ScopeId::new("request")));
}

#[test]
fn test_scope_id_display_and_accessors() {
    let id = ScopeId::new("request");
    assert_eq!(id.as_str(), "request");
    assert_eq!(format!("{}", id), "request");
}

#[test]
fn test_scope_id_from_conversions() {
    let from_str: ScopeId = "request".into();
    let from_string: ScopeId = String::from("request").into();
    assert_eq!(from_str, from_string);
}

#[test]
fn test_bean_identifier_value_equality() {
    let a = BeanIdentifier::new("connection-pool");
    let b = BeanIdentifier::new("connection-pool");
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "connection-pool");
    assert_eq!(format!("{}", a), "connection-pool");
}

#[test]
fn test_qualifier_by_scope_id() {
    let id = ScopeId::new("request");
    let qualifier = Qualifier::by_scope_id(id.clone());

    assert_eq!(qualifier.scope_id(), Some(&id));
    assert_eq!(format!("{}", qualifier), "scope-id:request");
}

#[test]
fn test_qualifier_by_name() {
    let qualifier = Qualifier::by_name("thread-local");

    assert_eq!(qualifier.scope_id(), None);
    assert_eq!(format!("{}", qualifier), "name:thread-local");
}

#[test]
fn test_qualifier_equality() {
    let a = Qualifier::by_scope_id(ScopeId::new("request"));
    let b = Qualifier::by_scope_id(ScopeId::new("request"));
    let c = Qualifier::by_name("request");

    assert_eq!(a, b);
    assert_ne!(a, c);
}
