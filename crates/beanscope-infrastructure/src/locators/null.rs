//! Null bean locator

use beanscope_domain::error::Result;
use beanscope_domain::ports::{BeanLocator, CustomScope};
use beanscope_domain::qualifier::Qualifier;
use std::sync::Arc;

/// Locator that never finds anything
///
/// Default collaborator for wiring and isolated tests: every query is a
/// clean "no match", never an error.
#[derive(Debug, Default, Clone)]
pub struct NullBeanLocator;

impl NullBeanLocator {
    /// Create a new null locator
    pub fn new() -> Self {
        Self
    }
}

impl BeanLocator for NullBeanLocator {
    fn find_scope(&self, _qualifier: &Qualifier) -> Result<Option<Arc<dyn CustomScope>>> {
        Ok(None)
    }
}
