//! Lookup qualifiers
//!
//! A qualifier narrows which candidate implementation a [`BeanLocator`]
//! should answer with. The registry always queries with an exact scope-id
//! qualifier; name-based qualifiers exist for locators that are assembled
//! from configuration.
//!
//! [`BeanLocator`]: crate::ports::BeanLocator

use crate::key::ScopeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Criteria for selecting a scope implementation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualifier {
    /// Match the implementation bound to exactly this scope id
    ByScopeId(ScopeId),
    /// Match the implementation registered under this name
    ByName(String),
}

impl Qualifier {
    /// Qualifier matching the implementation bound to `id`
    pub fn by_scope_id(id: ScopeId) -> Self {
        Self::ByScopeId(id)
    }

    /// Qualifier matching the implementation registered under `name`
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    /// The scope id this qualifier selects on, if any
    pub fn scope_id(&self) -> Option<&ScopeId> {
        match self {
            Self::ByScopeId(id) => Some(id),
            Self::ByName(_) => None,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByScopeId(id) => write!(f, "scope-id:{}", id),
            Self::ByName(name) => write!(f, "name:{}", name),
        }
    }
}
