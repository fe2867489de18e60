//! Scope and bean identifier value types
//!
//! Identifiers are plain interned strings with value equality and a stable
//! hash, so the cache layer can key on them without any knowledge of how
//! scope kinds are declared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a scope kind
///
/// Two ids are equal iff they denote the same scope kind. Ids are created
/// by callers and are never owned by the registry.
///
/// # Example
///
/// ```
/// use beanscope_domain::ScopeId;
///
/// let request = ScopeId::new("request");
/// assert_eq!(request, ScopeId::new("request"));
/// assert_ne!(request, ScopeId::new("session"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeId(String);

impl ScopeId {
    /// Create a new scope id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ScopeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier for one bean instance held inside a scope
///
/// A scope maps bean identifiers to live instances; the identifier is the
/// unit of sharing within that scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BeanIdentifier(String);

impl BeanIdentifier {
    /// Create a new bean identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeanIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BeanIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BeanIdentifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}
