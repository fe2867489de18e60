//! # Domain Layer
//!
//! Core types and boundary contracts for the Beanscope scope registry.
//!
//! This layer is pure: no I/O, no concurrency primitives, no knowledge of
//! how scopes are located or cached. It defines the vocabulary
//! ([`ScopeId`], [`BeanIdentifier`], [`Qualifier`]) and the ports that
//! outer layers implement:
//!
//! - [`ScopeRegistry`] - the caller-facing resolution contract
//! - [`BeanLocator`] - the collaborator that performs the actual lookup
//! - [`CustomScope`] - the capability a successful resolution yields

pub mod error;
pub mod key;
pub mod ports;
pub mod qualifier;

pub use error::{Error, Result};
pub use key::{BeanIdentifier, ScopeId};
pub use ports::{BeanLocator, CustomScope, ScopeRegistry};
pub use qualifier::Qualifier;
