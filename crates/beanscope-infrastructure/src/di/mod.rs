//! Dependency Injection Wiring
//!
//! The composition root: constructs the registry and hands it out as an
//! owned instance. There is deliberately no ambient/static registry -
//! callers receive the context and pass references down, which keeps the
//! cache testable in isolation and lets independent contexts coexist.
//!
//! **ARCHITECTURE**: This module contains ONLY wiring logic. Resolution
//! and caching behavior live in [`crate::registry`].

pub mod bootstrap;

pub use bootstrap::{AppContext, bootstrap, bootstrap_from_env};
