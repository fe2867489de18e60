//! Reference bean locator implementations
//!
//! The registry treats the locator as an external capability; the
//! implementations here cover the two cases a composition root needs
//! locally: answering nothing (null-provider default) and answering from a
//! fixed table. Anything cleverer - dependency-graph resolution, remote
//! lookup - lives behind the same port in other systems.

pub mod fixed;
pub mod null;

pub use fixed::{FixedBeanLocator, FixedBeanLocatorBuilder};
pub use null::NullBeanLocator;
