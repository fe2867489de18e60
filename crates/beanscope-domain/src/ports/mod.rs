//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and outer layers. The domain
//! defines the interfaces; infrastructure implements them (Dependency
//! Inversion Principle).
//!
//! ## Organization
//!
//! - **scope** - the capability a successful resolution yields
//! - **locator** - the external service that performs the actual lookup
//! - **registry** - the caller-facing resolution contract

/// Scope capability port
pub mod scope;

/// Bean locator port
pub mod locator;

/// Scope registry port
pub mod registry;

// Re-export commonly used port traits for convenience
pub use locator::BeanLocator;
pub use registry::ScopeRegistry;
pub use scope::CustomScope;
