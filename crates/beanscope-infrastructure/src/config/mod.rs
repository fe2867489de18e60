//! Configuration
//!
//! Typed application configuration with layered loading: built-in defaults,
//! an optional TOML file, then environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistryConfig};
