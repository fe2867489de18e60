//! Application bootstrap
//!
//! ## Pattern
//!
//! ```text
//! AppConfig + Arc<dyn BeanLocator> → bootstrap → AppContext
//! ```
//!
//! The locator is supplied by the caller because its implementation is an
//! external capability; the null locator is the stand-in when nothing
//! binds custom scopes.

use beanscope_domain::error::Result;
use beanscope_domain::ports::BeanLocator;
use std::sync::Arc;
use tracing::debug;

use crate::config::{AppConfig, ConfigLoader};
use crate::registry::CachingScopeRegistry;

/// Wired application context
///
/// Owns the scope registry for the process. Everything needing scope
/// resolution receives a reference from here.
#[derive(Clone)]
pub struct AppContext {
    /// Active configuration
    pub config: Arc<AppConfig>,
    /// The external bean locator the registry delegates to
    pub locator: Arc<dyn BeanLocator>,
    /// The caching scope registry
    pub registry: Arc<CachingScopeRegistry>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("registry", &self.registry)
            .finish()
    }
}

/// Wire an application context from an explicit configuration
pub fn bootstrap(config: AppConfig, locator: Arc<dyn BeanLocator>) -> Result<AppContext> {
    let config = Arc::new(config);
    let registry = Arc::new(CachingScopeRegistry::from_config(
        locator.clone(),
        &config.registry,
    ));

    debug!(
        initial_capacity = config.registry.initial_capacity,
        "scope registry wired"
    );

    Ok(AppContext {
        config,
        locator,
        registry,
    })
}

/// Wire an application context from layered configuration sources
///
/// Loads configuration through [`ConfigLoader`] (defaults → TOML file →
/// environment), then delegates to [`bootstrap`].
pub fn bootstrap_from_env(locator: Arc<dyn BeanLocator>) -> Result<AppContext> {
    let config = ConfigLoader::new().load()?;
    bootstrap(config, locator)
}
