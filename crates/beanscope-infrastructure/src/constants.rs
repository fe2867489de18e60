//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "beanscope.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "beanscope";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BEANSCOPE";

// ============================================================================
// REGISTRY CONSTANTS
// ============================================================================

/// Default initial capacity of the scope cache
///
/// Most processes bind very few custom scopes; the map grows on demand.
pub const DEFAULT_REGISTRY_CAPACITY: usize = 1;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "BEANSCOPE_LOG";

/// Maximum log file size before rotation (10MB)
pub const LOG_ROTATION_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
