//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "acm.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "acm";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ACM";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "ACM_LOG";

/// Default file stem for rolling log files
pub const LOG_FILE_STEM: &str = "acm";
