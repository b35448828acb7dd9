//! Configuration management
//!
//! Loads `AppConfig` from defaults, an `acm.toml` file and `ACM__`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig};
