//! # Asset Cache Manager - Infrastructure Layer
//!
//! Cross-cutting technical concerns around the cache resolution core:
//!
//! - [`config`]: `AppConfig` loading with Figment (TOML + `ACM__` env vars)
//! - [`logging`]: tracing subscriber setup
//! - [`registry`]: the in-memory service registry
//! - [`bootstrap`]: wiring config and registry into an `AssetCacheManager`
//! - [`error_ext`]: context helpers for foreign errors
//!
//! Depends on `acm-providers` so every cache backend is registered in
//! the construction table of any binary linking this crate.

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod registry;

// Force linkme registration of all backends from acm-providers
extern crate acm_providers;

pub use bootstrap::{build_cache_manager, load_cache_manager};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
pub use registry::InMemoryServiceRegistry;
