//! Cache Backend Registry
//!
//! Closed table of constructible cache backends. Each backend
//! implementation registers itself with `linkme::distributed_slice`
//! under its canonical identifier; direct construction dispatches over
//! this table instead of instantiating types by name at runtime.

use std::sync::Arc;

use acm_domain::error::{Error, Result};
use acm_domain::ports::CacheBackend;

/// Positional construction arguments shared by every backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheBackendArgs {
    /// Directory from the entry's `options.dir` (empty when unset)
    pub dir: String,
    /// Asset path being resolved
    pub path: String,
}

impl CacheBackendArgs {
    /// Create arguments for a directory and asset path
    pub fn new(dir: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            path: path.into(),
        }
    }
}

/// Registry entry for cache backends
///
/// Each backend implementation registers itself with this entry using
/// `#[linkme::distributed_slice(CACHE_BACKENDS)]`.
pub struct CacheBackendEntry {
    /// Canonical identifier (e.g., "acm::cache::FilePathCache")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(&CacheBackendArgs) -> Result<Arc<dyn CacheBackend>>,
}

/// Backends collected at link time from every crate that registers one
#[linkme::distributed_slice]
pub static CACHE_BACKENDS: [CacheBackendEntry] = [..];

/// Construct the backend registered under a canonical identifier
///
/// # Returns
/// * `Ok(Arc<dyn CacheBackend>)` - freshly constructed backend
/// * `Err(Error::UnknownCacheBackend)` - nothing is registered under `identifier`
pub fn construct_cache_backend(
    identifier: &str,
    args: &CacheBackendArgs,
) -> Result<Arc<dyn CacheBackend>> {
    match CACHE_BACKENDS.iter().find(|entry| entry.name == identifier) {
        Some(entry) => (entry.factory)(args),
        None => Err(Error::UnknownCacheBackend {
            identifier: identifier.to_string(),
            available: CACHE_BACKENDS
                .iter()
                .map(|entry| entry.name.to_string())
                .collect(),
        }),
    }
}

/// List all registered cache backends as `(name, description)` pairs
pub fn list_cache_backends() -> Vec<(&'static str, &'static str)> {
    CACHE_BACKENDS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
