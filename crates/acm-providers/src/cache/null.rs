//! Null cache backend
//!
//! Accepts writes and never stores anything. Useful for disabling
//! caching for a path while keeping the decorator in place.

use acm_domain::error::{Error, Result};
use acm_domain::ports::CacheBackend;
use async_trait::async_trait;

/// Cache backend that doesn't store anything
#[derive(Debug, Clone, Default)]
pub struct NullCache;

impl NullCache {
    /// Create a new null cache
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheBackend for NullCache {
    async fn has(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        Err(Error::not_found(format!("null cache key {key}")))
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

use acm_application::registry::{CACHE_BACKENDS, CacheBackendArgs, CacheBackendEntry};
use acm_domain::constants::NULL_CACHE;

#[linkme::distributed_slice(CACHE_BACKENDS)]
static NULL_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: NULL_CACHE,
    description: "No-op cache that stores nothing",
    factory: |_args: &CacheBackendArgs| Ok(std::sync::Arc::new(NullCache::new())),
};
