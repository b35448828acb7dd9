//! Moka in-memory cache backend
//!
//! Suited to instances registered once as named services and shared
//! across requests. Constructed directly it only lives as long as the
//! asset wrapping it.

use std::time::Duration;

use acm_domain::error::{Error, Result};
use acm_domain::ports::CacheBackend;
use async_trait::async_trait;
use moka::future::Cache;

use crate::constants::MEMORY_CACHE_DEFAULT_CAPACITY;

/// Moka-based in-memory cache backend
#[derive(Clone)]
pub struct MemoryCache {
    cache: Cache<String, Vec<u8>>,
    max_entries: u64,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    /// Create a memory cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_CACHE_DEFAULT_CAPACITY)
    }

    /// Create a memory cache holding at most `max_entries` entries
    pub fn with_capacity(max_entries: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_entries).build();
        Self { cache, max_entries }
    }

    /// Create a memory cache whose entries expire after `time_to_live`
    pub fn with_config(max_entries: u64, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(time_to_live)
            .build();
        Self { cache, max_entries }
    }

    /// Maximum number of entries
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn has(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.cache
            .get(key)
            .await
            .ok_or_else(|| Error::not_found(format!("memory cache key {key}")))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.cache.insert(key.to_string(), value.to_vec()).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("max_entries", &self.max_entries)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use acm_application::registry::{CACHE_BACKENDS, CacheBackendArgs, CacheBackendEntry};
use acm_domain::constants::MEMORY_CACHE;

#[linkme::distributed_slice(CACHE_BACKENDS)]
static MEMORY_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: MEMORY_CACHE,
    description: "Moka in-memory cache",
    factory: |_args: &CacheBackendArgs| Ok(std::sync::Arc::new(MemoryCache::new())),
};
