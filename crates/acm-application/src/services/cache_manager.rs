//! Asset Cache Manager
//!
//! Entry point of the cache resolution core: picks the configuration
//! entry for a path, resolves its provider and wraps the asset.
//!
//! ```text
//! set_cache(path, asset)
//!   → resolve_entry(path, config)          path entry, else default, else none
//!   → ProviderResolver::obtain(entry, path) registry, factory or construction
//!   → AssetCache::new(asset, backend)       only when a backend was produced
//! ```

use std::sync::Arc;

use acm_domain::error::Result;
use acm_domain::ports::{Asset, CacheBackend, ServiceRegistry};
use acm_domain::value_objects::CacheConfigMap;
use tracing::debug;

use super::asset_cache::AssetCache;
use super::config_resolver::resolve_entry;
use super::provider_resolver::ProviderResolver;

/// Sets the configured cache (if any) on assets
///
/// Holds the read-only configuration map and the injected registry.
/// Calls for different paths are independent.
#[derive(Debug, Clone)]
pub struct AssetCacheManager {
    resolver: ProviderResolver,
    config: Arc<CacheConfigMap>,
}

impl AssetCacheManager {
    /// Create a manager over a registry and configuration map
    pub fn new(registry: Arc<dyn ServiceRegistry>, config: Arc<CacheConfigMap>) -> Self {
        Self {
            resolver: ProviderResolver::new(registry),
            config,
        }
    }

    /// The configuration map in use
    pub fn config(&self) -> &CacheConfigMap {
        &self.config
    }

    /// Resolve the backend that applies to `path`, if any
    pub fn provider_for(&self, path: &str) -> Result<Option<Arc<dyn CacheBackend>>> {
        match resolve_entry(path, &self.config) {
            Some(entry) => self.resolver.obtain(entry, path),
            None => Ok(None),
        }
    }

    /// Set the cache (if any) on the asset
    ///
    /// # Returns
    /// The same `Arc` when no backend applies, otherwise a new
    /// [`AssetCache`] wrapping `asset`. The input asset is never modified.
    pub fn set_cache(&self, path: &str, asset: Arc<dyn Asset>) -> Result<Arc<dyn Asset>> {
        let Some(backend) = self.provider_for(path)? else {
            debug!(path, "No cache configured for asset");
            return Ok(asset);
        };

        debug!(path, provider = backend.provider_name(), "Wrapping asset with cache");
        Ok(Arc::new(AssetCache::new(asset, backend)))
    }
}
