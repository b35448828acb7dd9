//! Provider Resolver
//!
//! Turns a cache entry into a concrete backend.
//!
//! ## Resolution order
//!
//! ```text
//! RegistryKey ──registry.has?──yes──► registry.get (shared)
//!      │ no
//!      ▼
//! ClassIdentifier ──normalize_identifier──► CACHE_BACKENDS(dir, path) (fresh)
//!
//! Factory ──invoke(path)──► backend or none
//! ```

use std::sync::Arc;

use acm_domain::error::{Error, Result};
use acm_domain::ports::{CacheBackend, ServiceRegistry};
use acm_domain::value_objects::{CacheEntry, ProviderReference};
use tracing::debug;

use super::legacy_names::normalize_identifier;
use crate::registry::{CacheBackendArgs, construct_cache_backend};

/// Resolves cache entries against the shared registry and the backend table
#[derive(Clone)]
pub struct ProviderResolver {
    registry: Arc<dyn ServiceRegistry>,
}

impl ProviderResolver {
    /// Create a resolver using the given registry
    pub fn new(registry: Arc<dyn ServiceRegistry>) -> Self {
        Self { registry }
    }

    /// Obtain the backend described by `entry` for `path`
    ///
    /// # Returns
    /// * `Ok(Some(backend))` - a backend was produced
    /// * `Ok(None)` - the entry yields no backend; the asset is served uncached
    /// * `Err(_)` - construction or factory failure, never swallowed; also
    ///   `NotFound` when the registry claims a name it cannot return
    pub fn obtain(&self, entry: &CacheEntry, path: &str) -> Result<Option<Arc<dyn CacheBackend>>> {
        let Some(reference) = entry.provider() else {
            return Ok(None);
        };

        let kind = reference.kind();
        match reference {
            ProviderReference::RegistryKey(name) => {
                if self.registry.has(name) {
                    debug!(path, kind, service = %name, "Using registered cache service");
                    // has() and get() must agree on a registered name
                    return self
                        .registry
                        .get(name)
                        .map(Some)
                        .ok_or_else(|| Error::not_found(format!("cache service '{name}'")));
                }
                self.construct(kind, name, entry, path).map(Some)
            }
            ProviderReference::Factory(factory) => {
                debug!(path, kind, "Invoking cache factory");
                factory.invoke(path)
            }
            ProviderReference::ClassIdentifier(identifier) => {
                self.construct(kind, identifier, entry, path).map(Some)
            }
        }
    }

    fn construct(
        &self,
        kind: &str,
        identifier: &str,
        entry: &CacheEntry,
        path: &str,
    ) -> Result<Arc<dyn CacheBackend>> {
        let canonical = normalize_identifier(identifier);
        debug!(path, kind, identifier, canonical = %canonical, "Constructing cache backend");
        construct_cache_backend(&canonical, &CacheBackendArgs::new(entry.options.dir(), path))
    }
}

impl std::fmt::Debug for ProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderResolver").finish()
    }
}
