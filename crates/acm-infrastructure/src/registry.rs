//! In-memory service registry
//!
//! Named cache backend services shared across requests. Implements the
//! read-only `ServiceRegistry` port consumed by the cache manager and
//! adds the registration side used during bootstrap.

use std::sync::Arc;

use acm_domain::ports::{CacheBackend, ServiceRegistry};
use dashmap::DashMap;
use tracing::debug;

/// Concurrent name → backend registry
#[derive(Debug, Default)]
pub struct InMemoryServiceRegistry {
    services: DashMap<String, Arc<dyn CacheBackend>>,
}

impl InMemoryServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `backend` under `name`, returning any instance it replaces
    pub fn register(
        &self,
        name: impl Into<String>,
        backend: Arc<dyn CacheBackend>,
    ) -> Option<Arc<dyn CacheBackend>> {
        let name = name.into();
        debug!(service = %name, provider = backend.provider_name(), "Registering cache service");
        self.services.insert(name, backend)
    }

    /// Builder-style registration
    pub fn with_service(self, name: impl Into<String>, backend: Arc<dyn CacheBackend>) -> Self {
        self.register(name, backend);
        self
    }

    /// Remove a registered service
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn CacheBackend>> {
        self.services.remove(name).map(|(_, backend)| backend)
    }

    /// Names of all registered services, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.services.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl ServiceRegistry for InMemoryServiceRegistry {
    fn has(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<Arc<dyn CacheBackend>> {
        self.services.get(name).map(|entry| Arc::clone(entry.value()))
    }
}
