//! Service Registry Port
//!
//! Read-only view of the application's shared service registry. The
//! registry is owned by the application; the cache manager only asks
//! whether a name is known and borrows the registered instance.

use std::sync::Arc;

use super::cache::CacheBackend;

/// Shared lookup of named cache backend services
pub trait ServiceRegistry: Send + Sync {
    /// True when a service is registered under `name`
    fn has(&self, name: &str) -> bool;

    /// The shared instance registered under `name`
    fn get(&self, name: &str) -> Option<Arc<dyn CacheBackend>>;
}
