//! Bootstrap
//!
//! Wires the loaded configuration and the service registry into an
//! `AssetCacheManager`.
//!
//! ```text
//! ConfigLoader::load → AppConfig ─┐
//!                                 ├─► AssetCacheManager
//! InMemoryServiceRegistry ────────┘
//! ```

use std::sync::Arc;

use acm_application::registry::list_cache_backends;
use acm_application::services::AssetCacheManager;
use acm_domain::error::Result;
use acm_domain::ports::ServiceRegistry;
use tracing::info;

use crate::config::{AppConfig, ConfigLoader};

/// Build a cache manager over an already loaded configuration
pub fn build_cache_manager(
    config: &AppConfig,
    registry: Arc<dyn ServiceRegistry>,
) -> AssetCacheManager {
    info!(
        entries = config.asset_cache.len(),
        backends = list_cache_backends().len(),
        "Asset cache manager ready"
    );
    AssetCacheManager::new(registry, Arc::new(config.asset_cache.clone()))
}

/// Load configuration with `loader` and build a cache manager from it
pub fn load_cache_manager(
    loader: &ConfigLoader,
    registry: Arc<dyn ServiceRegistry>,
) -> Result<(AppConfig, AssetCacheManager)> {
    let config = loader.load()?;
    let manager = build_cache_manager(&config, registry);
    Ok((config, manager))
}
