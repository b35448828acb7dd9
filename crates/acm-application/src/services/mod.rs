//! Cache resolution services
//!
//! | Service | Role |
//! |---------|------|
//! | [`resolve_entry`] | picks the configuration entry for a path |
//! | [`normalize_identifier`] | maps legacy short names to canonical identifiers |
//! | [`ProviderResolver`] | turns an entry into a backend |
//! | [`AssetCacheManager`] | orchestrates the above and wraps the asset |
//! | [`AssetCache`] | the cached asset decorator |

pub mod asset_cache;
pub mod cache_manager;
pub mod config_resolver;
pub mod legacy_names;
pub mod provider_resolver;

pub use asset_cache::AssetCache;
pub use cache_manager::AssetCacheManager;
pub use config_resolver::resolve_entry;
pub use legacy_names::normalize_identifier;
pub use provider_resolver::ProviderResolver;
