//! Value objects for cache configuration and assets

/// In-memory asset implementation
pub mod asset;
/// Configuration entries and the configuration map
pub mod entry;
/// Provider references and factories
pub mod provider;

pub use asset::StringAsset;
pub use entry::{CacheConfigMap, CacheEntry, CacheOptions};
pub use provider::{CacheFactory, CacheFactoryFn, ProviderReference};
