//! # Asset Cache Manager - Domain Layer
//!
//! Core types shared by every layer of the asset cache manager:
//!
//! - **ports**: `Asset`, `CacheBackend` and `ServiceRegistry` contracts
//! - **value_objects**: cache entries, provider references, the config map
//! - **error**: the `Error` enum and `Result` alias
//! - **constants**: canonical cache backend identifiers
//!
//! The domain layer has no knowledge of how backends are constructed or
//! how configuration is loaded; those live in `acm-application` and
//! `acm-infrastructure`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Asset, CacheBackend, ServiceRegistry};
pub use value_objects::{
    CacheConfigMap, CacheEntry, CacheFactory, CacheOptions, ProviderReference, StringAsset,
};
