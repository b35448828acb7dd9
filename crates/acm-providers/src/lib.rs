//! # Asset Cache Manager - Cache Backends
//!
//! Every backend implements the `CacheBackend` port from `acm-domain`
//! and registers itself into the `CACHE_BACKENDS` table of
//! `acm-application` so it can be constructed by canonical identifier.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! acm-providers = { version = "0.1", default-features = false }
//! ```
//!
//! `cache-memory` (default) enables the Moka-backed [`cache::MemoryCache`].

pub use acm_domain::error::{Error, Result};
pub use acm_domain::ports::CacheBackend;

/// Provider-specific constants
pub mod constants;

/// Cache backend implementations
pub mod cache;
