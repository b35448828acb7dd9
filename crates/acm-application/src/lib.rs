//! Application Layer - Asset Cache Manager
//!
//! Decides which cache backend, if any, wraps an asset before it is
//! served.
//!
//! ## Architecture
//!
//! - `services`: entry selection, provider resolution, legacy name
//!   mapping, the cache manager and the cached asset decorator
//! - `registry`: the link-time table of constructible backends
//!
//! ## Dependencies
//!
//! This crate depends only on `acm-domain` and pure Rust libraries.
//! Backends live in `acm-providers` and register into
//! [`registry::CACHE_BACKENDS`].

pub mod registry;
pub mod services;

pub use registry::{CacheBackendArgs, construct_cache_backend, list_cache_backends};
pub use services::*;
