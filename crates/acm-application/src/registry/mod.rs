//! Backend Registration System
//!
//! Uses the `linkme` crate for compile-time registration of cache
//! backends that can be constructed by canonical identifier.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │ 1. Backend defines:  #[linkme::distributed_slice(CACHE_BACKENDS)]│
//! │                      static ENTRY: CacheBackendEntry = ...      │
//! │ 2. Registry declares: pub static CACHE_BACKENDS: [Entry] = [..] │
//! │ 3. Resolver queries:  construct_cache_backend(identifier, args) │
//! └────────────────────────────────────────────────────────────────┘
//! ```

pub mod cache;

pub use cache::{
    CACHE_BACKENDS, CacheBackendArgs, CacheBackendEntry, construct_cache_backend,
    list_cache_backends,
};
