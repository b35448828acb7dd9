//! Domain Port Interfaces
//!
//! Boundary contracts between the cache resolution core and its
//! collaborators:
//!
//! - **asset** - the artifact being served
//! - **cache** - storage backends wrapped around assets
//! - **registry** - the shared, externally owned service registry

/// Asset port
pub mod asset;
/// Cache backend port
pub mod cache;
/// Service registry port
pub mod registry;

pub use asset::Asset;
pub use cache::CacheBackend;
pub use registry::ServiceRegistry;
