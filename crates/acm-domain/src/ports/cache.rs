//! Cache Backend Port
//!
//! Port for the storage behind a cached asset. Backends are obtained
//! either from the shared service registry (borrowed, shared between
//! calls) or constructed fresh per resolution through the backend
//! registration table.

use crate::error::Result;
use async_trait::async_trait;

/// Cache Backend Port
///
/// Byte-oriented key/value storage used by the cached-asset decorator.
///
/// # Implementations
///
/// - **Filesystem**: one file per key under a directory
/// - **FilePath**: one file per asset path, key ignored
/// - **Memory**: in-process cache for registry-shared instances
/// - **Null**: stores nothing
///
/// # Example
///
/// ```ignore
/// if cache.has("styles.dump").await? {
///     let bytes = cache.get("styles.dump").await?;
/// } else {
///     cache.set("styles.dump", &bytes).await?;
/// }
/// ```
#[async_trait]
pub trait CacheBackend: Send + Sync + std::fmt::Debug {
    /// Check if a key exists in the cache
    async fn has(&self, key: &str) -> Result<bool>;

    /// Get the value stored under a key
    ///
    /// # Returns
    /// The stored bytes, or `Error::NotFound` when nothing is stored
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove the value stored under a key
    async fn remove(&self, key: &str) -> Result<()>;

    /// Get the name/identifier of this backend implementation
    fn provider_name(&self) -> &str;
}
