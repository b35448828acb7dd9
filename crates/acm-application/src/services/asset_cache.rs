//! Cached asset decorator
//!
//! Wraps an asset and a cache backend. Reads go to the backend first and
//! fall back to the wrapped asset, storing what it produced.

use std::sync::Arc;

use acm_domain::constants::DUMP_KEY_SUFFIX;
use acm_domain::error::Result;
use acm_domain::ports::{Asset, CacheBackend};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::trace;

/// Asset decorator backed by a cache
///
/// The content type is copied from the wrapped asset when the decorator
/// is built, so consumers see the same metadata with or without caching.
#[derive(Debug)]
pub struct AssetCache {
    inner: Arc<dyn Asset>,
    backend: Arc<dyn CacheBackend>,
    mime_type: Option<String>,
}

impl AssetCache {
    /// Wrap `inner` with `backend`
    pub fn new(inner: Arc<dyn Asset>, backend: Arc<dyn CacheBackend>) -> Self {
        let mime_type = inner.mime_type().map(str::to_owned);
        Self {
            inner,
            backend,
            mime_type,
        }
    }

    /// The wrapped asset
    pub fn inner(&self) -> &Arc<dyn Asset> {
        &self.inner
    }

    /// The backend storing dumped content
    pub fn backend(&self) -> &Arc<dyn CacheBackend> {
        &self.backend
    }

    /// Key under which the dumped content is stored
    ///
    /// Derived from the source path, modification time and content type,
    /// so a modified asset never reads stale content.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.inner.source_path().unwrap_or_default().as_bytes());
        hasher.update([0u8]);
        hasher.update(
            self.inner
                .last_modified()
                .map(|ts| ts.to_string())
                .unwrap_or_default()
                .as_bytes(),
        );
        hasher.update([0u8]);
        hasher.update(self.mime_type.as_deref().unwrap_or_default().as_bytes());
        format!("{}{DUMP_KEY_SUFFIX}", hex::encode(hasher.finalize()))
    }
}

#[async_trait]
impl Asset for AssetCache {
    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    fn source_path(&self) -> Option<&str> {
        self.inner.source_path()
    }

    fn last_modified(&self) -> Option<u64> {
        self.inner.last_modified()
    }

    async fn dump(&self) -> Result<Vec<u8>> {
        let key = self.cache_key();
        if self.backend.has(&key).await? {
            trace!(key = %key, provider = self.backend.provider_name(), "Asset cache hit");
            return self.backend.get(&key).await;
        }

        trace!(key = %key, provider = self.backend.provider_name(), "Asset cache miss");
        let content = self.inner.dump().await?;
        self.backend.set(&key, &content).await?;
        Ok(content)
    }
}
