//! Filesystem cache backend
//!
//! Stores every key as a file directly under a cache directory. The
//! directory is created on first write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use acm_domain::error::{Error, Result};
use acm_domain::ports::CacheBackend;
use async_trait::async_trait;
use tokio::fs;
use tracing::trace;

/// Key-indexed filesystem cache
#[derive(Debug, Clone)]
pub struct FilesystemCache {
    dir: PathBuf,
}

impl FilesystemCache {
    /// Create a cache rooted at `dir`
    ///
    /// # Errors
    /// `Error::Config` when `dir` is empty.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(Error::config(
                "Filesystem cache requires a non-empty options.dir",
            ));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Directory holding cached files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(Error::invalid_argument(format!(
                "Invalid filesystem cache key '{key}'"
            )));
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl CacheBackend for FilesystemCache {
    async fn has(&self, key: &str) -> Result<bool> {
        Ok(fs::try_exists(self.file_for(key)?).await?)
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let file = self.file_for(key)?;
        match fs::read(&file).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::not_found(format!("cache file {}", file.display())))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let file = self.file_for(key)?;
        fs::create_dir_all(&self.dir).await?;
        fs::write(&file, value).await?;
        trace!(file = %file.display(), bytes = value.len(), "Stored cache file");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.file_for(key)?).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use acm_application::registry::{CACHE_BACKENDS, CacheBackendArgs, CacheBackendEntry};
use acm_domain::constants::FILESYSTEM_CACHE;

#[linkme::distributed_slice(CACHE_BACKENDS)]
static FILESYSTEM_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: FILESYSTEM_CACHE,
    description: "One file per cache key under options.dir",
    factory: |args: &CacheBackendArgs| Ok(std::sync::Arc::new(FilesystemCache::new(&args.dir)?)),
};
