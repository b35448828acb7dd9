//! File path cache backend
//!
//! Keeps exactly one file per asset: the cached content of `img/a.png`
//! lives at `<dir>/img/a.png` whatever key the caller uses. Writes go to
//! a temporary sibling first and are renamed into place.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use acm_domain::error::{Error, Result};
use acm_domain::ports::CacheBackend;
use async_trait::async_trait;
use tokio::fs;
use tracing::trace;

/// Path-indexed file cache
#[derive(Debug, Clone)]
pub struct FilePathCache {
    dir: PathBuf,
    filename: String,
    cached_file: PathBuf,
}

impl FilePathCache {
    /// Create a cache for `filename` stored under `dir`
    ///
    /// # Errors
    /// * `Error::Config` when `dir` is empty
    /// * `Error::InvalidArgument` when `filename` escapes `dir`
    pub fn new(dir: impl AsRef<Path>, filename: impl Into<String>) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(Error::config("FilePath cache requires a non-empty options.dir"));
        }

        let filename = filename.into();
        let relative = Path::new(filename.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(Error::invalid_argument(format!(
                "Asset path '{filename}' cannot be cached under {}",
                dir.display()
            )));
        }

        Ok(Self {
            cached_file: dir.join(relative),
            dir: dir.to_path_buf(),
            filename,
        })
    }

    /// Cache root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Asset path this cache was built for
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Location of the cached file
    pub fn cached_file(&self) -> &Path {
        &self.cached_file
    }

    fn temp_file(&self) -> PathBuf {
        let name = self
            .cached_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.cached_file
            .with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4().simple()))
    }
}

#[async_trait]
impl CacheBackend for FilePathCache {
    async fn has(&self, _key: &str) -> Result<bool> {
        Ok(fs::try_exists(&self.cached_file).await?)
    }

    async fn get(&self, _key: &str) -> Result<Vec<u8>> {
        match fs::read(&self.cached_file).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::not_found(format!(
                "cache file {}",
                self.cached_file.display()
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, _key: &str, value: &[u8]) -> Result<()> {
        if let Some(parent) = self.cached_file.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::cache(format!("Could not create directory {}: {e}", parent.display()))
            })?;
        }

        let temp = self.temp_file();
        if let Err(e) = fs::write(&temp, value).await {
            return Err(Error::cache(format!(
                "Could not write temporary file {}: {e}",
                temp.display()
            )));
        }
        if let Err(e) = fs::rename(&temp, &self.cached_file).await {
            let _ = fs::remove_file(&temp).await;
            return Err(Error::cache(format!(
                "Could not move cache file into place at {}: {e}",
                self.cached_file.display()
            )));
        }

        trace!(file = %self.cached_file.display(), bytes = value.len(), "Stored cache file");
        Ok(())
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        fs::remove_file(&self.cached_file).await.map_err(|e| {
            Error::cache(format!(
                "Could not remove file {}: {e}",
                self.cached_file.display()
            ))
        })
    }

    fn provider_name(&self) -> &str {
        "file_path"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use acm_application::registry::{CACHE_BACKENDS, CacheBackendArgs, CacheBackendEntry};
use acm_domain::constants::FILE_PATH_CACHE;

#[linkme::distributed_slice(CACHE_BACKENDS)]
static FILE_PATH_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: FILE_PATH_CACHE,
    description: "One file per asset path under options.dir",
    factory: |args: &CacheBackendArgs| {
        Ok(std::sync::Arc::new(FilePathCache::new(
            &args.dir,
            args.path.clone(),
        )?))
    },
};
