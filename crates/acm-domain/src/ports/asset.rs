//! Asset Port
//!
//! The readable artifact handed in by the asset-serving pipeline. The
//! cache manager never mutates an asset; it only optionally wraps it.

use crate::error::Result;
use async_trait::async_trait;

/// Readable asset with content-type metadata
#[async_trait]
pub trait Asset: Send + Sync + std::fmt::Debug {
    /// Content type reported to downstream consumers (e.g. `text/css`)
    fn mime_type(&self) -> Option<&str>;

    /// Logical path of the asset's source, when it has one
    fn source_path(&self) -> Option<&str>;

    /// Last modification time as seconds since the Unix epoch
    fn last_modified(&self) -> Option<u64>;

    /// Produce the asset's payload
    async fn dump(&self) -> Result<Vec<u8>>;
}
