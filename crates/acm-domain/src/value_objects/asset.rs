//! In-memory asset

use async_trait::async_trait;

use crate::error::Result;
use crate::ports::Asset;

/// Asset whose payload is already held in memory
#[derive(Debug, Clone, Default)]
pub struct StringAsset {
    content: Vec<u8>,
    mime_type: Option<String>,
    source_path: Option<String>,
    last_modified: Option<u64>,
}

impl StringAsset {
    /// Create an asset from its payload
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set the content type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Set the source path
    pub fn with_source_path(mut self, source_path: impl Into<String>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Set the modification time (seconds since the Unix epoch)
    pub fn with_last_modified(mut self, last_modified: u64) -> Self {
        self.last_modified = Some(last_modified);
        self
    }
}

#[async_trait]
impl Asset for StringAsset {
    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    fn last_modified(&self) -> Option<u64> {
        self.last_modified
    }

    async fn dump(&self) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }
}
