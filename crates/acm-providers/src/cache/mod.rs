//! Cache Backend Implementations
//!
//! | Backend | Canonical identifier | Description |
//! |---------|----------------------|-------------|
//! | [`FilesystemCache`] | `acm::cache::FilesystemCache` | one file per key |
//! | [`FilePathCache`] | `acm::cache::FilePathCache` | one file per asset path |
//! | [`MemoryCache`] | `acm::cache::MemoryCache` | in-process Moka cache |
//! | [`NullCache`] | `acm::cache::NullCache` | stores nothing |

pub mod file_path;
pub mod filesystem;
#[cfg(feature = "cache-memory")]
pub mod memory;
pub mod null;

pub use file_path::FilePathCache;
pub use filesystem::FilesystemCache;
#[cfg(feature = "cache-memory")]
pub use memory::MemoryCache;
pub use null::NullCache;
