//! Domain layer constants
//!
//! Canonical identifiers of the cache backends known to the registration
//! table, plus the reserved configuration keys.

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================

/// Configuration map key consulted when no path-specific entry applies
pub const DEFAULT_ENTRY_KEY: &str = "default";

/// Suffix appended to short cache identifiers before alias lookup
pub const CACHE_IDENTIFIER_SUFFIX: &str = "Cache";

// ============================================================================
// CANONICAL BACKEND IDENTIFIERS
// ============================================================================

/// Key-indexed filesystem backend
pub const FILESYSTEM_CACHE: &str = "acm::cache::FilesystemCache";

/// Backend storing one file per asset path
pub const FILE_PATH_CACHE: &str = "acm::cache::FilePathCache";

/// In-process memory backend
pub const MEMORY_CACHE: &str = "acm::cache::MemoryCache";

/// Backend that never stores anything
pub const NULL_CACHE: &str = "acm::cache::NullCache";

// ============================================================================
// CACHE KEYS
// ============================================================================

/// Suffix of keys under which dumped asset content is stored
pub const DUMP_KEY_SUFFIX: &str = ".dump";
