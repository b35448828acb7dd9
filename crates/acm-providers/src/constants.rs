//! Provider-specific constants

/// Default maximum number of entries held by a memory cache
pub const MEMORY_CACHE_DEFAULT_CAPACITY: u64 = 10_000;
