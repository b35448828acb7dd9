//! Cache entry selection
//!
//! Chooses the single configuration entry that applies to an asset path.

use acm_domain::value_objects::{CacheConfigMap, CacheEntry};

/// Select the cache entry for `path`
///
/// Precedence: the entry stored under the exact path, then the `default`
/// entry. Entries without a usable `cache` reference are skipped. The
/// chosen entry is returned whole; options are never merged between the
/// path entry and the default entry.
pub fn resolve_entry<'a>(path: &str, config: &'a CacheConfigMap) -> Option<&'a CacheEntry> {
    config
        .get(path)
        .filter(|entry| entry.is_usable())
        .or_else(|| config.default_entry().filter(|entry| entry.is_usable()))
}
