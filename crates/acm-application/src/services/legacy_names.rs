//! Legacy cache name mapping
//!
//! Older configurations name backends by short class names such as
//! `Filesystem` or `FilePathCache`. These are mapped onto canonical
//! identifiers; anything else is passed through untouched and resolved
//! (or rejected) at construction time.

use std::borrow::Cow;

use acm_domain::constants::{
    CACHE_IDENTIFIER_SUFFIX, FILE_PATH_CACHE, FILESYSTEM_CACHE, MEMORY_CACHE, NULL_CACHE,
};

/// Short names (after suffixing) and the canonical identifier they mean
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("FilesystemCache", FILESYSTEM_CACHE),
    ("FilePathCache", FILE_PATH_CACHE),
    ("MemoryCache", MEMORY_CACHE),
    ("ArrayCache", MEMORY_CACHE),
    ("NullCache", NULL_CACHE),
];

/// Map a cache identifier onto its canonical form
///
/// The `Cache` suffix is appended unless already present, and the result
/// is looked up in the alias table. Without a match the identifier is
/// returned exactly as given.
pub fn normalize_identifier(identifier: &str) -> Cow<'_, str> {
    let candidate: Cow<'_, str> = if identifier.ends_with(CACHE_IDENTIFIER_SUFFIX) {
        Cow::Borrowed(identifier)
    } else {
        Cow::Owned(format!("{identifier}{CACHE_IDENTIFIER_SUFFIX}"))
    };

    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == candidate)
        .map_or(Cow::Borrowed(identifier), |(_, canonical)| {
            Cow::Borrowed(*canonical)
        })
}
