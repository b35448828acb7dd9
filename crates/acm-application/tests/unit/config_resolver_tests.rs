//! Cache entry selection tests

use acm_application::services::resolve_entry;
use acm_domain::value_objects::{CacheConfigMap, CacheEntry, ProviderReference};

fn name_of(entry: &CacheEntry) -> &str {
    match entry.provider() {
        Some(ProviderReference::RegistryKey(name) | ProviderReference::ClassIdentifier(name)) => {
            name
        }
        _ => panic!("expected a named provider"),
    }
}

#[test]
fn test_no_entries_resolves_to_none() {
    assert!(resolve_entry("img/a.png", &CacheConfigMap::new()).is_none());
}

#[test]
fn test_path_entry_wins_over_default() {
    let config = CacheConfigMap::new()
        .with_default(CacheEntry::registry_key("Filesystem").with_dir("/tmp/default"))
        .with_entry("img/a.png", CacheEntry::registry_key("FilePath"));

    let entry = resolve_entry("img/a.png", &config).unwrap();
    assert_eq!(name_of(entry), "FilePath");
    // options are never merged from the default entry
    assert_eq!(entry.options.dir(), "");
}

#[test]
fn test_default_used_when_path_missing() {
    let config = CacheConfigMap::new()
        .with_default(CacheEntry::registry_key("FilePath").with_dir("/tmp/c"))
        .with_entry("img/b.png", CacheEntry::registry_key("Memory"));

    let entry = resolve_entry("img/a.png", &config).unwrap();
    assert_eq!(name_of(entry), "FilePath");
    assert_eq!(entry.options.dir(), "/tmp/c");
}

#[test]
fn test_default_used_when_path_entry_has_no_cache() {
    let config = CacheConfigMap::new()
        .with_default(CacheEntry::registry_key("Filesystem").with_dir("/tmp/default"))
        .with_entry("img/a.png", CacheEntry::default().with_dir("/tmp/path-only"));

    let entry = resolve_entry("img/a.png", &config).unwrap();
    assert_eq!(name_of(entry), "Filesystem");
    assert_eq!(entry.options.dir(), "/tmp/default");
}

#[test]
fn test_empty_default_resolves_to_none() {
    let config = CacheConfigMap::new()
        .with_default(CacheEntry::registry_key(""))
        .with_entry("img/a.png", CacheEntry::default());

    assert!(resolve_entry("img/a.png", &config).is_none());
    assert!(resolve_entry("img/b.png", &config).is_none());
}

#[test]
fn test_lookup_is_by_exact_path() {
    let config = CacheConfigMap::new().with_entry("img/a.png", CacheEntry::registry_key("Null"));

    assert!(resolve_entry("img/a.png", &config).is_some());
    assert!(resolve_entry("/img/a.png", &config).is_none());
    assert!(resolve_entry("img/A.png", &config).is_none());
}
