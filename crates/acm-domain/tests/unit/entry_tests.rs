//! Cache entry and configuration map tests

use acm_domain::constants::DEFAULT_ENTRY_KEY;
use acm_domain::value_objects::{CacheConfigMap, CacheEntry, ProviderReference};

#[test]
fn test_entry_without_cache_is_not_usable() {
    let entry = CacheEntry::default().with_dir("/tmp/c");
    assert!(!entry.is_usable());
    assert!(entry.provider().is_none());
}

#[test]
fn test_entry_with_empty_cache_is_not_usable() {
    assert!(!CacheEntry::registry_key("").is_usable());
    assert!(!CacheEntry::class("").is_usable());
}

#[test]
fn test_options_dir_defaults_to_empty() {
    let entry = CacheEntry::class("FilePath");
    assert_eq!(entry.options.dir(), "");

    let entry = entry.with_dir("/tmp/c");
    assert_eq!(entry.options.dir(), "/tmp/c");
}

#[test]
fn test_config_map_parses_from_toml() {
    let map: CacheConfigMap = toml::from_str(
        r#"
        [default]
        cache = "FilePath"
        options = { dir = "/tmp/c", mode = 420 }

        ["img/a.png"]
        cache = { class = "Filesystem" }

        ["js/app.js"]
        options = { dir = "/tmp/js" }
        "#,
    )
    .unwrap();

    assert_eq!(map.len(), 3);

    let default = map.default_entry().unwrap();
    assert!(matches!(default.provider(), Some(ProviderReference::RegistryKey(n)) if n == "FilePath"));
    assert_eq!(default.options.dir(), "/tmp/c");
    assert_eq!(default.options.extra.get("mode"), Some(&serde_json::json!(420)));

    let image = map.get("img/a.png").unwrap();
    assert!(matches!(image.provider(), Some(ProviderReference::ClassIdentifier(n)) if n == "Filesystem"));

    assert!(!map.get("js/app.js").unwrap().is_usable());
}

#[test]
fn test_config_map_builder() {
    let map = CacheConfigMap::new()
        .with_default(CacheEntry::registry_key("Filesystem"))
        .with_entry("img/a.png", CacheEntry::registry_key("shared"));

    assert!(map.get(DEFAULT_ENTRY_KEY).is_some());
    assert!(map.get("img/a.png").is_some());
    assert!(map.get("img/b.png").is_none());
    assert!(!map.is_empty());
}

#[test]
fn test_falsy_cache_values_parse_as_absent() {
    let map: CacheConfigMap = toml::from_str(
        r#"
        [default]
        cache = "Memory"

        ["img/a.png"]
        cache = false

        ["img/b.png"]
        cache = 0

        ["img/c.png"]
        cache = ""

        ["img/d.png"]
        cache = "0"
        "#,
    )
    .unwrap();

    assert!(map.default_entry().unwrap().is_usable());
    for path in ["img/a.png", "img/b.png", "img/c.png", "img/d.png"] {
        let entry = map.get(path).unwrap();
        assert!(entry.cache.is_none(), "{path} should have no provider");
        assert!(!entry.is_usable());
    }
}

#[test]
fn test_null_cache_value_parses_as_absent() {
    let entry: CacheEntry = serde_json::from_str(r#"{"cache": null}"#).unwrap();
    assert!(!entry.is_usable());
}

#[test]
fn test_truthy_non_string_cache_value_is_rejected() {
    assert!(toml::from_str::<CacheConfigMap>("[default]\ncache = true\n").is_err());
    assert!(toml::from_str::<CacheConfigMap>("[default]\ncache = 1\n").is_err());
}
