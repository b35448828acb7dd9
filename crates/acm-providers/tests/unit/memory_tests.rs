//! MemoryCache tests

use std::time::Duration;

use acm_providers::CacheBackend;
use acm_providers::cache::MemoryCache;
use acm_providers::constants::MEMORY_CACHE_DEFAULT_CAPACITY;

#[test]
fn test_default_capacity() {
    assert_eq!(MemoryCache::new().max_entries(), MEMORY_CACHE_DEFAULT_CAPACITY);
    assert_eq!(MemoryCache::with_capacity(5).max_entries(), 5);
}

#[tokio::test]
async fn test_set_get_remove() {
    let cache = MemoryCache::new();

    assert!(!cache.has("k").await.unwrap());
    cache.set("k", b"v").await.unwrap();
    assert!(cache.has("k").await.unwrap());
    assert_eq!(cache.get("k").await.unwrap(), b"v".to_vec());

    cache.remove("k").await.unwrap();
    assert!(!cache.has("k").await.unwrap());
    assert!(cache.get("k").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_clones_share_storage() {
    let cache = MemoryCache::with_config(100, Duration::from_secs(60));
    let clone = cache.clone();

    cache.set("shared", b"1").await.unwrap();
    assert_eq!(clone.get("shared").await.unwrap(), b"1".to_vec());
}
