//! NullCache tests

use acm_providers::CacheBackend;
use acm_providers::cache::NullCache;

#[tokio::test]
async fn test_null_cache_stores_nothing() {
    let cache = NullCache::new();

    cache.set("k", b"v").await.unwrap();
    assert!(!cache.has("k").await.unwrap());
    assert!(cache.get("k").await.unwrap_err().is_not_found());
    cache.remove("k").await.unwrap();
    assert_eq!(cache.provider_name(), "null");
}
