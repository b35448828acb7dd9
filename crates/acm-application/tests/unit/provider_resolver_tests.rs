//! Provider resolution tests
//!
//! Covers the three reference kinds and their precedence.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use acm_application::services::ProviderResolver;
use acm_domain::error::Error;
use acm_domain::ports::{CacheBackend, ServiceRegistry};
use acm_domain::value_objects::{CacheEntry, CacheFactory};
use acm_providers::cache::{MemoryCache, NullCache};

use crate::test_utils::TestRegistry;

#[test]
fn test_registered_name_returns_shared_instance() {
    let shared: Arc<dyn CacheBackend> = Arc::new(MemoryCache::new());
    let registry = Arc::new(TestRegistry::new().with_service("myRegisteredCache", shared.clone()));
    let resolver = ProviderResolver::new(registry);

    let entry = CacheEntry::registry_key("myRegisteredCache");
    let first = resolver.obtain(&entry, "img/a.png").unwrap().unwrap();
    let second = resolver.obtain(&entry, "img/a.png").unwrap().unwrap();

    assert!(Arc::ptr_eq(&first, &shared));
    assert!(Arc::ptr_eq(&second, &shared));
}

#[test]
fn test_unregistered_name_is_constructed_through_legacy_mapper() {
    let temp = tempfile::tempdir().unwrap();
    let registry = Arc::new(TestRegistry::new());
    let resolver = ProviderResolver::new(registry.clone());

    let entry = CacheEntry::registry_key("FilePath").with_dir(temp.path().to_string_lossy());
    let backend = resolver.obtain(&entry, "img/a.png").unwrap().unwrap();

    assert_eq!(backend.provider_name(), "file_path");
    assert_eq!(registry.lookups(), 1);
}

#[test]
fn test_registry_service_shadows_class_name() {
    let shared: Arc<dyn CacheBackend> = Arc::new(NullCache::new());
    let registry = Arc::new(TestRegistry::new().with_service("Filesystem", shared.clone()));
    let resolver = ProviderResolver::new(registry);

    let backend = resolver
        .obtain(&CacheEntry::registry_key("Filesystem"), "img/a.png")
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(&backend, &shared));
}

#[test]
fn test_class_identifier_skips_registry() {
    let shared: Arc<dyn CacheBackend> = Arc::new(NullCache::new());
    let registry = Arc::new(TestRegistry::new().with_service("Memory", shared.clone()));
    let resolver = ProviderResolver::new(registry.clone());

    let backend = resolver
        .obtain(&CacheEntry::class("Memory"), "img/a.png")
        .unwrap()
        .unwrap();

    assert!(!Arc::ptr_eq(&backend, &shared));
    assert_eq!(backend.provider_name(), "memory");
    assert_eq!(registry.lookups(), 0);
}

#[test]
fn test_constructed_backends_are_fresh_per_call() {
    let resolver = ProviderResolver::new(Arc::new(TestRegistry::new()));
    let entry = CacheEntry::class("Memory");

    let first = resolver.obtain(&entry, "a").unwrap().unwrap();
    let second = resolver.obtain(&entry, "a").unwrap().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_factory_invoked_with_path_without_registry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let produced: Arc<dyn CacheBackend> = Arc::new(NullCache::new());
    let handed_out = Arc::clone(&produced);

    let factory = CacheFactory::new(move |path| {
        assert_eq!(path, "img/a.png");
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Some(Arc::clone(&handed_out)))
    });

    let registry = Arc::new(TestRegistry::new());
    let resolver = ProviderResolver::new(registry.clone());
    let backend = resolver
        .obtain(&CacheEntry::factory(factory), "img/a.png")
        .unwrap()
        .unwrap();

    assert!(Arc::ptr_eq(&backend, &produced));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(registry.lookups(), 0);
}

#[test]
fn test_factory_returning_none_means_no_cache() {
    let resolver = ProviderResolver::new(Arc::new(TestRegistry::new()));
    let entry = CacheEntry::factory(CacheFactory::new(|_| Ok(None)));

    assert!(resolver.obtain(&entry, "img/a.png").unwrap().is_none());
}

#[test]
fn test_factory_errors_propagate() {
    let resolver = ProviderResolver::new(Arc::new(TestRegistry::new()));
    let entry = CacheEntry::factory(CacheFactory::new(|path| {
        Err(Error::factory(path, "backend unavailable"))
    }));

    let err = resolver.obtain(&entry, "img/a.png").unwrap_err();
    assert!(matches!(err, Error::Factory { ref path, .. } if path == "img/a.png"));
}

#[test]
fn test_unknown_identifier_is_fatal() {
    let resolver = ProviderResolver::new(Arc::new(TestRegistry::new()));

    let err = resolver
        .obtain(&CacheEntry::registry_key("Redis"), "img/a.png")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownCacheBackend { ref identifier, .. } if identifier == "Redis"));
}

#[test]
fn test_entry_without_provider_yields_none() {
    let resolver = ProviderResolver::new(Arc::new(TestRegistry::new()));
    assert!(resolver.obtain(&CacheEntry::default(), "img/a.png").unwrap().is_none());
}

/// Registry that reports every name as known but returns nothing
struct ForgetfulRegistry;

impl ServiceRegistry for ForgetfulRegistry {
    fn has(&self, _name: &str) -> bool {
        true
    }

    fn get(&self, _name: &str) -> Option<Arc<dyn CacheBackend>> {
        None
    }
}

#[test]
fn test_registered_name_without_instance_is_not_found() {
    let resolver = ProviderResolver::new(Arc::new(ForgetfulRegistry));

    let err = resolver
        .obtain(&CacheEntry::registry_key("ghostCache"), "img/a.png")
        .unwrap_err();
    assert!(err.is_not_found());
}
