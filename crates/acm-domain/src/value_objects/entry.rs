//! Cache configuration entries

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::provider::{CacheFactory, ProviderReference, deserialize_cache_field};
use crate::constants::DEFAULT_ENTRY_KEY;

/// Backend-specific options of a cache entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheOptions {
    /// Directory used by filesystem-style backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Any other option, kept for custom backends
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CacheOptions {
    /// The configured directory, or an empty string when unset
    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or_default()
    }
}

/// One configuration record: a provider reference plus its options
///
/// An entry whose `cache` is missing, empty or falsy (`false`, `0`) is
/// treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Where the backend comes from
    #[serde(
        default,
        deserialize_with = "deserialize_cache_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache: Option<ProviderReference>,

    /// Options travelling with this entry
    #[serde(default)]
    pub options: CacheOptions,
}

impl CacheEntry {
    /// Create an entry for the given reference
    pub fn new(reference: impl Into<ProviderReference>) -> Self {
        Self {
            cache: Some(reference.into()),
            options: CacheOptions::default(),
        }
    }

    /// Entry naming a registry service (or, failing that, a class)
    pub fn registry_key(name: impl Into<String>) -> Self {
        Self::new(ProviderReference::RegistryKey(name.into()))
    }

    /// Entry constructing a backend directly from a class identifier
    pub fn class(identifier: impl Into<String>) -> Self {
        Self::new(ProviderReference::ClassIdentifier(identifier.into()))
    }

    /// Entry backed by a legacy factory
    pub fn factory(factory: CacheFactory) -> Self {
        Self::new(ProviderReference::Factory(factory))
    }

    /// Set the backend directory
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.options.dir = Some(dir.into());
        self
    }

    /// Replace all options
    pub fn with_options(mut self, options: CacheOptions) -> Self {
        self.options = options;
        self
    }

    /// The provider reference, if it is set to something usable
    pub fn provider(&self) -> Option<&ProviderReference> {
        self.cache.as_ref().filter(|reference| reference.is_set())
    }

    /// Whether the entry can take part in resolution
    pub fn is_usable(&self) -> bool {
        self.provider().is_some()
    }
}

/// Configuration map keyed by asset path or the reserved `default` key
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheConfigMap(HashMap<String, CacheEntry>);

impl CacheConfigMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry stored under an exact key
    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.0.get(key)
    }

    /// The `default` entry
    pub fn default_entry(&self) -> Option<&CacheEntry> {
        self.0.get(DEFAULT_ENTRY_KEY)
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, entry: CacheEntry) -> Option<CacheEntry> {
        self.0.insert(key.into(), entry)
    }

    /// Builder-style insert
    pub fn with_entry(mut self, key: impl Into<String>, entry: CacheEntry) -> Self {
        self.insert(key, entry);
        self
    }

    /// Builder-style insert of the `default` entry
    pub fn with_default(self, entry: CacheEntry) -> Self {
        self.with_entry(DEFAULT_ENTRY_KEY, entry)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no entries are configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, entry)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.0.iter()
    }
}

impl FromIterator<(String, CacheEntry)> for CacheConfigMap {
    fn from_iter<I: IntoIterator<Item = (String, CacheEntry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
