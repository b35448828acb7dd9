//! Provider references
//!
//! How a configuration entry says where its cache backend comes from.
//! The kind of reference is decided once, when the configuration is
//! parsed or built, and is never re-inspected at resolution time.

use std::fmt;
use std::sync::Arc;

use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ports::CacheBackend;

/// Signature of a factory-style cache provider
pub type CacheFactoryFn = dyn Fn(&str) -> Result<Option<Arc<dyn CacheBackend>>> + Send + Sync;

/// Shared factory invoked with the asset path
///
/// Kept for configurations written before named registry services
/// existed. A factory returning `Ok(None)` disables caching for the path.
#[derive(Clone)]
pub struct CacheFactory(Arc<CacheFactoryFn>);

impl CacheFactory {
    /// Wrap a closure as a cache factory
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&str) -> Result<Option<Arc<dyn CacheBackend>>> + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Invoke the factory for an asset path
    pub fn invoke(&self, path: &str) -> Result<Option<Arc<dyn CacheBackend>>> {
        (self.0)(path)
    }
}

impl fmt::Debug for CacheFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CacheFactory(..)")
    }
}

/// Where a cache backend for an entry comes from
///
/// | Config form | Variant |
/// |-------------|---------|
/// | `cache = "name"` | [`ProviderReference::RegistryKey`] |
/// | `cache = { class = "FilePath" }` | [`ProviderReference::ClassIdentifier`] |
/// | programmatic closure | [`ProviderReference::Factory`] |
#[derive(Debug, Clone)]
pub enum ProviderReference {
    /// Registry service name; constructed as a class identifier when the
    /// registry does not know it
    RegistryKey(String),
    /// Legacy factory invoked with the asset path
    Factory(CacheFactory),
    /// Class-style identifier, possibly a legacy short name
    ClassIdentifier(String),
}

impl ProviderReference {
    /// Whether this reference can produce a provider at all
    ///
    /// Empty names behave like a missing `cache` field.
    pub fn is_set(&self) -> bool {
        match self {
            Self::RegistryKey(name) | Self::ClassIdentifier(name) => !name.is_empty(),
            Self::Factory(_) => true,
        }
    }

    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RegistryKey(_) => "registry_key",
            Self::Factory(_) => "factory",
            Self::ClassIdentifier(_) => "class",
        }
    }
}

impl From<&str> for ProviderReference {
    fn from(name: &str) -> Self {
        Self::RegistryKey(name.to_string())
    }
}

impl From<String> for ProviderReference {
    fn from(name: String) -> Self {
        Self::RegistryKey(name)
    }
}

impl From<CacheFactory> for ProviderReference {
    fn from(factory: CacheFactory) -> Self {
        Self::Factory(factory)
    }
}

impl Serialize for ProviderReference {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::RegistryKey(name) => serializer.serialize_str(name),
            Self::ClassIdentifier(class) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("class", class)?;
                map.end()
            }
            Self::Factory(_) => Err(serde::ser::Error::custom(
                "factory cache providers cannot be serialized",
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReference {
    Name(String),
    Class { class: String },
    Flag(bool),
    Integer(i64),
    Float(f64),
}

impl RawReference {
    /// `None` for falsy scalars, an error message for truthy non-string scalars
    fn into_reference(self) -> std::result::Result<Option<ProviderReference>, String> {
        match self {
            Self::Name(name) => Ok(Some(ProviderReference::RegistryKey(name))),
            Self::Class { class } => Ok(Some(ProviderReference::ClassIdentifier(class))),
            Self::Flag(false) | Self::Integer(0) => Ok(None),
            Self::Float(value) if value == 0.0 => Ok(None),
            Self::Flag(_) | Self::Integer(_) | Self::Float(_) => Err(
                "cache provider must be a name or a { class = .. } table".to_string(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for ProviderReference {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawReference::deserialize(deserializer)?
            .into_reference()
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("cache provider is disabled"))
    }
}

/// Deserialize an optional `cache` field
///
/// `null`, `false`, `0`, `""` and `"0"` all mean "no cache provider".
pub(crate) fn deserialize_cache_field<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<ProviderReference>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawReference>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let reference = raw.into_reference().map_err(D::Error::custom)?;
    Ok(reference.filter(|reference| match reference {
        ProviderReference::RegistryKey(name) => !name.is_empty() && name != "0",
        _ => true,
    }))
}
