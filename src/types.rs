//! Core value and tree types shared by every configuration source.

use serde::ser::{Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Namespace holding the core application settings.
pub const CROWI_NAMESPACE: &str = "crowi";

/// Namespace holding markdown rendering settings.
pub const MARKDOWN_NAMESPACE: &str = "markdown";

/// Identifies one configuration slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigCoordinate {
    pub namespace: &'static str,
    pub key: &'static str,
}

impl ConfigCoordinate {
    pub const fn new(namespace: &'static str, key: &'static str) -> Self {
        Self { namespace, key }
    }
}

impl fmt::Display for ConfigCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.key)
    }
}

/// A single configuration value.
///
/// `Null` is the unset marker: the slot is known but not configured. It is
/// distinct from the key being absent from a tree.
///
/// `InvalidNumber` is only ever produced by numeric coercion of an
/// environment variable that has no leading digits. It is exposed as-is so
/// that consumers can treat it as a misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    InvalidNumber,
}

/// Reasons a JSON document cannot become a [`ConfigValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonScalar {
    Array,
    Object,
}

impl fmt::Display for NonScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonScalar::Array => write!(f, "expected a scalar, found an array"),
            NonScalar::Object => write!(f, "expected a scalar, found an object"),
        }
    }
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// True for the numeric coercion failure sentinel.
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, ConfigValue::InvalidNumber)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a decoded JSON document into a scalar value.
    ///
    /// The empty string is kept as-is here; the `""` -> `Null` rule belongs to
    /// the database source only.
    pub fn from_json(value: serde_json::Value) -> Result<Self, NonScalar> {
        match value {
            serde_json::Value::Null => Ok(ConfigValue::Null),
            serde_json::Value::Bool(b) => Ok(ConfigValue::Bool(b)),
            serde_json::Value::Number(n) => Ok(ConfigValue::Number(n)),
            serde_json::Value::String(s) => Ok(ConfigValue::String(s)),
            serde_json::Value::Array(_) => Err(NonScalar::Array),
            serde_json::Value::Object(_) => Err(NonScalar::Object),
        }
    }

    /// JSON view of the value. The invalid-number sentinel renders as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ConfigValue::Null | ConfigValue::InvalidNumber => serde_json::Value::Null,
            ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
            ConfigValue::Number(n) => serde_json::Value::Number(n.clone()),
            ConfigValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Null | ConfigValue::InvalidNumber => serializer.serialize_unit(),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Number(n) => n.serialize(serializer),
            ConfigValue::String(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::String(s) => write!(f, "{:?}", s),
            ConfigValue::InvalidNumber => write!(f, "NaN"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(value.into())
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

/// Key -> value mapping for a single namespace.
pub type NamespaceValues = BTreeMap<String, ConfigValue>;

/// Two-level configuration mapping: namespace -> key -> value.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ConfigTree {
    namespaces: BTreeMap<String, NamespaceValues>,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `namespace/key`, creating the namespace on first use.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: ConfigValue,
    ) -> Option<ConfigValue> {
        self.namespace_entry(namespace).insert(key.into(), value)
    }

    /// Get or create the mapping for `namespace`.
    pub fn namespace_entry(&mut self, namespace: impl Into<String>) -> &mut NamespaceValues {
        self.namespaces.entry(namespace.into()).or_default()
    }

    /// Replace the whole mapping for `namespace`.
    pub fn set_namespace(&mut self, namespace: impl Into<String>, values: NamespaceValues) {
        self.namespaces.insert(namespace.into(), values);
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<&ConfigValue> {
        self.namespaces.get(namespace).and_then(|ns| ns.get(key))
    }

    pub fn namespace(&self, namespace: &str) -> Option<&NamespaceValues> {
        self.namespaces.get(namespace)
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Total number of keys across all namespaces.
    pub fn value_count(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, NamespaceValues> {
        self.namespaces.iter()
    }
}

impl IntoIterator for ConfigTree {
    type Item = (String, NamespaceValues);
    type IntoIter = btree_map::IntoIter<String, NamespaceValues>;

    fn into_iter(self) -> Self::IntoIter {
        self.namespaces.into_iter()
    }
}

impl FromIterator<(String, NamespaceValues)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (String, NamespaceValues)>>(iter: I) -> Self {
        Self {
            namespaces: iter.into_iter().collect(),
        }
    }
}
