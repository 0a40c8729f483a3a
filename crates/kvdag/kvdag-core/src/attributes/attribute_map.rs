//! Key/value attribute storage with receiver-wins merge.

use std::collections::btree_map::{self, BTreeMap};
use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_KEY_PATH_SEPARATOR;

static NULL: Value = Value::Null;

/// An ordered key → value map holding the attributes of one vertex or edge.
///
/// Keys are unique. Iteration is sorted by key, which keeps debug output and
/// serialized forms stable; lookup semantics do not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    entries: BTreeMap<String, Value>,
}

impl AttributeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a JSON value. Returns `None` unless `value` is an object.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(object.into_iter().collect()),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up `path` using the default `"."` separator. See [`Self::get_path_with`].
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        self.get_path_with(path, DEFAULT_KEY_PATH_SEPARATOR)
    }

    /// Look up a key path such as `"os.release.major"`.
    ///
    /// A literal top-level key equal to the whole path wins. Otherwise the
    /// first segment is looked up here and each following segment descends
    /// into nested JSON objects.
    pub fn get_path_with(&self, path: &str, separator: &str) -> Option<&Value> {
        if let Some(value) = self.entries.get(path) {
            return Some(value);
        }
        if separator.is_empty() || !path.contains(separator) {
            return None;
        }

        let mut segments = path.split(separator);
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Overlay `other` onto this map.
    ///
    /// The result holds the union of both key sets. On collision the value
    /// already present in `self` is kept; `other` only fills in missing keys.
    /// Nested objects are not merged.
    pub fn merge(&mut self, other: &AttributeMap) -> &mut Self {
        for (key, value) in &other.entries {
            if !self.entries.contains_key(key) {
                self.entries.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// By-value form of [`Self::merge`].
    pub fn merged(mut self, other: &AttributeMap) -> Self {
        self.merge(other);
        self
    }

    /// Convert into a JSON object.
    pub fn into_json(self) -> Value {
        Value::Object(self.entries.into_iter().collect())
    }
}

impl Index<&str> for AttributeMap {
    type Output = Value;

    /// Missing keys index to `Value::Null`, mirroring `serde_json::Value`.
    fn index(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }
}

impl From<BTreeMap<String, Value>> for AttributeMap {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.entries.insert(k.into(), v.into());
        }
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
