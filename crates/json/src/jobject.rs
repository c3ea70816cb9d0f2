//! JSON object with insertion-ordered properties.

use crate::key_collection::KeyCollection;
use crate::ordered_dictionary::OrderedDictionary;
use crate::{JString, JToken};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Represents a JSON object: a set of named properties kept in the order in
/// which they were first assigned.
///
/// Order is observable through [`iter`](Self::iter), [`key_set`](Self::key_set)
/// and the `Display` output, but not through equality: two objects holding the
/// same properties compare equal (and hash identically) whatever order the
/// properties were added in.
///
/// Keys are `&str`/`String` and therefore never null.
///
/// ```
/// use ordered_json::JObject;
///
/// let mut person = JObject::new();
/// person.put("name", "Ann");
/// person.put("age", 30);
/// person.put("active", true);
///
/// assert_eq!(person.to_string(), r#"{"name":"Ann", "age":30, "active":true}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JObject {
    properties: OrderedDictionary<String, JToken>,
}

impl JObject {
    /// Creates a new empty JObject.
    pub fn new() -> Self {
        Self {
            properties: OrderedDictionary::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            properties: OrderedDictionary::with_capacity(capacity),
        }
    }

    /// Tests whether this object contains the specified property.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Gets the value associated with the specified property, or `None` if the
    /// property does not exist.
    pub fn get(&self, key: &str) -> Option<&JToken> {
        self.properties.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut JToken> {
        self.properties.get_mut(key)
    }

    /// Assigns `value` to the property `key`.
    ///
    /// An existing property is overwritten in place and keeps its position.
    /// Returns the previous value, or `None` if the property did not exist.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<JToken>) -> Option<JToken> {
        let key = key.into();
        let previous = self.properties.insert(key, value.into());
        if previous.is_some() {
            log::trace!("overwrote existing property in object of {} properties", self.size());
        }
        previous
    }

    /// Returns the property names as an immutable snapshot in insertion order.
    ///
    /// The snapshot is not affected by later calls to [`put`](Self::put).
    pub fn key_set(&self) -> KeyCollection {
        KeyCollection::new(self.properties.key_snapshot())
    }

    /// Determines the number of properties on this object.
    pub fn size(&self) -> usize {
        self.properties.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JToken)> + '_ {
        self.properties.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &JToken> + '_ {
        self.properties.values()
    }
}

impl fmt::Display for JObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.properties.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", JString::escape_value(key), value)?;
        }
        f.write_str("}")
    }
}

impl Serialize for JObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for JObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JToken::deserialize(deserializer)
            .and_then(|token| JObject::try_from(token).map_err(D::Error::custom))
    }
}

impl<K, V> FromIterator<(K, V)> for JObject
where
    K: Into<String>,
    V: Into<JToken>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = JObject::new();
        object.extend(iter);
        object
    }
}

impl<K, V> Extend<(K, V)> for JObject
where
    K: Into<String>,
    V: Into<JToken>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl IntoIterator for JObject {
    type Item = (String, JToken);
    type IntoIter = indexmap::map::IntoIter<String, JToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a JObject {
    type Item = (&'a String, &'a JToken);
    type IntoIter = indexmap::map::Iter<'a, String, JToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
