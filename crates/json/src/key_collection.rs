//! Immutable snapshot of a `JObject`'s property names.

use indexmap::IndexSet;
use std::fmt;

/// Property names of a `JObject`, copied in insertion order at the moment
/// `JObject::key_set` was called.
///
/// The collection owns its keys. Mutating the source object afterwards has
/// no effect on it, and every query is answered from the snapshot alone.
/// Membership checks are hash lookups.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct KeyCollection {
    keys: IndexSet<String>,
}

impl KeyCollection {
    pub(crate) fn new(keys: IndexSet<String>) -> Self {
        Self { keys }
    }

    /// Number of keys in the snapshot
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Gets the key at `index` in insertion order
    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get_index(index).map(String::as_str)
    }

    /// Returns `true` if the snapshot holds `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Copies the keys into a vector.
    pub fn to_vec(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}

impl fmt::Debug for KeyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys.iter()).finish()
    }
}

impl IntoIterator for KeyCollection {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyCollection {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
