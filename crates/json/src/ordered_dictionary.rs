use indexmap::{IndexMap, IndexSet};
use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// An ordered dictionary that maintains insertion order.
///
/// Replacing the value of an existing key keeps the key at its original
/// position. Equality ignores order: two dictionaries are equal when they
/// hold the same keys bound to equal values.
#[derive(Debug, Clone)]
pub struct OrderedDictionary<K, V>
where
    K: Hash + Eq,
{
    map: IndexMap<K, V>,
}

impl<K, V> OrderedDictionary<K, V>
where
    K: Hash + Eq,
{
    /// Creates a new empty OrderedDictionary
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Creates a new OrderedDictionary with the specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair, returning the value previously bound to the key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Gets a value by key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key)
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_mut(key)
    }

    /// Checks if the dictionary contains a key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of key-value pairs
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// Returns an iterator over the values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    /// Returns an iterator over key-value pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.map.iter()
    }

    /// Copies the current keys, in insertion order, into an owned set.
    pub fn key_snapshot(&self) -> IndexSet<K>
    where
        K: Clone,
    {
        self.map.keys().cloned().collect()
    }
}

impl<K, V> Default for OrderedDictionary<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for OrderedDictionary<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V> Eq for OrderedDictionary<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}

// Entries are hashed independently and summed so the result does not depend
// on insertion order, matching `PartialEq`.
impl<K, V> Hash for OrderedDictionary<K, V>
where
    K: Hash + Eq,
    V: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self.map.iter().fold(0u64, |acc, (key, value)| {
            let mut entry = DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            acc.wrapping_add(entry.finish())
        });
        state.write_usize(self.map.len());
        state.write_u64(combined);
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedDictionary<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for OrderedDictionary<K, V>
where
    K: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl<K, V> IntoIterator for OrderedDictionary<K, V>
where
    K: Hash + Eq,
{
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedDictionary<K, V>
where
    K: Hash + Eq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_ordered_dictionary_basic() {
        let mut dict = OrderedDictionary::new();

        dict.insert("first", 1);
        dict.insert("second", 2);
        dict.insert("third", 3);

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get("first"), Some(&1));
        assert_eq!(dict.get("second"), Some(&2));
        assert_eq!(dict.get("third"), Some(&3));

        // Check insertion order is maintained
        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(keys, vec![&"first", &"second", &"third"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut dict = OrderedDictionary::new();

        assert_eq!(dict.insert("a", 1), None);
        assert_eq!(dict.insert("b", 2), None);
        assert_eq!(dict.insert("a", 3), Some(1));

        assert_eq!(dict.len(), 2);
        let entries: Vec<_> = dict.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_equality_and_hash_ignore_order() {
        let forward: OrderedDictionary<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        let backward: OrderedDictionary<&str, i32> = [("y", 2), ("x", 1)].into_iter().collect();

        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));

        let different: OrderedDictionary<&str, i32> = [("x", 1), ("y", 3)].into_iter().collect();
        assert_ne!(forward, different);
    }

    #[test]
    fn test_key_snapshot_is_detached() {
        let mut dict = OrderedDictionary::new();
        dict.insert("a".to_string(), 1);

        let snapshot = dict.key_snapshot();
        dict.insert("b".to_string(), 2);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains("a"));
        assert!(!snapshot.contains("b"));
        assert_eq!(dict.len(), 2);
    }
}
