use crate::JToken;
use std::fmt;

/// Represents a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JArray {
    items: Vec<JToken>,
}

impl JArray {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an array from the provided items.
    pub fn from_vec(items: Vec<JToken>) -> Self {
        Self { items }
    }

    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&JToken> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut JToken> {
        self.items.get_mut(index)
    }

    /// Adds a new element to the end of the array.
    pub fn push(&mut self, item: impl Into<JToken>) {
        self.items.push(item.into());
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: impl Into<JToken>) -> Option<JToken> {
        self.items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item.into()))
    }

    /// Iterator over the stored items.
    pub fn iter(&self) -> std::slice::Iter<'_, JToken> {
        self.items.iter()
    }
}

impl fmt::Display for JArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl From<Vec<JToken>> for JArray {
    fn from(value: Vec<JToken>) -> Self {
        Self::from_vec(value)
    }
}

impl<T: Into<JToken>> FromIterator<T> for JArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for JArray {
    type Item = JToken;
    type IntoIter = std::vec::IntoIter<JToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a JArray {
    type Item = &'a JToken;
    type IntoIter = std::slice::Iter<'a, JToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
