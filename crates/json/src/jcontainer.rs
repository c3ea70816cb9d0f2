use crate::{JArray, JObject, JToken};

/// Base trait for JSON containers (objects and arrays)
pub trait JContainer {
    /// Gets the children of the container, in order
    fn children(&self) -> Vec<&JToken>;

    /// Gets the number of children in the container
    fn count(&self) -> usize {
        self.children().len()
    }

    /// Checks if the container is empty
    fn is_empty_container(&self) -> bool {
        self.count() == 0
    }
}

impl JContainer for JArray {
    fn children(&self) -> Vec<&JToken> {
        self.iter().collect()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl JContainer for JObject {
    fn children(&self) -> Vec<&JToken> {
        self.values().collect()
    }

    fn count(&self) -> usize {
        self.size()
    }
}
