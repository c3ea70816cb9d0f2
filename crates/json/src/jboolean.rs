use std::fmt;

/// Represents a JSON boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JBoolean {
    value: bool,
}

impl JBoolean {
    /// Creates a new JSON boolean
    pub const fn new(value: bool) -> Self {
        Self { value }
    }

    /// Gets the boolean value
    pub const fn value(&self) -> bool {
        self.value
    }
}

impl From<bool> for JBoolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<JBoolean> for bool {
    fn from(jboolean: JBoolean) -> Self {
        jboolean.value
    }
}

impl fmt::Display for JBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
