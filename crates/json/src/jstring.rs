use serde_json::Value as JsonValue;
use std::borrow::Borrow;
use std::fmt;

/// Represents a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct JString {
    value: String,
}

impl JString {
    /// Initializes a new JString with the specified value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Escapes `value` as a quoted JSON string literal.
    ///
    /// Quotes, backslashes and control characters are escaped following
    /// RFC 8259; everything else is emitted verbatim.
    ///
    /// ```
    /// use ordered_json::JString;
    ///
    /// assert_eq!(JString::escape_value("say \"hi\""), r#""say \"hi\"""#);
    /// assert_eq!(JString::escape_value("a\nb"), r#""a\nb""#);
    /// ```
    pub fn escape_value(value: &str) -> String {
        JsonValue::from(value).to_string()
    }

    /// Gets the unescaped string value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl From<&str> for JString {
    fn from(value: &str) -> Self {
        JString::new(value)
    }
}

impl From<String> for JString {
    fn from(value: String) -> Self {
        JString::new(value)
    }
}

impl From<JString> for String {
    fn from(value: JString) -> Self {
        value.value
    }
}

impl AsRef<str> for JString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Borrow<str> for JString {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for JString {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for JString {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

/// Renders the string as an escaped, quoted JSON literal.
impl fmt::Display for JString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::escape_value(&self.value))
    }
}
