//! The closed set of JSON value variants.

use crate::error::{JsonError, JsonResult};
use crate::jcontainer::JContainer;
use crate::{JArray, JBoolean, JNumber, JObject, JString};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;

/// Default nesting limit applied when converting from `serde_json::Value`.
pub const DEFAULT_MAX_NESTING: usize = 64;

/// Represents a JSON token
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum JToken {
    #[default]
    Null,
    Boolean(JBoolean),
    Number(JNumber),
    String(JString),
    Array(JArray),
    Object(JObject),
}

impl JToken {
    pub fn is_null(&self) -> bool {
        matches!(self, JToken::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JToken::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JToken::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JToken::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JToken::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JToken::Object(_))
    }

    /// Returns the object if this token is one.
    pub fn as_object(&self) -> Option<&JObject> {
        match self {
            JToken::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JObject> {
        match self {
            JToken::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the array if this token is one.
    pub fn as_array(&self) -> Option<&JArray> {
        match self {
            JToken::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JArray> {
        match self {
            JToken::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the unescaped text if this token is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JToken::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JToken::Number(number) => Some(number.value()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JToken::Boolean(value) => Some(value.value()),
            _ => None,
        }
    }

    /// Gets children count; zero for scalars.
    pub fn child_count(&self) -> usize {
        match self {
            JToken::Array(array) => array.count(),
            JToken::Object(object) => object.count(),
            _ => 0,
        }
    }

    /// Converts the token into a `serde_json::Value`, preserving object order.
    pub fn to_json_value(&self) -> JsonValue {
        match self {
            JToken::Null => JsonValue::Null,
            JToken::Boolean(value) => JsonValue::Bool(value.value()),
            JToken::Number(number) => match number.as_safe_integer() {
                Some(integer) => JsonValue::from(integer),
                None => serde_json::Number::from_f64(number.value())
                    .map_or(JsonValue::Null, JsonValue::Number),
            },
            JToken::String(value) => JsonValue::String(value.as_str().to_owned()),
            JToken::Array(array) => {
                JsonValue::Array(array.iter().map(JToken::to_json_value).collect())
            }
            JToken::Object(object) => JsonValue::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.to_json_value()))
                    .collect(),
            ),
        }
    }

    /// Converts a `serde_json::Value` into a token.
    ///
    /// Arrays and objects may be nested at most `max_nesting` levels deep.
    pub fn from_json_value(value: JsonValue, max_nesting: usize) -> JsonResult<JToken> {
        Self::convert(value, 0, max_nesting)
    }

    fn convert(value: JsonValue, depth: usize, max_nesting: usize) -> JsonResult<JToken> {
        match value {
            JsonValue::Null => Ok(JToken::Null),
            JsonValue::Bool(value) => Ok(JToken::from(value)),
            JsonValue::Number(number) => Self::convert_number(&number),
            JsonValue::String(value) => Ok(JToken::from(value)),
            JsonValue::Array(items) => {
                Self::check_depth(depth, max_nesting)?;
                let items = items
                    .into_iter()
                    .map(|item| Self::convert(item, depth + 1, max_nesting))
                    .collect::<JsonResult<Vec<_>>>()?;
                Ok(JToken::Array(JArray::from_vec(items)))
            }
            JsonValue::Object(map) => {
                Self::check_depth(depth, max_nesting)?;
                let mut object = JObject::with_capacity(map.len());
                for (key, value) in map {
                    object.put(key, Self::convert(value, depth + 1, max_nesting)?);
                }
                Ok(JToken::Object(object))
            }
        }
    }

    fn check_depth(depth: usize, max_nesting: usize) -> JsonResult<()> {
        if depth >= max_nesting {
            log::debug!("rejecting JSON value nested deeper than {max_nesting}");
            return Err(JsonError::NestingTooDeep(max_nesting));
        }
        Ok(())
    }

    fn convert_number(number: &serde_json::Number) -> JsonResult<JToken> {
        let safe_range = JNumber::MIN_SAFE_INTEGER..=JNumber::MAX_SAFE_INTEGER;
        let exact = match (number.as_i64(), number.as_u64()) {
            (Some(integer), _) => safe_range.contains(&integer),
            (None, Some(_)) => false,
            (None, None) => true,
        };
        if !exact {
            log::debug!("number {number} loses precision as f64");
        }
        let value = number
            .as_f64()
            .ok_or_else(|| JsonError::overflow(format!("{number} is not representable as f64")))?;
        Ok(JToken::Number(JNumber::new(value)?))
    }
}

/// Renders the token as JSON text.
impl fmt::Display for JToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JToken::Null => f.write_str("null"),
            JToken::Boolean(value) => fmt::Display::fmt(value, f),
            JToken::Number(number) => fmt::Display::fmt(number, f),
            JToken::String(value) => fmt::Display::fmt(value, f),
            JToken::Array(array) => fmt::Display::fmt(array, f),
            JToken::Object(object) => fmt::Display::fmt(object, f),
        }
    }
}

impl Serialize for JToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JToken::Null => serializer.serialize_unit(),
            JToken::Boolean(value) => serializer.serialize_bool(value.value()),
            JToken::Number(number) => match number.as_safe_integer() {
                Some(integer) => serializer.serialize_i64(integer),
                None => serializer.serialize_f64(number.value()),
            },
            JToken::String(value) => serializer.serialize_str(value.as_str()),
            JToken::Array(array) => serializer.collect_seq(array.iter()),
            JToken::Object(object) => object.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        JToken::from_json_value(value, DEFAULT_MAX_NESTING).map_err(D::Error::custom)
    }
}

impl TryFrom<JsonValue> for JToken {
    type Error = JsonError;

    fn try_from(value: JsonValue) -> JsonResult<Self> {
        JToken::from_json_value(value, DEFAULT_MAX_NESTING)
    }
}

impl From<&JToken> for JsonValue {
    fn from(token: &JToken) -> Self {
        token.to_json_value()
    }
}

impl From<bool> for JToken {
    fn from(value: bool) -> Self {
        JToken::Boolean(JBoolean::new(value))
    }
}

impl From<i32> for JToken {
    fn from(value: i32) -> Self {
        JToken::Number(JNumber::from(value))
    }
}

impl From<u32> for JToken {
    fn from(value: u32) -> Self {
        JToken::Number(JNumber::from(value))
    }
}

impl TryFrom<f64> for JToken {
    type Error = JsonError;

    fn try_from(value: f64) -> JsonResult<Self> {
        JNumber::new(value).map(JToken::Number)
    }
}

impl TryFrom<i64> for JToken {
    type Error = JsonError;

    fn try_from(value: i64) -> JsonResult<Self> {
        JNumber::try_from(value).map(JToken::Number)
    }
}

impl TryFrom<u64> for JToken {
    type Error = JsonError;

    fn try_from(value: u64) -> JsonResult<Self> {
        JNumber::try_from(value).map(JToken::Number)
    }
}

impl From<&str> for JToken {
    fn from(value: &str) -> Self {
        JToken::String(JString::from(value))
    }
}

impl From<String> for JToken {
    fn from(value: String) -> Self {
        JToken::String(JString::from(value))
    }
}

impl From<JBoolean> for JToken {
    fn from(value: JBoolean) -> Self {
        JToken::Boolean(value)
    }
}

impl From<JNumber> for JToken {
    fn from(value: JNumber) -> Self {
        JToken::Number(value)
    }
}

impl From<JString> for JToken {
    fn from(value: JString) -> Self {
        JToken::String(value)
    }
}

impl From<JArray> for JToken {
    fn from(value: JArray) -> Self {
        JToken::Array(value)
    }
}

impl From<Vec<JToken>> for JToken {
    fn from(value: Vec<JToken>) -> Self {
        JToken::Array(JArray::from_vec(value))
    }
}

impl From<JObject> for JToken {
    fn from(value: JObject) -> Self {
        JToken::Object(value)
    }
}

impl<T: Into<JToken>> From<Option<T>> for JToken {
    fn from(value: Option<T>) -> Self {
        value.map_or(JToken::Null, Into::into)
    }
}

impl TryFrom<JToken> for JObject {
    type Error = JsonError;

    fn try_from(token: JToken) -> JsonResult<Self> {
        match token {
            JToken::Object(object) => Ok(object),
            _ => Err(JsonError::invalid_cast("Token is not an object")),
        }
    }
}

impl TryFrom<JToken> for JArray {
    type Error = JsonError;

    fn try_from(token: JToken) -> JsonResult<Self> {
        match token {
            JToken::Array(array) => Ok(array),
            _ => Err(JsonError::invalid_cast("Token is not an array")),
        }
    }
}

impl TryFrom<JToken> for String {
    type Error = JsonError;

    fn try_from(token: JToken) -> JsonResult<Self> {
        match token {
            JToken::String(value) => Ok(value.into_string()),
            _ => Err(JsonError::invalid_cast("Token is not a string")),
        }
    }
}

impl TryFrom<JToken> for f64 {
    type Error = JsonError;

    fn try_from(token: JToken) -> JsonResult<Self> {
        token
            .as_f64()
            .ok_or_else(|| JsonError::invalid_cast("Token is not a number"))
    }
}

impl TryFrom<JToken> for bool {
    type Error = JsonError;

    fn try_from(token: JToken) -> JsonResult<Self> {
        token
            .as_bool()
            .ok_or_else(|| JsonError::invalid_cast("Token is not a boolean"))
    }
}
