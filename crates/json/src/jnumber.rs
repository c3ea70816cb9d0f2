use crate::error::{JsonError, JsonResult};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest integer that an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Smallest integer that an `f64` represents exactly (-(2^53 - 1)).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Represents a JSON number.
///
/// The value is always finite, so the type can implement `Eq` and `Hash`.
/// Negative zero is stored as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct JNumber {
    value: f64,
}

impl JNumber {
    pub const MAX_SAFE_INTEGER: i64 = MAX_SAFE_INTEGER;
    pub const MIN_SAFE_INTEGER: i64 = MIN_SAFE_INTEGER;

    /// Creates a new JSON number, rejecting NaN and infinities.
    pub fn new(value: f64) -> JsonResult<Self> {
        if !value.is_finite() {
            return Err(JsonError::NonFiniteNumber(value));
        }
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Self { value })
    }

    /// Gets the numeric value
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the value as an integer when it is integral and in the safe range.
    pub fn as_safe_integer(&self) -> Option<i64> {
        let in_range = self.value.abs() <= MAX_SAFE_INTEGER as f64;
        (self.value.fract() == 0.0 && in_range).then_some(self.value as i64)
    }
}

impl PartialEq for JNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for JNumber {}

impl Hash for JNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl From<i32> for JNumber {
    fn from(value: i32) -> Self {
        Self {
            value: f64::from(value),
        }
    }
}

impl From<u32> for JNumber {
    fn from(value: u32) -> Self {
        Self {
            value: f64::from(value),
        }
    }
}

impl TryFrom<f64> for JNumber {
    type Error = JsonError;

    fn try_from(value: f64) -> JsonResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for JNumber {
    type Error = JsonError;

    fn try_from(value: i64) -> JsonResult<Self> {
        if !(MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
            return Err(JsonError::overflow(format!(
                "{value} is outside the safe integer range"
            )));
        }
        Ok(Self {
            value: value as f64,
        })
    }
}

impl TryFrom<u64> for JNumber {
    type Error = JsonError;

    fn try_from(value: u64) -> JsonResult<Self> {
        match i64::try_from(value) {
            Ok(value) => Self::try_from(value),
            Err(_) => Err(JsonError::overflow(format!(
                "{value} is outside the safe integer range"
            ))),
        }
    }
}

impl From<JNumber> for f64 {
    fn from(number: JNumber) -> Self {
        number.value
    }
}

impl fmt::Display for JNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_safe_integer() {
            Some(integer) => write!(f, "{integer}"),
            None => write!(f, "{}", self.value),
        }
    }
}
