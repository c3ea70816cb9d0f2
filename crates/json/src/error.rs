use thiserror::Error;

/// JSON value errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    #[error("Non-finite number: {0}")]
    NonFiniteNumber(f64),

    #[error("Overflow error: {0}")]
    Overflow(String),

    #[error("Invalid cast: {0}")]
    InvalidCast(String),

    #[error("Nesting too deep: limit is {0}")]
    NestingTooDeep(usize),
}

impl JsonError {
    pub fn invalid_cast(message: impl Into<String>) -> Self {
        Self::InvalidCast(message.into())
    }

    pub fn overflow(message: impl Into<String>) -> Self {
        Self::Overflow(message.into())
    }
}

/// Result type for JSON operations
pub type JsonResult<T> = Result<T, JsonError>;
