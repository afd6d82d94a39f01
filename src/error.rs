//! Error types for the field codec.

use std::io;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for codec and field conversion operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested representation is not legal for the column type.
    #[error("Type conversion error: cannot convert {from} to {to}{}", detail(.message))]
    TypeConversion {
        from: String,
        to: String,
        message: Option<String>,
    },

    /// A value does not fit in the declared capacity of a fixed-width column.
    #[error("Data truncation: attempted to write {attempted} bytes, column allows {allowed}")]
    Truncation { attempted: usize, allowed: usize },

    /// A narrowing numeric conversion would lose magnitude.
    #[error("Value {value} out of range for {target}")]
    Overflow { value: String, target: &'static str },

    /// Malformed text or temporal input.
    #[error("Malformed input: {message}")]
    Malformed { message: String },

    /// Raw buffer length does not match the fixed width of its type.
    #[error("Bad {type_name} encoding: expected {expected} bytes, got {actual}")]
    DecodeLength {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Wire type not supported by this codec.
    #[error("Unsupported wire type: {wire_type} (subtype {sub_type})")]
    UnsupportedType { wire_type: i32, sub_type: i32 },

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Invalid argument passed by the caller.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// I/O error while pulling from or pushing to a caller-supplied stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

impl Error {
    /// Create a type conversion error naming source and target type.
    pub fn type_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::TypeConversion {
            from: from.into(),
            to: to.into(),
            message: None,
        }
    }

    /// Create a type conversion error with extra context.
    pub fn type_conversion_with(
        from: impl Into<String>,
        to: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::TypeConversion {
            from: from.into(),
            to: to.into(),
            message: Some(message.into()),
        }
    }

    /// Create an overflow error.
    pub fn overflow(value: impl ToString, target: &'static str) -> Self {
        Self::Overflow {
            value: value.to_string(),
            target,
        }
    }

    /// Create a malformed input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error means the row shape and the actual bytes disagree.
    ///
    /// Such errors abort the current row operation and are not worth retrying.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::DecodeLength { .. })
    }
}
