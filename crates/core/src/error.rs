//! Error types for Tabula.

use crate::types::FieldType;
use alloc::string::String;
use core::fmt;

/// Result type alias for Tabula operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Tabula operations.
///
/// Resolution and validation errors are recoverable: they are absorbed by
/// the edit coordinator and reported through the error channel. Type
/// contract violations are a programmer-visible bug class. The input
/// stream failure is terminal for the filter pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A column label could not be resolved to a field.
    UnknownColumn {
        label: String,
    },
    /// Text supplied for a numeric field did not parse as a number.
    NotANumber {
        input: String,
    },
    /// Internal mismatch between a field's declared type and the value on hand.
    TypeContract {
        column: String,
        expected: FieldType,
        got: FieldType,
    },
    /// A key-field edit would collide with an existing record's key.
    DuplicateKey {
        key: i64,
    },
    /// An edit was requested while another edit is already in flight.
    EditInProgress,
    /// The target record is no longer present in the dataset.
    NotFound {
        key: i64,
    },
    /// The engine has been torn down; no further operations are accepted.
    EngineClosed,
    /// Invalid column registry definition.
    InvalidRegistry {
        message: String,
    },
    /// The raw input stream failed; the filter pipeline is terminated.
    InputStreamFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownColumn { label } => {
                write!(f, "Column \"{}\" does not exist", label)
            }
            Error::NotANumber { input } => {
                write!(
                    f,
                    "This field should contain a number, not a text (got \"{}\")",
                    input
                )
            }
            Error::TypeContract {
                column,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Wrong input data type for column {}: expected {:?}, got {:?}",
                    column, expected, got
                )
            }
            Error::DuplicateKey { key } => {
                write!(f, "A record with position {} already exists", key)
            }
            Error::EditInProgress => {
                write!(f, "Another edit is already in progress")
            }
            Error::NotFound { key } => {
                write!(f, "No record with position {}", key)
            }
            Error::EngineClosed => {
                write!(f, "Engine has been torn down")
            }
            Error::InvalidRegistry { message } => {
                write!(f, "Invalid column registry: {}", message)
            }
            Error::InputStreamFailed => {
                write!(f, "Input stream failed, please recreate the engine")
            }
        }
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(label: impl Into<String>) -> Self {
        Error::UnknownColumn {
            label: label.into(),
        }
    }

    /// Creates a not-a-number validation error.
    pub fn not_a_number(input: impl Into<String>) -> Self {
        Error::NotANumber {
            input: input.into(),
        }
    }

    /// Creates a type contract violation error.
    pub fn type_contract(column: impl Into<String>, expected: FieldType, got: FieldType) -> Self {
        Error::TypeContract {
            column: column.into(),
            expected,
            got,
        }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(key: i64) -> Self {
        Error::DuplicateKey { key }
    }

    /// Creates an invalid registry error.
    pub fn invalid_registry(message: impl Into<String>) -> Self {
        Error::InvalidRegistry {
            message: message.into(),
        }
    }

    /// Returns true if this error is recoverable (absorbed by the
    /// coordinator and reported, never propagated).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::InputStreamFailed)
    }
}
