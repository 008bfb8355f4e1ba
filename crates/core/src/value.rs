//! Runtime cell values for Tabula.
//!
//! This module defines the `CellValue` enum which represents the value held
//! by a single table cell, together with the text coercion rules used when
//! an edit supplies a replacement value as raw text.

use crate::error::{Error, Result};
use crate::types::FieldType;
use alloc::string::{String, ToString};
use core::fmt;

/// A value held by a single table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    Text(String),
}

impl CellValue {
    /// Returns the declared type this value satisfies.
    pub fn field_type(&self) -> FieldType {
        match self {
            CellValue::Int(_) => FieldType::Int,
            CellValue::Float(_) => FieldType::Float,
            CellValue::Text(_) => FieldType::Text,
        }
    }

    /// Returns the i64 value if this is an Int, None otherwise.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 value if this is a Float, None otherwise.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is Text, None otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Renders the canonical display string for this value.
    ///
    /// This is the exact text the filter predicate matches against, so
    /// numeric rendering must be stable (shortest round-trip form).
    pub fn render(&self) -> String {
        match self {
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Text(v) => v.clone(),
        }
    }

    /// Coerces raw text into a value satisfying the given declared type.
    ///
    /// Numeric types require the text to parse; `Text` accepts any string.
    /// Returns a `NotANumber` validation error when parsing fails.
    pub fn coerce(text: &str, ty: FieldType) -> Result<CellValue> {
        match ty {
            FieldType::Int => text
                .trim()
                .parse::<i64>()
                .map(CellValue::Int)
                .map_err(|_| Error::not_a_number(text)),
            FieldType::Float => text
                .trim()
                .parse::<f64>()
                .map(CellValue::Float)
                .map_err(|_| Error::not_a_number(text)),
            FieldType::Text => Ok(CellValue::Text(text.to_string())),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}
