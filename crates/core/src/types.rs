//! Declared column types for Tabula.
//!
//! This module defines the type contract a column declares for its cells.

/// Declared type of a column.
///
/// `Int` and `Float` are both numeric for validation purposes: text
/// supplied for either must parse as a number before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point number
    Float,
    /// UTF-8 string
    Text,
}

impl FieldType {
    /// Returns true if text for this type must parse as a number.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Int | FieldType::Float)
    }
}
