//! Record structure for Tabula.
//!
//! This module defines the `Element` record and the `Field` enumeration
//! used to address its columns generically. `Field` replaces stringly-typed
//! property access with a tagged dispatch: getters and whole-record
//! substitution are matched per variant, so an unknown field cannot be
//! addressed at all and a type mismatch is caught at the boundary.

use crate::error::{Error, Result};
use crate::types::FieldType;
use crate::value::CellValue;
use alloc::string::String;

/// Key type for records. `position` is the record's stable key: unique
/// across the dataset and used to locate a record for replacement.
pub type ElementKey = i64;

/// The four addressable fields of an `Element`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Position,
    Name,
    Weight,
    Symbol,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 4] = [Field::Position, Field::Name, Field::Weight, Field::Symbol];

    /// Returns the declared type of this field.
    pub fn field_type(&self) -> FieldType {
        match self {
            Field::Position => FieldType::Int,
            Field::Weight => FieldType::Float,
            Field::Name | Field::Symbol => FieldType::Text,
        }
    }

    /// Returns the logical (internal) name of this field.
    pub fn logical_name(&self) -> &'static str {
        match self {
            Field::Position => "position",
            Field::Name => "name",
            Field::Weight => "weight",
            Field::Symbol => "symbol",
        }
    }

    /// Returns true if this is the key field.
    #[inline]
    pub fn is_key(&self) -> bool {
        matches!(self, Field::Position)
    }
}

/// A single record of the dataset.
///
/// Treated as immutable by convention: mutations go through `with_value`,
/// which produces a fresh record, and the store swaps records wholesale so
/// readers never observe a half-updated record.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub position: ElementKey,
    pub name: String,
    pub weight: f64,
    pub symbol: String,
}

impl Element {
    /// Creates a new element record.
    pub fn new(
        position: ElementKey,
        name: impl Into<String>,
        weight: f64,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            weight,
            symbol: symbol.into(),
        }
    }

    /// Returns the record key.
    #[inline]
    pub fn key(&self) -> ElementKey {
        self.position
    }

    /// Returns the current value of the given field.
    pub fn value_of(&self, field: Field) -> CellValue {
        match field {
            Field::Position => CellValue::Int(self.position),
            Field::Name => CellValue::Text(self.name.clone()),
            Field::Weight => CellValue::Float(self.weight),
            Field::Symbol => CellValue::Text(self.symbol.clone()),
        }
    }

    /// Returns a copy of this record with exactly one field overwritten.
    ///
    /// The value must satisfy the field's declared type; a mismatch is a
    /// `TypeContract` violation (a bug class, not a validation failure —
    /// the coordinator coerces text before calling this).
    pub fn with_value(&self, field: Field, value: CellValue) -> Result<Element> {
        let mut next = self.clone();
        match (field, value) {
            (Field::Position, CellValue::Int(v)) => next.position = v,
            (Field::Name, CellValue::Text(v)) => next.name = v,
            (Field::Weight, CellValue::Float(v)) => next.weight = v,
            (Field::Symbol, CellValue::Text(v)) => next.symbol = v,
            (field, value) => {
                return Err(Error::type_contract(
                    field.logical_name(),
                    field.field_type(),
                    value.field_type(),
                ));
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrogen() -> Element {
        Element::new(1, "Hydrogen", 1.0079, "H")
    }

    #[test]
    fn test_field_types() {
        assert_eq!(Field::Position.field_type(), FieldType::Int);
        assert_eq!(Field::Name.field_type(), FieldType::Text);
        assert_eq!(Field::Weight.field_type(), FieldType::Float);
        assert_eq!(Field::Symbol.field_type(), FieldType::Text);
        assert!(Field::Position.is_key());
        assert!(!Field::Weight.is_key());
    }

    #[test]
    fn test_value_of() {
        let e = hydrogen();
        assert_eq!(e.value_of(Field::Position), CellValue::Int(1));
        assert_eq!(e.value_of(Field::Name), CellValue::Text("Hydrogen".into()));
        assert_eq!(e.value_of(Field::Weight), CellValue::Float(1.0079));
        assert_eq!(e.value_of(Field::Symbol), CellValue::Text("H".into()));
    }

    #[test]
    fn test_with_value_replaces_exactly_one_field() {
        let e = hydrogen();
        let updated = e.with_value(Field::Weight, CellValue::Float(3.14)).unwrap();

        assert_eq!(updated.weight, 3.14);
        assert_eq!(updated.position, e.position);
        assert_eq!(updated.name, e.name);
        assert_eq!(updated.symbol, e.symbol);
        // original untouched
        assert_eq!(e.weight, 1.0079);
    }

    #[test]
    fn test_with_value_rekeys() {
        let e = hydrogen();
        let updated = e.with_value(Field::Position, CellValue::Int(99)).unwrap();
        assert_eq!(updated.key(), 99);
        assert_eq!(e.key(), 1);
    }

    #[test]
    fn test_with_value_type_contract() {
        let e = hydrogen();
        let err = e
            .with_value(Field::Weight, CellValue::Text("abc".into()))
            .unwrap_err();
        match err {
            Error::TypeContract {
                column,
                expected,
                got,
            } => {
                assert_eq!(column, "weight");
                assert_eq!(expected, FieldType::Float);
                assert_eq!(got, FieldType::Text);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_int_into_float_field_is_contract_violation() {
        // coerce() produces Float for Float fields; a raw Int here means
        // a caller skipped coercion.
        let e = hydrogen();
        assert!(e.with_value(Field::Weight, CellValue::Int(3)).is_err());
    }
}
