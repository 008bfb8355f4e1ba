//! Tabula Core - Core types for the Tabula reactive table engine.
//!
//! This crate provides the foundational types shared by the engine:
//!
//! - `FieldType`: Declared column types (Int, Float, Text)
//! - `CellValue`: Runtime cell values with text coercion rules
//! - `Element`: The dataset record, keyed by `position`
//! - `Field`: Tagged enumeration of the four addressable columns
//! - `ColumnRegistry`: Bidirectional field ↔ label mapping
//! - `Error`: Error taxonomy for resolution/validation/contract failures
//!
//! # Example
//!
//! ```rust
//! use tabula_core::{CellValue, ColumnRegistry, Element, Field};
//!
//! let registry = ColumnRegistry::new();
//! let field = registry.resolve("weight").unwrap();
//! assert_eq!(field, Field::Weight);
//!
//! let hydrogen = Element::new(1, "Hydrogen", 1.0079, "H");
//! let value = CellValue::coerce("3.14", field.field_type()).unwrap();
//! let updated = hydrogen.with_value(field, value).unwrap();
//! assert_eq!(updated.weight, 3.14);
//! ```

#![no_std]

extern crate alloc;

mod columns;
mod element;
mod error;
mod types;
mod value;

pub use columns::ColumnRegistry;
pub use element::{Element, ElementKey, Field};
pub use error::{Error, Result};
pub use types::FieldType;
pub use value::CellValue;
