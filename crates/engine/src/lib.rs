//! Tabula Engine - Reactive state/filter/edit engine.
//!
//! The engine owns a canonical tabular dataset, derives a filtered view
//! from a debounced free-text query, and applies cell edits coming from an
//! external editor surface back into the dataset, with type-aware
//! validation routed by column name.
//!
//! # Components
//!
//! - `DatasetStore`: canonical record sequence, whole-record replacement
//!   by key, synchronous observer notification
//! - `filter`: pure (dataset, query) → filtered sequence computation
//! - `FilteredView`: derived view recomputed on either trigger path
//! - `EditCoordinator`: one-at-a-time edit state machine with validation
//! - `TableEngine`: the wiring, plus teardown and input-failure handling
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use tabula_core::Element;
//! use tabula_engine::{EditResponse, TableEngine};
//!
//! let reporter = Rc::new(|err: &tabula_core::Error| {
//!     eprintln!("{}", err);
//! });
//! let mut engine = TableEngine::new(
//!     vec![
//!         Element::new(1, "Hydrogen", 1.0079, "H"),
//!         Element::new(2, "Helium", 4.0026, "He"),
//!     ],
//!     reporter,
//! );
//!
//! // debounced filtering
//! engine.on_input("he");
//! engine.advance(2000);
//! assert_eq!(engine.filtered().len(), 1);
//!
//! // cell editing
//! let current = engine.request_edit(2, "weight").unwrap();
//! assert_eq!(current.as_float(), Some(4.0026));
//! engine.resolve_edit(EditResponse::Submit("4.1".into()));
//! ```

#![no_std]

extern crate alloc;

pub mod edit;
pub mod engine;
pub mod filter;
pub mod store;
pub mod view;

pub use edit::{EditCoordinator, EditResponse, ErrorReporter};
pub use engine::{EngineConfig, TableEngine};
pub use store::DatasetStore;
pub use view::FilteredView;

// Re-export commonly used types from dependencies
pub use tabula_core::{CellValue, ColumnRegistry, Element, ElementKey, Error, Field, FieldType};
pub use tabula_reactive::{Debouncer, SubscriptionId, DEFAULT_QUIET_PERIOD};
