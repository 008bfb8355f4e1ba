//! Edit coordination.
//!
//! One edit attempt at a time, driven by a small state machine:
//! `Idle → AwaitingInput → {Applying, Cancelled} → Idle`. `begin` resolves
//! the column label and hands back the current cell value for the editor
//! surface; the editor's answer arrives later through `resolve`.
//!
//! Recoverable failures (unknown column, non-numeric text, key collision)
//! never escape: they are reported through the injected error channel and
//! the machine returns to `Idle` with the dataset untouched.

use crate::store::DatasetStore;
use alloc::rc::Rc;
use alloc::string::String;
use tabula_core::{CellValue, ColumnRegistry, Element, ElementKey, Error, Field, Result};

/// Injected error-reporting capability. Hosts surface these to the user;
/// tests capture them.
pub type ErrorReporter = Rc<dyn Fn(&Error)>;

/// The editor collaborator's answer for one edit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum EditResponse {
    /// A concrete replacement value, as raw text.
    Submit(String),
    /// The editor was dismissed without a value.
    NoChange,
}

/// State of the current edit attempt.
enum EditState {
    Idle,
    AwaitingInput { key: ElementKey, field: Field },
}

/// Coordinates edit attempts: resolution, validation, and application
/// through the dataset store. Sole writer path into the store.
pub struct EditCoordinator {
    state: EditState,
    reporter: ErrorReporter,
}

impl EditCoordinator {
    /// Creates a coordinator reporting errors through `reporter`.
    pub fn new(reporter: ErrorReporter) -> Self {
        Self {
            state: EditState::Idle,
            reporter,
        }
    }

    /// Returns true if no edit is in flight.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, EditState::Idle)
    }

    /// Returns true if an edit is awaiting the editor's answer.
    #[inline]
    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, EditState::AwaitingInput { .. })
    }

    /// Begins an edit attempt for the record `key` and column `label`.
    ///
    /// On success the machine is `AwaitingInput` and the returned value is
    /// the current content of the targeted cell, to be shown by the editor
    /// surface. Re-entrant requests while one edit is in flight are
    /// rejected without reporting (mirrors "only one modal open"). An
    /// unresolvable label is reported and aborts to `Idle`; so does a key
    /// that is no longer present.
    pub fn begin(
        &mut self,
        registry: &ColumnRegistry,
        store: &DatasetStore,
        key: ElementKey,
        label: &str,
    ) -> Result<CellValue> {
        if !self.is_idle() {
            return Err(Error::EditInProgress);
        }

        let field = match registry.resolve(label) {
            Ok(field) => field,
            Err(err) => {
                (self.reporter)(&err);
                return Err(err);
            }
        };

        let Some(element) = store.get(key) else {
            return Err(Error::NotFound { key });
        };

        let current = element.value_of(field);
        self.state = EditState::AwaitingInput { key, field };
        Ok(current)
    }

    /// Resolves the in-flight edit with the editor's answer.
    ///
    /// `NoChange` cancels; a submitted value is validated against the
    /// field's declared type, coerced, and applied as a whole-record
    /// substitution. Returns true if the dataset was mutated. The machine
    /// is back in `Idle` when this returns, whatever the outcome.
    pub fn resolve(&mut self, store: &mut DatasetStore, response: EditResponse) -> bool {
        let state = core::mem::replace(&mut self.state, EditState::Idle);
        let EditState::AwaitingInput { key, field } = state else {
            // nothing in flight; a stray response is dropped
            return false;
        };

        let text = match response {
            EditResponse::Submit(text) => text,
            EditResponse::NoChange => return false,
        };

        let value = match CellValue::coerce(&text, field.field_type()) {
            Ok(value) => value,
            Err(err) => {
                (self.reporter)(&err);
                return false;
            }
        };

        // Re-keying to an existing record's key is rejected rather than
        // silently creating a duplicate key.
        if field.is_key() {
            if let Some(new_key) = value.as_int() {
                if new_key != key && store.contains_key(new_key) {
                    (self.reporter)(&Error::duplicate_key(new_key));
                    return false;
                }
            }
        }

        let next = {
            let Some(old) = store.get(key) else {
                // record vanished mid-edit; abandon gracefully
                return false;
            };
            match old.with_value(field, value) {
                Ok(next) => next,
                Err(err) => {
                    (self.reporter)(&err);
                    return false;
                }
            }
        };

        store.replace(key, move |_old: &Element| next)
    }

    /// Abandons any in-flight edit without side effects (teardown path).
    pub fn abandon(&mut self) {
        self.state = EditState::Idle;
    }
}
