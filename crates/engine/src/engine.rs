//! Top-level engine wiring.
//!
//! `TableEngine` owns the canonical dataset, the debounced query stream,
//! the derived filtered view and the edit coordinator, and routes the
//! inbound surfaces (raw input, edit requests) to them. The store notifies
//! the shared view through a weak reference, so a successful replace is
//! reflected in the filtered view before the mutating call returns.

use crate::edit::{EditCoordinator, EditResponse, ErrorReporter};
use crate::store::DatasetStore;
use crate::view::FilteredView;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use tabula_core::{CellValue, ColumnRegistry, Element, ElementKey, Error, Result};
use tabula_reactive::{Debouncer, SubscriptionId, DEFAULT_QUIET_PERIOD};

/// Engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Debounce quiet period, in ticks.
    pub quiet_period: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

/// The reactive state/filter/edit engine.
///
/// Single conceptual writer path: all dataset mutations funnel through
/// `resolve_edit`, so the edit coordinator's mutual-exclusion guard is the
/// only concurrency control. Everything runs as discrete, non-overlapping
/// callbacks on one logical thread.
pub struct TableEngine {
    registry: ColumnRegistry,
    store: DatasetStore,
    debouncer: Debouncer,
    view: Rc<RefCell<FilteredView>>,
    edits: EditCoordinator,
    reporter: ErrorReporter,
    /// Latched once the raw input stream fails; the filter pipeline is
    /// dead from then on, only recreation recovers.
    failed: bool,
    torn_down: bool,
}

impl TableEngine {
    /// Creates an engine over the initial dataset with default config.
    pub fn new(rows: Vec<Element>, reporter: ErrorReporter) -> Self {
        Self::with_config(rows, EngineConfig::default(), reporter)
    }

    /// Creates an engine with explicit configuration.
    pub fn with_config(rows: Vec<Element>, config: EngineConfig, reporter: ErrorReporter) -> Self {
        let mut store = DatasetStore::new(rows);
        let view = Rc::new(RefCell::new(FilteredView::new(store.snapshot())));

        let weak = Rc::downgrade(&view);
        store.subscribe(move |rows: &[Element]| {
            if let Some(view) = weak.upgrade() {
                view.borrow_mut().dataset_changed(rows);
            }
        });

        Self {
            registry: ColumnRegistry::new(),
            store,
            debouncer: Debouncer::with_quiet_period(config.quiet_period),
            view,
            edits: EditCoordinator::new(reporter.clone()),
            reporter,
            failed: false,
            torn_down: false,
        }
    }

    /// Inbound raw per-keystroke text. Restarts the quiet-period timer.
    /// Ignored once the pipeline has failed or the engine is torn down.
    pub fn on_input(&mut self, text: &str) {
        if self.failed || self.torn_down {
            return;
        }
        self.debouncer.on_input(text);
    }

    /// Advances the logical clock. If the quiet period elapses, the
    /// settled query is adopted and the filtered view recomputed.
    pub fn advance(&mut self, ticks: u64) {
        if self.failed || self.torn_down {
            return;
        }
        if let Some(query) = self.debouncer.advance(ticks) {
            self.view
                .borrow_mut()
                .query_changed(query, self.store.snapshot());
        }
    }

    /// Signals that the raw input stream itself failed. Fatal to the
    /// filter pipeline: the pending timer is cancelled, further input is
    /// ignored, and a one-time terminal notification is reported.
    pub fn on_input_failure(&mut self) {
        if self.failed || self.torn_down {
            return;
        }
        self.failed = true;
        self.debouncer.teardown();
        (self.reporter)(&Error::InputStreamFailed);
    }

    /// Inbound edit request for a record and column label.
    ///
    /// On success returns the current cell value to present in the editor;
    /// the editor's answer comes back through `resolve_edit`.
    pub fn request_edit(&mut self, key: ElementKey, label: &str) -> Result<CellValue> {
        if self.torn_down {
            return Err(Error::EngineClosed);
        }
        self.edits.begin(&self.registry, &self.store, key, label)
    }

    /// Resolves the in-flight edit with the editor's answer. Returns true
    /// if the dataset was mutated (and the view already recomputed).
    pub fn resolve_edit(&mut self, response: EditResponse) -> bool {
        if self.torn_down {
            return false;
        }
        self.edits.resolve(&mut self.store, response)
    }

    /// Returns true if an edit is awaiting the editor's answer.
    #[inline]
    pub fn is_edit_in_flight(&self) -> bool {
        self.edits.is_awaiting()
    }

    /// Subscribes the render surface to filtered-view recomputations.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&[Element]) + 'static,
    {
        self.view.borrow_mut().subscribe(callback)
    }

    /// Unsubscribes by ID.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.view.borrow_mut().unsubscribe(id)
    }

    /// Returns the current filtered view.
    pub fn filtered(&self) -> Vec<Element> {
        self.view.borrow().result().to_vec()
    }

    /// Returns the current settled query.
    pub fn query(&self) -> String {
        String::from(self.view.borrow().query())
    }

    /// Returns the canonical dataset snapshot.
    #[inline]
    pub fn snapshot(&self) -> &[Element] {
        self.store.snapshot()
    }

    /// Returns the column registry.
    #[inline]
    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// Returns the ordered column labels for display.
    pub fn displayed_columns(&self) -> Vec<String> {
        self.registry.displayed_columns()
    }

    /// Returns the per-column width string.
    pub fn column_width(&self) -> String {
        self.registry.column_width()
    }

    /// Returns true if the input stream has failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Returns true if the engine has been torn down.
    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Tears the engine down: cancels the pending debounce timer, abandons
    /// any in-flight edit without side effects, and drops all
    /// subscriptions. Deterministic; nothing fires afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.debouncer.teardown();
        self.edits.abandon();
        self.view.borrow_mut().clear_subscriptions();
        self.store.clear_observers();
    }
}
