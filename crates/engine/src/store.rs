//! Canonical dataset store.
//!
//! The store exclusively owns the ordered record sequence. The single
//! mutation point is `replace`: whole-record substitution at the same
//! index, located by key. Observers are notified synchronously after every
//! successful replace, so a caller reading the derived view right after a
//! mutation sees a consistent result.

use alloc::vec::Vec;
use tabula_core::{Element, ElementKey};
use tabula_reactive::{SubscriptionId, SubscriptionManager};

/// Holds the canonical ordered sequence of records.
pub struct DatasetStore {
    rows: Vec<Element>,
    observers: SubscriptionManager<[Element]>,
}

impl DatasetStore {
    /// Creates a store over the given initial records.
    pub fn new(rows: Vec<Element>) -> Self {
        Self {
            rows,
            observers: SubscriptionManager::new(),
        }
    }

    /// Returns the current full ordered sequence. Read-only for callers.
    #[inline]
    pub fn snapshot(&self) -> &[Element] {
        &self.rows
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the record with the given key, if present.
    pub fn get(&self, key: ElementKey) -> Option<&Element> {
        self.rows.iter().find(|e| e.key() == key)
    }

    /// Returns true if a record with the given key exists.
    pub fn contains_key(&self, key: ElementKey) -> bool {
        self.get(key).is_some()
    }

    /// Replaces the record whose key equals `key` with `updater(old)`,
    /// keeping its index. A missing key is a graceful no-op (keys are
    /// assumed stable for the session; this models delete-mid-edit).
    ///
    /// Observers are notified synchronously after a successful replace.
    /// Returns true if a record was replaced.
    pub fn replace<F>(&mut self, key: ElementKey, updater: F) -> bool
    where
        F: FnOnce(&Element) -> Element,
    {
        let Some(index) = self.rows.iter().position(|e| e.key() == key) else {
            return false;
        };
        self.rows[index] = updater(&self.rows[index]);
        self.observers.notify_all(&self.rows);
        true
    }

    /// Subscribes to dataset changes. The callback receives the full
    /// sequence after each successful replace.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&[Element]) + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Unsubscribes by ID.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Returns the number of observers.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Removes all observers.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }
}
