//! Derived filtered view.
//!
//! `FilteredView` pairs the last settled query with the filtered result
//! derived from it and the dataset snapshot it was given. Each recompute
//! consumes exactly one (dataset, query) pair, so the result is never torn
//! across the two inputs. Subscribers receive the full recomputed sequence
//! on every trigger.

use crate::filter;
use alloc::string::String;
use alloc::vec::Vec;
use tabula_core::Element;
use tabula_reactive::{SubscriptionId, SubscriptionManager};

/// The derived filtered view and its render-surface subscriptions.
pub struct FilteredView {
    /// Last settled query, empty at start ("no filter")
    query: String,
    /// Current filtered result
    result: Vec<Element>,
    /// Render-surface subscriptions
    subscriptions: SubscriptionManager<[Element]>,
}

impl FilteredView {
    /// Creates the view seeded from the initial dataset with the empty
    /// query, so the first consumer sees the unfiltered sequence.
    pub fn new(rows: &[Element]) -> Self {
        Self {
            query: String::new(),
            result: rows.to_vec(),
            subscriptions: SubscriptionManager::new(),
        }
    }

    /// Returns the current settled query.
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the current filtered result.
    #[inline]
    pub fn result(&self) -> &[Element] {
        &self.result
    }

    /// Recomputes against a fresh dataset snapshot, keeping the current
    /// query, and notifies subscribers.
    pub fn dataset_changed(&mut self, rows: &[Element]) {
        self.result = filter::compute(rows, &self.query);
        self.subscriptions.notify_all(&self.result);
    }

    /// Adopts a newly settled query, recomputes against the given dataset
    /// snapshot, and notifies subscribers.
    ///
    /// Duplicate settled values are suppressed upstream by the debouncer;
    /// every call here is a genuine recomputation trigger.
    pub fn query_changed(&mut self, query: String, rows: &[Element]) {
        self.query = query;
        self.result = filter::compute(rows, &self.query);
        self.subscriptions.notify_all(&self.result);
    }

    /// Subscribes to view recomputations.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&[Element]) + 'static,
    {
        self.subscriptions.subscribe(callback)
    }

    /// Unsubscribes by ID.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.unsubscribe(id)
    }

    /// Returns the number of subscribers.
    #[inline]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Removes all subscribers.
    pub fn clear_subscriptions(&mut self) {
        self.subscriptions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::RefCell;

    fn seed() -> Vec<Element> {
        vec![
            Element::new(1, "Hydrogen", 1.0079, "H"),
            Element::new(2, "Helium", 4.0026, "He"),
            Element::new(3, "Lithium", 6.941, "Li"),
        ]
    }

    #[test]
    fn test_new_seeds_unfiltered() {
        let rows = seed();
        let view = FilteredView::new(&rows);
        assert_eq!(view.query(), "");
        assert_eq!(view.result(), rows.as_slice());
    }

    #[test]
    fn test_query_changed_recomputes_and_notifies() {
        let rows = seed();
        let mut view = FilteredView::new(&rows);

        let emissions = Rc::new(RefCell::new(Vec::new()));
        let emissions_clone = emissions.clone();
        view.subscribe(move |result: &[Element]| {
            emissions_clone.borrow_mut().push(result.len());
        });

        view.query_changed("he".to_string(), &rows);

        assert_eq!(view.result().len(), 1);
        assert_eq!(view.result()[0].name, "Helium");
        assert_eq!(*emissions.borrow(), vec![1]);
    }

    #[test]
    fn test_dataset_changed_keeps_query() {
        let rows = seed();
        let mut view = FilteredView::new(&rows);
        view.query_changed("lith".to_string(), &rows);
        assert_eq!(view.result().len(), 1);

        // Lithium renamed away; the standing query must apply to the new data
        let mut renamed = seed();
        renamed[2].name = "Sodium".to_string();
        renamed[2].symbol = "Na".to_string();
        view.dataset_changed(&renamed);

        assert_eq!(view.query(), "lith");
        assert!(view.result().is_empty());
    }

    #[test]
    fn test_one_emission_per_trigger() {
        let rows = seed();
        let mut view = FilteredView::new(&rows);

        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        view.subscribe(move |_| *count_clone.borrow_mut() += 1);

        view.query_changed("h".to_string(), &rows);
        view.dataset_changed(&rows);
        view.query_changed("".to_string(), &rows);

        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_clear_subscriptions() {
        let rows = seed();
        let mut view = FilteredView::new(&rows);

        let count = Rc::new(RefCell::new(0));
        let count_clone = count.clone();
        view.subscribe(move |_| *count_clone.borrow_mut() += 1);

        view.clear_subscriptions();
        view.dataset_changed(&rows);

        assert_eq!(*count.borrow(), 0);
        assert_eq!(view.subscription_count(), 0);
    }
}
