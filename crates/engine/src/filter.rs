//! Pure filter computation.
//!
//! `compute` is a pure function of (dataset snapshot, settled query); it is
//! recomputed wholesale whenever either input changes, never patched
//! incrementally. Being side-effect-free, it is safe to invoke from both
//! trigger paths (dataset-changed, query-changed) without coordination.

use alloc::string::String;
use alloc::vec::Vec;
use tabula_core::{CellValue, Element};

/// Returns true if the record matches the query.
///
/// Match rule: the lowercased query is a substring of at least one of the
/// lowercased `name`, the rendered `position`, the lowercased `symbol`, or
/// the rendered `weight`. An empty query matches every record — this is
/// the "no filter" default and must be preserved.
pub fn matches(element: &Element, query: &str) -> bool {
    let query: String = query.to_lowercase();
    matches_lowered(element, &query)
}

fn matches_lowered(element: &Element, query: &str) -> bool {
    element.name.to_lowercase().contains(query)
        || CellValue::Int(element.position).render().contains(query)
        || element.symbol.to_lowercase().contains(query)
        || CellValue::Float(element.weight).render().contains(query)
}

/// Computes the filtered view: records matching `query`, in dataset order.
pub fn compute(rows: &[Element], query: &str) -> Vec<Element> {
    let query: String = query.to_lowercase();
    rows.iter()
        .filter(|e| matches_lowered(e, &query))
        .cloned()
        .collect()
}
