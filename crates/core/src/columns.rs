//! Column registry for Tabula.
//!
//! A fixed bidirectional mapping between logical fields and their external
//! column labels. In the default configuration labels coincide with the
//! logical names, but the indirection is deliberate: filtering and editing
//! resolve "which field does this label mean" only through this registry.

use crate::element::Field;
use crate::error::{Error, Result};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Bidirectional field ↔ label mapping, total over the four fields.
pub struct ColumnRegistry {
    /// Label per field, in `Field::ALL` order
    labels: [String; 4],
    /// Label → field reverse index
    by_label: HashMap<String, Field>,
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnRegistry {
    /// Creates the default registry where each label equals the field's
    /// logical name.
    pub fn new() -> Self {
        let mut by_label = HashMap::with_capacity(Field::ALL.len());
        let labels = Field::ALL.map(|field| {
            let label = field.logical_name().to_string();
            by_label.insert(label.clone(), field);
            label
        });
        Self { labels, by_label }
    }

    /// Creates a registry from explicit (field, label) pairs.
    ///
    /// The mapping must cover every field exactly once and labels must be
    /// distinct; anything else is an `InvalidRegistry` error.
    pub fn from_pairs(pairs: Vec<(Field, String)>) -> Result<Self> {
        let mut labels: [Option<String>; 4] = [None, None, None, None];
        let mut by_label = HashMap::with_capacity(Field::ALL.len());

        for (field, label) in pairs {
            if by_label.insert(label.clone(), field).is_some() {
                return Err(Error::invalid_registry(format!(
                    "duplicate label \"{}\"",
                    label
                )));
            }
            let slot = &mut labels[Self::index_of(field)];
            if slot.is_some() {
                return Err(Error::invalid_registry(format!(
                    "field {} mapped twice",
                    field.logical_name()
                )));
            }
            *slot = Some(label);
        }

        let mut resolved: Vec<String> = Vec::with_capacity(Field::ALL.len());
        for (i, slot) in labels.into_iter().enumerate() {
            match slot {
                Some(label) => resolved.push(label),
                None => {
                    return Err(Error::invalid_registry(format!(
                        "field {} has no label",
                        Field::ALL[i].logical_name()
                    )));
                }
            }
        }
        let labels: [String; 4] = resolved
            .try_into()
            .map_err(|_| Error::invalid_registry("mapping must cover all four fields"))?;

        Ok(Self { labels, by_label })
    }

    #[inline]
    fn index_of(field: Field) -> usize {
        match field {
            Field::Position => 0,
            Field::Name => 1,
            Field::Weight => 2,
            Field::Symbol => 3,
        }
    }

    /// Returns the external label of a field. Total and pure.
    pub fn label_of(&self, field: Field) -> &str {
        &self.labels[Self::index_of(field)]
    }

    /// Resolves an external label back to its field.
    ///
    /// Fails with `UnknownColumn`; callers decide whether to abort or
    /// no-op and notify the user.
    pub fn resolve(&self, label: &str) -> Result<Field> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| Error::unknown_column(label))
    }

    /// Returns the ordered column labels for display.
    pub fn displayed_columns(&self) -> Vec<String> {
        self.labels.to_vec()
    }

    /// Returns the per-column width string: `100 / column_count` percent.
    pub fn column_width(&self) -> String {
        format!("{}%", 100.0 / self.labels.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_default_registry_is_total() {
        let registry = ColumnRegistry::new();
        for field in Field::ALL {
            let label = registry.label_of(field);
            assert_eq!(registry.resolve(label).unwrap(), field);
        }
    }

    #[test]
    fn test_resolve_unknown_label() {
        let registry = ColumnRegistry::new();
        let err = registry.resolve("mass").unwrap_err();
        match err {
            Error::UnknownColumn { label } => assert_eq!(label, "mass"),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_displayed_columns_ordered() {
        let registry = ColumnRegistry::new();
        assert_eq!(
            registry.displayed_columns(),
            vec!["position", "name", "weight", "symbol"]
        );
    }

    #[test]
    fn test_column_width() {
        let registry = ColumnRegistry::new();
        assert_eq!(registry.column_width(), "25%");
    }

    #[test]
    fn test_custom_labels() {
        let registry = ColumnRegistry::from_pairs(vec![
            (Field::Position, "No.".to_string()),
            (Field::Name, "Element".to_string()),
            (Field::Weight, "Atomic weight".to_string()),
            (Field::Symbol, "Symbol".to_string()),
        ])
        .unwrap();

        assert_eq!(registry.label_of(Field::Weight), "Atomic weight");
        assert_eq!(registry.resolve("No.").unwrap(), Field::Position);
        assert!(registry.resolve("position").is_err());
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let result = ColumnRegistry::from_pairs(vec![
            (Field::Position, "a".to_string()),
            (Field::Name, "a".to_string()),
            (Field::Weight, "b".to_string()),
            (Field::Symbol, "c".to_string()),
        ]);
        assert!(matches!(result, Err(Error::InvalidRegistry { .. })));
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = ColumnRegistry::from_pairs(vec![
            (Field::Position, "a".to_string()),
            (Field::Name, "b".to_string()),
        ]);
        assert!(matches!(result, Err(Error::InvalidRegistry { .. })));
    }

    #[test]
    fn test_field_mapped_twice_rejected() {
        let result = ColumnRegistry::from_pairs(vec![
            (Field::Position, "a".to_string()),
            (Field::Position, "b".to_string()),
            (Field::Weight, "c".to_string()),
            (Field::Symbol, "d".to_string()),
        ]);
        assert!(matches!(result, Err(Error::InvalidRegistry { .. })));
    }
}
