//! Class label table.
//!
//! Model metadata maps output indexes to human-readable class names. The
//! table is built once from that metadata and consulted during verification;
//! indexes outside the table resolve to nothing and are simply skipped by
//! callers.

use std::collections::HashMap;

use crate::domain::LabelResolver;

/// Index-to-label mapping for a model's output classes.
#[derive(Debug, Clone, Default)]
pub struct ClassLabelTable {
    labels: Vec<String>,
}

impl ClassLabelTable {
    /// Builds a table from labels ordered by class index.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of known classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true when no labels are known.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl LabelResolver for ClassLabelTable {
    fn resolve(&self, class_index: usize) -> Option<&str> {
        self.labels.get(class_index).map(String::as_str)
    }
}

impl LabelResolver for HashMap<usize, String> {
    fn resolve(&self, class_index: usize) -> Option<&str> {
        self.get(&class_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_resolves_by_index() {
        let table = ClassLabelTable::from_labels(["cat", "dog", "bird"]);
        assert_eq!(table.resolve(1), Some("dog"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_unknown_index_resolves_to_none() {
        let table = ClassLabelTable::from_labels(["cat"]);
        assert_eq!(table.resolve(7), None);
    }

    #[test]
    fn test_hashmap_resolver() {
        let mut map = HashMap::new();
        map.insert(2usize, "chair".to_string());
        assert_eq!(map.resolve(2), Some("chair"));
        assert_eq!(map.resolve(0), None);
    }
}
