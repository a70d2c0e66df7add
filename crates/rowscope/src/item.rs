//! Dataset row representation and field access.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a dataset: an ordered mapping from field name to an arbitrary
/// JSON value. Field order is the order the API returned, which drives every
/// downstream field-selection heuristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetItem {
    fields: IndexMap<String, Value>,
}

impl DatasetItem {
    /// Create an empty item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the item has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in their original order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// True if the item has a field with this name.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Insert a field, preserving insertion order.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// String value of a field. `None` when the field is absent or holds a
    /// non-string value.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Scalar rendering of a field: strings as-is, numbers and booleans via
    /// their display form. `None` for absent fields, nulls, arrays, and
    /// objects, so composite values never masquerade as filterable strings.
    pub fn scalar_string(&self, field: &str) -> Option<String> {
        scalar_string(self.fields.get(field)?)
    }

    /// String elements of an array-valued field, skipping non-string
    /// entries. Empty when the field is absent or not an array.
    pub fn string_list(&self, field: &str) -> Vec<&str> {
        match self.fields.get(field) {
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

impl FromIterator<(String, Value)> for DatasetItem {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Scalar rendering shared by item access, filtering, and stats.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DatasetItem {
        serde_json::from_value(json!({
            "task_id": "T1",
            "score": 42,
            "done": true,
            "note": null,
            "files": ["a.pdf", 7, "b.csv"],
        }))
        .unwrap()
    }

    #[test]
    fn test_field_order_preserved() {
        let item = sample();
        let names: Vec<&str> = item.field_names().collect();
        assert_eq!(names, vec!["task_id", "score", "done", "note", "files"]);
    }

    #[test]
    fn test_scalar_string_variants() {
        let item = sample();
        assert_eq!(item.scalar_string("task_id"), Some("T1".to_string()));
        assert_eq!(item.scalar_string("score"), Some("42".to_string()));
        assert_eq!(item.scalar_string("done"), Some("true".to_string()));
        assert_eq!(item.scalar_string("note"), None);
        assert_eq!(item.scalar_string("files"), None);
        assert_eq!(item.scalar_string("missing"), None);
    }

    #[test]
    fn test_text_only_matches_strings() {
        let item = sample();
        assert_eq!(item.text("task_id"), Some("T1"));
        assert_eq!(item.text("score"), None);
    }

    #[test]
    fn test_string_list_skips_non_strings() {
        let item = sample();
        assert_eq!(item.string_list("files"), vec!["a.pdf", "b.csv"]);
        assert!(item.string_list("task_id").is_empty());
        assert!(item.string_list("missing").is_empty());
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut item = DatasetItem::new();
        item.insert("zulu", json!("z"));
        item.insert("alpha", json!("a"));
        assert_eq!(item.len(), 2);
        let names: Vec<&str> = item.field_names().collect();
        assert_eq!(names, vec!["zulu", "alpha"]);
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let item = sample();
        let text = serde_json::to_string(&item).unwrap();
        let back: DatasetItem = serde_json::from_str(&text).unwrap();
        assert_eq!(item, back);
    }
}
