//! Display configuration: which fields of a dataset to show, filter on, and
//! summarize.

use serde::{Deserialize, Serialize};

use crate::item::DatasetItem;

/// A metadata field shown alongside an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    /// Field name in the dataset row.
    pub field: String,
    /// Human-readable label.
    pub label: String,
    /// Render the value in a monospace face (identifiers).
    #[serde(default, skip_serializing_if = "is_false")]
    pub monospace: bool,
}

/// A field offered as a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    pub field: String,
    pub label: String,
}

/// Kind of summary statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Number of items.
    Count,
    /// Number of distinct values of `field`.
    UniqueCount,
}

/// One summary statistic definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDefinition {
    pub label: String,
    pub kind: StatKind,
    /// Field the statistic is computed over; unused for `Count`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// How to present one dataset: identity and content fields, metadata and
/// filter selections, optional file-list field, and summary statistics.
///
/// Built once, either loaded from a config file, taken from a built-in
/// preset, or inferred from a sample row; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Dataset identifier this config describes.
    pub dataset: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Field used as the item identity.
    pub id_field: String,
    /// Field holding the main content.
    pub content_field: String,
    /// Metadata fields, in display order.
    #[serde(default)]
    pub metadata_fields: Vec<MetadataField>,
    /// Filterable fields, in display order.
    #[serde(default)]
    pub filter_fields: Vec<FilterField>,
    /// Field holding a list of file URLs, when the dataset has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url_field: Option<String>,
    /// Summary statistics, in display order.
    #[serde(default)]
    pub stats: Vec<StatDefinition>,
}

impl DisplayConfig {
    /// Every field name the config references, in first-reference order,
    /// without duplicates.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let candidates = [self.id_field.as_str(), self.content_field.as_str()]
            .into_iter()
            .chain(self.metadata_fields.iter().map(|m| m.field.as_str()))
            .chain(self.filter_fields.iter().map(|f| f.field.as_str()))
            .chain(self.file_url_field.as_deref())
            .chain(self.stats.iter().filter_map(|s| s.field.as_deref()));

        let mut fields: Vec<&str> = Vec::new();
        for field in candidates {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    /// Referenced fields that a given item does not carry. Non-empty output
    /// means the config disagrees with the data it is about to render.
    pub fn missing_fields(&self, item: &DatasetItem) -> Vec<&str> {
        self.referenced_fields()
            .into_iter()
            .filter(|field| !item.contains_field(field))
            .collect()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> DisplayConfig {
        DisplayConfig {
            dataset: "openai/gdpval".to_string(),
            name: "Gdpval".to_string(),
            description: "Exploring openai/gdpval dataset".to_string(),
            id_field: "task_id".to_string(),
            content_field: "prompt".to_string(),
            metadata_fields: vec![MetadataField {
                field: "sector".to_string(),
                label: "Sector".to_string(),
                monospace: false,
            }],
            filter_fields: vec![FilterField {
                field: "sector".to_string(),
                label: "Sector".to_string(),
            }],
            file_url_field: Some("reference_file_urls".to_string()),
            stats: vec![
                StatDefinition {
                    label: "Total Items".to_string(),
                    kind: StatKind::Count,
                    field: None,
                },
                StatDefinition {
                    label: "Sector".to_string(),
                    kind: StatKind::UniqueCount,
                    field: Some("sector".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_referenced_fields_deduplicated_in_order() {
        assert_eq!(
            config().referenced_fields(),
            vec!["task_id", "prompt", "sector", "reference_file_urls"]
        );
    }

    #[test]
    fn test_missing_fields() {
        let item: DatasetItem = serde_json::from_value(json!({
            "task_id": "T1",
            "sector": "Tech",
        }))
        .unwrap();
        assert_eq!(
            config().missing_fields(&item),
            vec!["prompt", "reference_file_urls"]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let original = config();
        let text = serde_json::to_string_pretty(&original).unwrap();
        let back: DisplayConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn test_monospace_defaults_to_false() {
        let parsed: MetadataField =
            serde_json::from_value(json!({"field": "sector", "label": "Sector"})).unwrap();
        assert!(!parsed.monospace);
    }

    #[test]
    fn test_stat_kind_tags() {
        let text = serde_json::to_string(&StatKind::UniqueCount).unwrap();
        assert_eq!(text, "\"unique_count\"");
    }
}
