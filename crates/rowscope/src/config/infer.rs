//! Display-config inference from a single sample row.
//!
//! When no explicit configuration exists for a dataset, the field-name and
//! value-shape heuristics here derive one from the first row. The result is a
//! pure function of `(dataset_id, sample)`: same input, same config.

use serde_json::Value;

use crate::item::DatasetItem;

use super::display::{DisplayConfig, FilterField, MetadataField, StatDefinition, StatKind};

/// Substrings that mark a field as the main content, in preference order.
const CONTENT_PATTERNS: [&str; 5] = ["prompt", "text", "question", "content", "instruction"];

/// String values at or above this length are treated as free text rather
/// than categorical metadata.
const MAX_CATEGORICAL_LEN: usize = 200;

/// Metadata fields taken from the categorical candidates.
const METADATA_FIELD_LIMIT: usize = 3;

/// Filter fields taken from the categorical candidates.
const FILTER_FIELD_LIMIT: usize = 2;

/// Derive a display configuration from one sample row.
///
/// Field selections follow the sample's field order. A sample with zero
/// fields is a known gap: selections degrade to empty field names rather
/// than panicking, and the resulting config renders nothing useful.
pub fn generate_default_config(dataset_id: &str, sample: &DatasetItem) -> DisplayConfig {
    let fields: Vec<&str> = sample.field_names().collect();

    let id_field = fields
        .iter()
        .find(|f| f.contains("id") || **f == "idx")
        .or_else(|| fields.first())
        .copied()
        .unwrap_or_default();

    let content_field = find_content_field(&fields).unwrap_or_default();

    // Short string fields are categorical candidates; long strings are
    // free-text payloads and excluded.
    let string_fields: Vec<&str> = fields
        .iter()
        .filter(|f| **f != content_field)
        .filter(|f| match sample.get(f) {
            Some(Value::String(s)) => s.chars().count() < MAX_CATEGORICAL_LEN,
            _ => false,
        })
        .copied()
        .collect();

    let metadata_fields: Vec<MetadataField> = string_fields
        .iter()
        .take(METADATA_FIELD_LIMIT)
        .map(|f| MetadataField {
            field: f.to_string(),
            label: format_label(f),
            monospace: f.contains("id"),
        })
        .collect();

    let filter_fields: Vec<FilterField> = string_fields
        .iter()
        .take(FILTER_FIELD_LIMIT)
        .map(|f| FilterField {
            field: f.to_string(),
            label: format_label(f),
        })
        .collect();

    let file_url_field = fields
        .iter()
        .find(|f| f.contains("file") && (f.contains("url") || f.contains("link")))
        .map(|f| f.to_string());

    let stats = std::iter::once(StatDefinition {
        label: "Total Items".to_string(),
        kind: StatKind::Count,
        field: None,
    })
    .chain(filter_fields.iter().map(|f| StatDefinition {
        label: f.label.clone(),
        kind: StatKind::UniqueCount,
        field: Some(f.field.clone()),
    }))
    .collect();

    let short_name = dataset_id.rsplit('/').next().unwrap_or(dataset_id);

    DisplayConfig {
        dataset: dataset_id.to_string(),
        name: format_label(short_name),
        description: format!("Exploring {} dataset", dataset_id),
        id_field: id_field.to_string(),
        content_field: content_field.to_string(),
        metadata_fields,
        filter_fields,
        file_url_field,
        stats,
    }
}

/// Pick the content field: patterns are checked in preference order, and for
/// the first pattern any field matches, the first matching field wins. Falls
/// back to the second field, then the first.
fn find_content_field<'a>(fields: &[&'a str]) -> Option<&'a str> {
    for pattern in CONTENT_PATTERNS {
        if let Some(field) = fields.iter().find(|f| f.contains(pattern)) {
            return Some(*field);
        }
    }
    fields.get(1).or_else(|| fields.first()).copied()
}

/// Humanize a field name into a display label: separators become spaces and
/// each word is capitalized. Consecutive separators are preserved as-is.
pub fn format_label(field: &str) -> String {
    field
        .replace(['_', '-'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> DatasetItem {
        serde_json::from_value(value).unwrap()
    }

    fn gdpval_sample() -> DatasetItem {
        item(json!({
            "task_id": "T1",
            "sector": "Tech",
            "occupation": "Engineer",
            "prompt": "Write a detailed report about quarterly earnings...",
        }))
    }

    #[test]
    fn test_gdpval_field_selection() {
        let config = generate_default_config("openai/gdpval", &gdpval_sample());

        assert_eq!(config.id_field, "task_id");
        assert_eq!(config.content_field, "prompt");
        assert_eq!(config.name, "Gdpval");
        assert_eq!(config.description, "Exploring openai/gdpval dataset");

        let metadata: Vec<&str> = config
            .metadata_fields
            .iter()
            .map(|m| m.field.as_str())
            .collect();
        assert_eq!(metadata, vec!["task_id", "sector", "occupation"]);
        assert!(config.metadata_fields[0].monospace);
        assert!(!config.metadata_fields[1].monospace);

        let filters: Vec<&str> = config
            .filter_fields
            .iter()
            .map(|f| f.field.as_str())
            .collect();
        assert_eq!(filters, vec!["task_id", "sector"]);
    }

    #[test]
    fn test_gdpval_stats() {
        let config = generate_default_config("openai/gdpval", &gdpval_sample());

        assert_eq!(config.stats.len(), 3);
        assert_eq!(config.stats[0].label, "Total Items");
        assert_eq!(config.stats[0].kind, StatKind::Count);
        assert_eq!(config.stats[1].kind, StatKind::UniqueCount);
        assert_eq!(config.stats[1].field.as_deref(), Some("task_id"));
        assert_eq!(config.stats[2].field.as_deref(), Some("sector"));
    }

    #[test]
    fn test_idx_is_an_id_field() {
        let config = generate_default_config(
            "squad",
            &item(json!({"idx": 3, "question": "Why?", "answer": "Because."})),
        );
        assert_eq!(config.id_field, "idx");
        assert_eq!(config.content_field, "question");
    }

    #[test]
    fn test_id_falls_back_to_first_field() {
        let config = generate_default_config(
            "demo",
            &item(json!({"alpha": "a", "beta": "b"})),
        );
        assert_eq!(config.id_field, "alpha");
    }

    #[test]
    fn test_content_pattern_preference_beats_field_order() {
        // "text" precedes "prompt" in field order, but "prompt" is the
        // higher-preference pattern.
        let config = generate_default_config(
            "demo",
            &item(json!({"text": "short", "prompt": "the task"})),
        );
        assert_eq!(config.content_field, "prompt");
    }

    #[test]
    fn test_content_falls_back_to_second_field() {
        let config = generate_default_config(
            "demo",
            &item(json!({"alpha": "a", "beta": "b", "gamma": "c"})),
        );
        assert_eq!(config.content_field, "beta");
    }

    #[test]
    fn test_content_falls_back_to_only_field() {
        let config = generate_default_config("demo", &item(json!({"alpha": "a"})));
        assert_eq!(config.content_field, "alpha");
    }

    #[test]
    fn test_long_strings_excluded_from_metadata() {
        let long_text = "x".repeat(200);
        let config = generate_default_config(
            "demo",
            &item(json!({
                "sample_id": "S1",
                "essay": long_text,
                "grade": "A",
                "prompt": "Grade the essay.",
            })),
        );
        let metadata: Vec<&str> = config
            .metadata_fields
            .iter()
            .map(|m| m.field.as_str())
            .collect();
        assert_eq!(metadata, vec!["sample_id", "grade"]);
    }

    #[test]
    fn test_non_string_values_excluded_from_metadata() {
        let config = generate_default_config(
            "demo",
            &item(json!({
                "task_id": "T1",
                "score": 10,
                "tags": ["a", "b"],
                "prompt": "Do the thing.",
            })),
        );
        let metadata: Vec<&str> = config
            .metadata_fields
            .iter()
            .map(|m| m.field.as_str())
            .collect();
        assert_eq!(metadata, vec!["task_id"]);
    }

    #[test]
    fn test_file_url_field_detection() {
        let with = generate_default_config(
            "demo",
            &item(json!({"task_id": "T1", "prompt": "p", "reference_file_urls": []})),
        );
        assert_eq!(
            with.file_url_field.as_deref(),
            Some("reference_file_urls")
        );

        let without = generate_default_config(
            "demo",
            &item(json!({"task_id": "T1", "prompt": "p", "file_count": 3})),
        );
        assert_eq!(without.file_url_field, None);
    }

    #[test]
    fn test_dataset_name_without_slash() {
        let config = generate_default_config("gdpval", &gdpval_sample());
        assert_eq!(config.name, "Gdpval");
    }

    #[test]
    fn test_deterministic() {
        let sample = gdpval_sample();
        let first = generate_default_config("openai/gdpval", &sample);
        let second = generate_default_config("openai/gdpval", &sample);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inferred_fields_exist_in_sample() {
        let sample = gdpval_sample();
        let config = generate_default_config("openai/gdpval", &sample);
        assert!(config.missing_fields(&sample).is_empty());
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("reference_file_urls"), "Reference File Urls");
        assert_eq!(format_label("task-id"), "Task Id");
        assert_eq!(format_label("sector"), "Sector");
    }

    #[test]
    fn test_format_label_preserves_consecutive_separators() {
        assert_eq!(format_label("a__b"), "A  B");
    }
}
