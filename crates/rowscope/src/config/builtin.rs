//! Built-in display configurations for known datasets.

use once_cell::sync::Lazy;

use super::display::{DisplayConfig, FilterField, MetadataField, StatDefinition, StatKind};

static BUILTIN_CONFIGS: Lazy<Vec<DisplayConfig>> = Lazy::new(|| vec![gdpval()]);

/// Curated preset for a dataset id, when one is shipped with the library.
/// Presets win over inference: they encode field choices a heuristic cannot
/// recover, such as which filters are actually interesting.
pub fn builtin_config(dataset_id: &str) -> Option<DisplayConfig> {
    BUILTIN_CONFIGS
        .iter()
        .find(|config| config.dataset == dataset_id)
        .cloned()
}

fn gdpval() -> DisplayConfig {
    DisplayConfig {
        dataset: "openai/gdpval".to_string(),
        name: "GDP Val Task Explorer".to_string(),
        description: "Explore OpenAI's GDP Val Benchmark - 220 Professional Tasks".to_string(),
        id_field: "task_id".to_string(),
        content_field: "prompt".to_string(),
        metadata_fields: vec![
            MetadataField {
                field: "sector".to_string(),
                label: "Sector".to_string(),
                monospace: false,
            },
            MetadataField {
                field: "occupation".to_string(),
                label: "Occupation".to_string(),
                monospace: false,
            },
            MetadataField {
                field: "task_id".to_string(),
                label: "Task ID".to_string(),
                monospace: true,
            },
        ],
        filter_fields: vec![
            FilterField {
                field: "sector".to_string(),
                label: "Sector".to_string(),
            },
            FilterField {
                field: "occupation".to_string(),
                label: "Occupation".to_string(),
            },
        ],
        file_url_field: Some("reference_file_urls".to_string()),
        stats: vec![
            StatDefinition {
                label: "Total Tasks".to_string(),
                kind: StatKind::Count,
                field: None,
            },
            StatDefinition {
                label: "Sectors".to_string(),
                kind: StatKind::UniqueCount,
                field: Some("sector".to_string()),
            },
            StatDefinition {
                label: "Occupations".to_string(),
                kind: StatKind::UniqueCount,
                field: Some("occupation".to_string()),
            },
        ],
    }
}
