//! CLI command implementations.

pub mod explore;
pub mod fetch;
pub mod info;
pub mod sample;

use std::path::Path;

use colored::Colorize;
use rowscope::{builtin_config, generate_default_config, DatasetItem, DisplayConfig, Retriever};

/// Resolve the display configuration for a dataset: an explicit config file
/// wins, then a built-in preset, then inference from a sample row.
///
/// `sample` lets callers that already fetched a row skip the extra request;
/// otherwise one is fetched when inference is needed. Sampling failure is the
/// only fatal case here.
pub(crate) fn resolve_display_config(
    retriever: &Retriever,
    dataset: &str,
    config_path: Option<&Path>,
    sample: Option<&DatasetItem>,
    verbose: bool,
) -> Result<DisplayConfig, Box<dyn std::error::Error>> {
    if let Some(path) = config_path {
        let config = DisplayConfig::load(path)?;
        if verbose {
            eprintln!(
                "{} {}",
                "Loaded config from".dimmed(),
                path.display().to_string().white()
            );
        }
        return Ok(config);
    }

    if let Some(config) = builtin_config(dataset) {
        if verbose {
            eprintln!("{}", "Using built-in configuration".dimmed());
        }
        return Ok(config);
    }

    let fetched;
    let sample = match sample {
        Some(sample) => sample,
        None => {
            fetched = retriever
                .fetch_sample(dataset)
                .ok_or("Failed to fetch dataset sample.")?;
            &fetched
        }
    };

    if verbose {
        eprintln!("{}", "Inferred configuration from sample row".dimmed());
    }
    Ok(generate_default_config(dataset, sample))
}
