//! Sample command - fetch one row and show the display configuration
//! that would govern it.

use std::path::PathBuf;

use colored::Colorize;
use rowscope::Retriever;

use super::resolve_display_config;

pub fn run(
    dataset: String,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let retriever = Retriever::new()?;

    println!("{} {}", "Sampling".cyan().bold(), dataset.as_str().white());

    let sample = retriever
        .fetch_sample(&dataset)
        .ok_or("Failed to fetch dataset sample.")?;

    let config = resolve_display_config(
        &retriever,
        &dataset,
        config_path.as_deref(),
        Some(&sample),
        verbose,
    )?;

    println!();
    println!("{}", config.name.bold());
    println!("{}", config.description.as_str().dimmed());
    println!();
    println!("{:16} {}", "Id field:", config.id_field);
    println!("{:16} {}", "Content field:", config.content_field);
    for meta in &config.metadata_fields {
        let marker = if meta.monospace { " [mono]" } else { "" };
        println!("{:16} {} ({}{})", "Metadata:", meta.field, meta.label, marker);
    }
    for filter in &config.filter_fields {
        println!("{:16} {} ({})", "Filter:", filter.field, filter.label);
    }
    if let Some(ref file_field) = config.file_url_field {
        println!("{:16} {}", "File list:", file_field);
    }

    let missing = config.missing_fields(&sample);
    if !missing.is_empty() {
        println!();
        println!(
            "{} configured fields absent from the sample: {}",
            "Warning:".yellow().bold(),
            missing.join(", ")
        );
    }

    if verbose {
        println!();
        println!("{}", "Sample fields:".yellow().bold());
        for field in sample.field_names() {
            let shape = match sample.get(field) {
                Some(value) if value.is_string() => "string",
                Some(value) if value.is_number() => "number",
                Some(value) if value.is_boolean() => "boolean",
                Some(value) if value.is_array() => "array",
                Some(value) if value.is_object() => "object",
                _ => "null",
            };
            println!("  {:24} {}", field, shape.dimmed());
        }
    }

    Ok(())
}
