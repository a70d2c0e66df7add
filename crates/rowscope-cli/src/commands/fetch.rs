//! Fetch command - materialize a dataset and save a snapshot.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use rowscope::{write_csv, write_json, Retriever, SnapshotMetadata};

use crate::cli::OutputFormat;

pub fn run(
    dataset: String,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let retriever = Retriever::new()?;
    let retrieval = retriever.resolve_config(&dataset);

    println!("{} {}", "Fetching".cyan().bold(), dataset.as_str().white());
    if verbose {
        eprintln!(
            "{} config={} split={}",
            "Resolved:".dimmed(),
            retrieval.config,
            retrieval.split
        );
    }

    let items = retriever.fetch_all_resolved(&retrieval, |loaded, total| {
        print!("\r  {} {}/{} rows", "Loading".cyan(), loaded, total);
        std::io::stdout().flush().ok();
    })?;
    println!();

    let output_path = output.unwrap_or_else(|| {
        let name = dataset.rsplit('/').next().unwrap_or(&dataset);
        PathBuf::from(format!("{}.{}", name, format))
    });

    match format {
        OutputFormat::Json => write_json(&output_path, &items)?,
        OutputFormat::Csv => write_csv(&output_path, &items)?,
    }

    let metadata = SnapshotMetadata::for_file(&retrieval, items.len(), &output_path)?;
    let metadata_path = output_path.with_extension("meta.json");
    metadata.save(&metadata_path)?;

    println!(
        "{} {} ({} rows)",
        "Saved to".green().bold(),
        output_path.display().to_string().white(),
        items.len()
    );
    if verbose {
        eprintln!(
            "{} {} (sha256 {})",
            "Provenance:".dimmed(),
            metadata_path.display(),
            &metadata.hash[..12.min(metadata.hash.len())]
        );
    }

    Ok(())
}
