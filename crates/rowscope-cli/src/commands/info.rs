//! Info command - show available configs and splits for a dataset.

use colored::Colorize;
use rowscope::Retriever;

pub fn run(dataset: String, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let retriever = Retriever::new()?;

    println!(
        "{} {}",
        "Inspecting".cyan().bold(),
        dataset.as_str().white()
    );

    match retriever.dataset_info(&dataset) {
        Ok(info) if !info.dataset_info.is_empty() => {
            for (config_name, config_info) in &info.dataset_info {
                println!();
                println!("{} {}", "Config:".yellow().bold(), config_name);
                if config_info.splits.is_empty() {
                    println!("  (no splits listed)");
                }
                for split_name in config_info.splits.keys() {
                    println!("  {}", split_name);
                }
                if verbose && !config_info.features.is_null() {
                    println!(
                        "  {} {}",
                        "features:".dimmed(),
                        serde_json::to_string(&config_info.features)?
                    );
                }
            }
        }
        Ok(_) => println!("No metadata listed for this dataset."),
        Err(e) => {
            if verbose {
                eprintln!("{} {}", "Metadata fetch failed:".dimmed(), e);
            }
            println!("Metadata unavailable; retrieval will use the fallback config/split.");
        }
    }

    let retrieval = retriever.resolve_config(&dataset);
    println!();
    println!(
        "{} config={} split={}",
        "Resolved:".green().bold(),
        retrieval.config.as_str().white(),
        retrieval.split.as_str().white()
    );

    Ok(())
}
