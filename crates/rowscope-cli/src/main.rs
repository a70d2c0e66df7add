//! Rowscope CLI - terminal explorer for remote tabular datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { dataset } => commands::info::run(dataset, cli.verbose),

        Commands::Sample { dataset, config } => commands::sample::run(dataset, config, cli.verbose),

        Commands::Fetch {
            dataset,
            output,
            format,
        } => commands::fetch::run(dataset, output, format, cli.verbose),

        Commands::Explore { dataset, config } => {
            commands::explore::run(dataset, config, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
