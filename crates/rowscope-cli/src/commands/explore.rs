//! Explore command - fetch a dataset and step through it interactively.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use rowscope::{DatasetItem, DisplayConfig, ExplorerSession, Retriever, RowscopeError};

use super::resolve_display_config;

pub fn run(
    dataset: String,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let retriever = Retriever::new()?;

    let config = resolve_display_config(
        &retriever,
        &dataset,
        config_path.as_deref(),
        None,
        verbose,
    )?;

    println!("{}", config.name.bold());
    println!("{}", config.description.as_str().dimmed());
    println!();

    let items = retriever.fetch_all(&dataset, |loaded, total| {
        print!("\r  {} {}/{} rows", "Loading".cyan(), loaded, total);
        std::io::stdout().flush().ok();
    })?;
    println!();

    if items.is_empty() {
        return Err(RowscopeError::EmptyDataset(dataset).into());
    }

    let mut session = ExplorerSession::new(config, items);

    print_stats(&session);
    println!();
    print_item(&session);

    let stdin = std::io::stdin();
    loop {
        print!("{} ", ">".cyan().bold());
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] | ["show"] => print_item(&session),
            ["n"] | ["next"] => {
                if session.next() {
                    print_item(&session);
                } else {
                    println!("Already at the last item.");
                }
            }
            ["p"] | ["prev"] => {
                if session.prev() {
                    print_item(&session);
                } else {
                    println!("Already at the first item.");
                }
            }
            ["r"] | ["random"] => {
                if session.random() {
                    print_item(&session);
                } else {
                    println!("No items match the selected filters.");
                }
            }
            ["g", position] | ["goto", position] => {
                let moved = position
                    .parse::<usize>()
                    .ok()
                    .is_some_and(|n| n >= 1 && session.goto(n - 1));
                if moved {
                    print_item(&session);
                } else {
                    println!("Position out of range (1-{}).", session.len());
                }
            }
            ["f", field, value] | ["filter", field, value] => {
                session.set_filter(*field, *value);
                print_filter_state(&session);
            }
            ["c"] | ["clear"] => {
                session.clear_all_filters();
                print_filter_state(&session);
            }
            ["c", field] | ["clear", field] => {
                session.clear_filter(field);
                print_filter_state(&session);
            }
            ["v", field] | ["values", field] => {
                let values = session.filter_values(field);
                if values.is_empty() {
                    println!("No values for field '{}'.", field);
                } else {
                    println!("{}", values.join(", "));
                }
            }
            ["s"] | ["stats"] => print_stats(&session),
            ["h"] | ["help"] | ["?"] => print_help(),
            ["q"] | ["quit"] | ["exit"] => break,
            _ => println!("Unknown command. Type 'h' for help."),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  n / next            next item");
    println!("  p / prev            previous item");
    println!("  r / random          random item");
    println!("  g <n>               go to item n");
    println!("  f <field> <value>   filter field to an exact value");
    println!("  c [field]           clear one filter, or all");
    println!("  v <field>           list distinct values of a field");
    println!("  s / stats           dataset statistics");
    println!("  q / quit            leave");
}

fn print_stats(session: &ExplorerSession) {
    let rendered: Vec<String> = session
        .stats()
        .iter()
        .map(|stat| format!("{} {}", stat.value.to_string().bold(), stat.label))
        .collect();
    println!("{}", rendered.join("  |  "));
}

fn print_filter_state(session: &ExplorerSession) {
    if session.active_filters().is_empty() {
        println!("No active filters; {} items.", session.len());
    } else {
        let active: Vec<String> = session
            .active_filters()
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        println!("{} -> {} items.", active.join(", "), session.len());
    }
    if session.is_empty() {
        println!("No items match the selected filters.");
    } else {
        print_item(session);
    }
}

fn print_item(session: &ExplorerSession) {
    let Some(item) = session.current() else {
        println!("No items match the selected filters.");
        return;
    };
    let config = session.config();

    println!();
    println!(
        "{} {} of {}",
        "Item".dimmed(),
        session.position() + 1,
        session.len()
    );

    for meta in &config.metadata_fields {
        let value = item
            .scalar_string(&meta.field)
            .unwrap_or_else(|| "-".to_string());
        if meta.monospace {
            println!("{:16} {}", meta.label, value.as_str().yellow());
        } else {
            println!("{:16} {}", meta.label, value);
        }
    }

    print_content(item, config);
    print_files(item, config);
    println!();
}

fn print_content(item: &DatasetItem, config: &DisplayConfig) {
    match item.scalar_string(&config.content_field) {
        Some(content) => {
            println!();
            println!("{}", content);
        }
        None => println!("({} has no content)", config.content_field),
    }
}

fn print_files(item: &DatasetItem, config: &DisplayConfig) {
    let Some(ref file_field) = config.file_url_field else {
        return;
    };
    let urls = item.string_list(file_field);
    if urls.is_empty() {
        return;
    }

    println!();
    println!("{}", "Files:".yellow().bold());
    for url in urls {
        let name = url.rsplit('/').next().unwrap_or(url);
        println!("  {}  {}", name, url.dimmed());
    }
}
