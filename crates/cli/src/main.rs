//! cardamom - generate order-sheet CSVs from customer orders, using the
//! catalog as the source of truth.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::{Map, Value};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardamom_core::{
    load_config, load_config_from_env, parse_order_text, validate_config, Config, OrderLine,
    OrderMapper,
};

/// Generate a CSV order sheet from a customer order.
///
/// Order lines use "item_code: quantity" or "item_name, quantity", one per
/// line; blank lines and #-comments are ignored.
#[derive(Debug, Parser)]
#[command(name = "cardamom", version, about)]
struct Cli {
    /// TOML configuration file (CARDAMOM_* env vars override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON file (overrides the configured path)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Input file containing order items
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Enter order items interactively
    #[arg(long, conflicts_with = "input")]
    interactive: bool,

    /// Output CSV file path (default from configuration)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include category column in output CSV
    #[arg(long)]
    include_category: bool,

    /// Show catalog statistics and exit
    #[arg(long)]
    stats: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    validate_config(&config).context("Configuration validation failed")?;

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog.path.clone());
    let mapper = OrderMapper::new(catalog_path);

    if cli.stats {
        return show_catalog_stats(&mapper);
    }

    let order_items = if cli.interactive {
        read_interactive_order()?
    } else if let Some(ref input) = cli.input {
        read_order_from_file(input)?
    } else {
        bail!("Please provide --input <file> or use --interactive mode");
    };

    if order_items.is_empty() {
        bail!("No order items to process");
    }

    info!("Processing {} order items...", order_items.len());

    let include_category = cli.include_category || config.output.include_category;
    let (csv_content, issues) = mapper
        .generate_csv_from_order(&order_items, include_category)
        .context("Failed to map order against catalog")?;

    if !issues.is_empty() {
        warn!("Found {} error(s):", issues.len());
        for issue in &issues {
            warn!("  - {}", issue);
        }
    }

    if csv_content.is_empty() {
        bail!("No valid items could be mapped to catalog");
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.path.clone());
    std::fs::write(&output_path, &csv_content)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    let data_rows = csv_content.lines().count().saturating_sub(1);
    info!("Successfully generated CSV: {}", output_path.display());
    info!("Total items in CSV: {}", data_rows);

    Ok(())
}

/// Load configuration from --config, CARDAMOM_CONFIG, or env/defaults.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var("CARDAMOM_CONFIG").ok().map(PathBuf::from));

    match path {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => load_config_from_env().context("Failed to load config from environment"),
    }
}

fn read_order_from_file(path: &Path) -> Result<Vec<OrderLine>> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }

    let order_text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let order_items = parse_order_text(&order_text);
    if order_items.is_empty() {
        bail!("No valid order items found in input file");
    }

    Ok(order_items)
}

fn read_interactive_order() -> Result<Vec<OrderLine>> {
    println!("Interactive Order Entry");
    println!("Enter order items in format: 'item_code: quantity' or 'item_name, quantity'");
    println!("Enter a blank line when done.");

    let stdin = std::io::stdin();
    let mut order_items = Vec::new();
    let mut line_num = 1usize;

    loop {
        print!("Item {line_num}: ");
        std::io::stdout().flush().ok();

        let mut buffer = String::new();
        if stdin.lock().read_line(&mut buffer)? == 0 {
            break;
        }

        let entry = buffer.trim();
        if entry.is_empty() {
            break;
        }

        match parse_order_text(entry).pop() {
            Some(item) => {
                order_items.push(item);
                line_num += 1;
            }
            None => {
                eprintln!("Invalid format. Use 'item_code: quantity' or 'item_name, quantity'");
            }
        }
    }

    Ok(order_items)
}

fn show_catalog_stats(mapper: &OrderMapper) -> Result<()> {
    let stats = mapper.catalog_stats().context("Failed to load catalog")?;

    println!("=== Catalog Statistics ===");
    println!("Total Items: {}", stats.total_items);
    println!("Categories ({}):", stats.categories.len());

    let mut counts: Vec<(&String, &usize)> = stats.category_counts.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (category, count) in counts {
        println!("  - {category}: {count} items");
    }

    if !stats.metadata.is_empty() {
        println!("Catalog Version: {}", metadata_field(&stats.metadata, "version"));
        println!(
            "Generated At: {}",
            metadata_field(&stats.metadata, "generated_at")
        );
    }

    Ok(())
}

fn metadata_field(metadata: &Map<String, Value>, key: &str) -> String {
    match metadata.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "N/A".to_string(),
    }
}
