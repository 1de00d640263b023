//! Quote-Harvest main entry point
//!
//! This is the command-line interface for the Quote-Harvest scraper. Run
//! without arguments it scrapes the default site into `quotes.csv` and
//! `authors.csv` in the working directory.

use clap::Parser;
use quote_harvest::config::{load_config_with_hash, validate, Config};
use quote_harvest::crawler::harvest;
use quote_harvest::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Harvest: a paginated quote scraper
///
/// Walks every listing page of a quotes site, fetches one bio per distinct
/// author, and writes quotes and authors to CSV files.
#[derive(Parser, Debug)]
#[command(name = "quote-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A paginated quote scraper", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Site origin to scrape (overrides config)
    #[arg(long, value_name = "URL")]
    origin: Option<String>,

    /// Quotes CSV output path (overrides config)
    #[arg(long, value_name = "FILE")]
    quotes_out: Option<String>,

    /// Authors CSV output path (overrides config)
    #[arg(long, value_name = "FILE")]
    authors_out: Option<String>,

    /// Stop after this many listing pages
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Skip fetching author bios
    #[arg(long)]
    skip_authors: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration without scraping
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, &cli);
    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    match harvest(&config).await {
        Ok(stats) => {
            tracing::info!(
                "Harvest completed: {} quotes, {} authors",
                stats.quotes,
                stats.authors
            );
            if !cli.quiet {
                print_statistics(&stats);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_harvest=info,warn"),
            1 => EnvFilter::new("quote_harvest=debug,info"),
            2 => EnvFilter::new("quote_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line flags on top of the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(origin) = &cli.origin {
        config.site.origin = origin.clone();
    }
    if let Some(path) = &cli.quotes_out {
        config.output.quotes_path = path.clone();
    }
    if let Some(path) = &cli.authors_out {
        config.output.authors_path = path.clone();
    }
    if cli.max_pages.is_some() {
        config.crawler.max_pages = cli.max_pages;
    }
    if cli.skip_authors {
        config.crawler.skip_authors = true;
    }
}

/// Handles the --dry-run mode: prints what a run would do
fn handle_dry_run(config: &Config) {
    println!("=== Quote-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Origin: {}", config.site.origin);

    println!("\nCrawler:");
    match config.crawler.max_pages {
        Some(max) => println!("  Max pages: {}", max),
        None => println!("  Max pages: unlimited"),
    }
    println!("  Fetch author bios: {}", !config.crawler.skip_authors);

    println!("\nOutput:");
    println!("  Quotes: {}", config.output.quotes_path);
    println!("  Authors: {}", config.output.authors_path);

    println!("\n✓ Configuration is valid");
}
