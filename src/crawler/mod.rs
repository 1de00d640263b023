//! Crawler module for page fetching and record extraction
//!
//! This module contains the scraping pipeline:
//! - HTTP fetching without retries
//! - Quote, author and next-link extraction
//! - Pagination over listing pages
//! - Author deduplication and bio fetching

mod authors;
mod fetcher;
mod parser;
mod records;
mod walker;

pub use authors::{author_slug, author_url, collect_authors, AuthorPass};
pub use fetcher::{build_http_client, Fetcher};
pub use parser::{
    find_next_link, join_origin, parse_author, parse_quote, parse_quotes, ListingPage,
    BORN_LOCATION_PREFIX_LEN,
};
pub use records::{Author, Quote};
pub use walker::{walk_pages, Walk, WalkState};

use crate::config::Config;
use crate::output::{write_csv, RunStatistics};
use crate::HarvestError;
use std::path::Path;

/// Runs a complete harvest
///
/// This is the main entry point. It will:
/// 1. Walk every listing page from the configured origin
/// 2. Fetch one bio per distinct author (unless `skip_authors` is set)
/// 3. Write the quotes and authors CSV files
///
/// Page-level failures never end the run; both files are always written.
///
/// # Returns
///
/// * `Ok(RunStatistics)` - Harvest completed and both files were written
/// * `Err(HarvestError)` - The HTTP client could not be built or a file could not be written
pub async fn harvest(config: &Config) -> Result<RunStatistics, HarvestError> {
    let fetcher = Fetcher::with_default_client()?;
    harvest_with(&fetcher, config).await
}

/// Runs a harvest with a caller-supplied fetcher
pub async fn harvest_with(
    fetcher: &Fetcher,
    config: &Config,
) -> Result<RunStatistics, HarvestError> {
    let mut stats = RunStatistics::start();
    let origin = config.site.origin.as_str();

    tracing::info!("Harvesting quotes from {}", origin);
    let walk = walk_pages(fetcher, origin, config.crawler.max_pages).await;
    stats.pages_fetched = walk.pages_fetched;
    stats.listing_failures = walk.failures;

    let author_pass = if config.crawler.skip_authors {
        tracing::info!("Skipping author bios");
        AuthorPass::default()
    } else {
        collect_authors(fetcher, origin, &walk.quotes).await
    };
    stats.bio_fetches = author_pass.fetches;
    stats.bio_failures = author_pass.failures;

    stats.quotes = write_csv(Path::new(&config.output.quotes_path), &walk.quotes)?;
    stats.authors = write_csv(Path::new(&config.output.authors_path), &author_pass.authors)?;

    stats.finish();
    Ok(stats)
}
