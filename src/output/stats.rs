//! Run statistics
//!
//! Counters gathered by a harvest run and printed once it finishes.

use chrono::{DateTime, Utc};

/// Harvest run statistics
#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Listing pages requested
    pub pages_fetched: usize,

    /// Quote rows written
    pub quotes: usize,

    /// Author rows written (one per distinct name)
    pub authors: usize,

    /// Bio pages requested
    pub bio_fetches: usize,

    /// Listing fetch or parse failures replaced by defaults
    pub listing_failures: usize,

    /// Bio fetch or parse failures replaced by empty records
    pub bio_failures: usize,
}

impl RunStatistics {
    /// Starts a new set of statistics stamped with the current time
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_fetched: 0,
            quotes: 0,
            authors: 0,
            bio_fetches: 0,
            listing_failures: 0,
            bio_failures: 0,
        }
    }

    /// Stamps the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Run duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }

    pub fn total_failures(&self) -> usize {
        self.listing_failures + self.bio_failures
    }
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Run:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = stats.duration_seconds() {
        println!("  Duration: {:.2}s", duration);
    }
    println!();

    println!("Records:");
    println!("  Listing pages fetched: {}", stats.pages_fetched);
    println!("  Quotes: {}", stats.quotes);
    println!("  Distinct authors: {}", stats.authors);
    println!("  Bio pages fetched: {}", stats.bio_fetches);
    println!();

    if stats.total_failures() > 0 {
        println!("Failures (replaced by empty defaults):");
        println!("  Listing pages: {}", stats.listing_failures);
        println!("  Author bios: {}", stats.bio_failures);
        println!();
    }
}
