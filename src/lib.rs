//! Quote-Harvest: a paginated quote scraper
//!
//! This crate walks the listing pages of a quotes site, extracts every quote,
//! fetches one bio page per distinct author, and writes both record sets to
//! CSV files.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for a harvest run
///
/// These errors end the run. Recoverable scraping failures are reported as
/// [`ScrapeError`] and degraded to defaults where they occur.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Failures while fetching or parsing a single page
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to fetch {url}: {cause}")]
    Fetch { url: String, cause: String },

    #[error("Malformed page {url}: {message}")]
    MalformedPage { url: String, message: String },
}

impl ScrapeError {
    /// Attaches the page URL to a parse failure raised without one
    pub fn at(self, page_url: &str) -> Self {
        match self {
            Self::MalformedPage { url, message } if url.is_empty() => Self::MalformedPage {
                url: page_url.to_string(),
                message,
            },
            other => other,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPage {
            url: String::new(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for page fetch and parse operations
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{harvest, Author, Quote};
