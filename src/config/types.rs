use serde::Deserialize;

/// Origin scraped when no configuration overrides it
pub const DEFAULT_ORIGIN: &str = "https://quotes.toscrape.com";

/// Main configuration structure for Quote-Harvest
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Site being scraped
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute URL of the first listing page; author pages hang off it
    pub origin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Upper bound on listing pages fetched; unbounded when absent
    #[serde(rename = "max-pages")]
    pub max_pages: Option<u32>,

    /// Skip the author bio pass entirely (authors CSV is written with its header only)
    #[serde(rename = "skip-authors")]
    pub skip_authors: bool,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the quotes CSV file
    #[serde(rename = "quotes-path")]
    pub quotes_path: String,

    /// Path of the authors CSV file
    #[serde(rename = "authors-path")]
    pub authors_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quotes_path: "quotes.csv".to_string(),
            authors_path: "authors.csv".to_string(),
        }
    }
}
