//! Configuration module for Quote-Harvest
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file the crate runs on [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use quote_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Quotes will be written to: {}", config.output.quotes_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig, DEFAULT_ORIGIN};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
