//! Output traits and error types

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A flat record with a fixed column layout
pub trait CsvRecord {
    /// Column names, written once as the first row
    const HEADER: &'static [&'static str];

    /// Field values in `HEADER` order
    fn fields(&self) -> Vec<String>;
}
