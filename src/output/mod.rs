//! Output module for writing harvested records
//!
//! This module handles:
//! - Writing quotes and authors as CSV files with fixed headers
//! - Recording and printing run statistics

mod csv_writer;
pub mod stats;
mod traits;

pub use csv_writer::{write_csv, write_records, TAG_SEPARATOR};
pub use stats::{print_statistics, RunStatistics};
pub use traits::{CsvRecord, OutputError, OutputResult};
