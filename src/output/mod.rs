//! Output module for presenting and exporting company records
//!
//! This module handles:
//! - CSV export with the fixed export column set
//! - JSON export and re-import of full record lists
//! - Markdown table rendering for terminal output
//! - Batch statistics

mod csv_export;
mod json;
mod markdown;
pub mod stats;

pub use csv_export::{export_csv, write_csv, CSV_HEADER};
pub use json::{export_json, load_json, read_json, write_json};
pub use markdown::format_markdown_table;
pub use stats::{print_statistics, BatchStatistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
