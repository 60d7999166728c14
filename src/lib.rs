//! Company-Profiler: structured company profiles from company websites
//!
//! This crate fetches a list of seed URLs, parses each page and runs a set of
//! independent heuristic extractors against it to fill a fixed-schema
//! [`CompanyRecord`]. Failures are isolated per URL: a page that cannot be
//! fetched still yields a degraded record.

pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod url;

use thiserror::Error;

/// Main error type for Company-Profiler operations
#[derive(Debug, Error)]
pub enum ProfilerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while retrieving a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Errors raised while building a document from fetched markup
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid base URL '{url}': {message}")]
    BaseUrl { url: String, message: String },
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
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{profile_urls, Coordinator, Document, PageView};
pub use record::{assemble, CompanyRecord, NOT_AVAILABLE};
