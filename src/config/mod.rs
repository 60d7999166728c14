//! Configuration module for Company-Profiler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file section falls back to the defaults
//! documented on each field.
//!
//! # Example
//!
//! ```no_run
//! use company_profiler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("profiler.toml")).unwrap();
//! println!("Request timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BatchConfig, Config, FetcherConfig, OutputConfig, DEFAULT_USER_AGENTS};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
