//! URL handling module for Company-Profiler
//!
//! This module provides seed URL validation, splitting of comma-separated
//! seed input, and host helpers used by the extractors.

mod domain;
mod validate;

// Re-export main functions
pub use domain::{extract_domain, host_matches, site_label};
pub use validate::{split_seed_input, validate_seed_url};
