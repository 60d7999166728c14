//! Batch statistics
//!
//! Counts how many URLs of a batch produced a real profile and how often each
//! field could be filled.

use crate::extract::{NO_COMPETITOR_MENTIONS, POSITION_NOT_SPECIFIED};
use crate::record::{CompanyRecord, NOT_AVAILABLE};

/// Fields left out of the fill counts; they are always set
const ALWAYS_SET: [&str; 2] = ["URL", "Last Updated"];

/// Values that mean nothing was found
const EMPTY_VALUES: [&str; 3] = [NOT_AVAILABLE, NO_COMPETITOR_MENTIONS, POSITION_NOT_SPECIFIED];

/// Batch statistics summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Number of records in the batch
    pub total: usize,

    /// Records built from a fetched page
    pub successful: usize,

    /// Records standing in for a failed URL
    pub degraded: usize,

    /// Per field, how many successful records hold a found value
    pub field_fill: Vec<(&'static str, usize)>,
}

impl BatchStatistics {
    /// Computes statistics for a finished batch
    pub fn from_records(records: &[CompanyRecord]) -> Self {
        let mut field_fill: Vec<(&'static str, usize)> = CompanyRecord::default()
            .fields()
            .iter()
            .filter(|(name, _)| !ALWAYS_SET.contains(name))
            .map(|(name, _)| (*name, 0))
            .collect();

        let mut degraded = 0;
        for record in records {
            if record.is_degraded() {
                degraded += 1;
                continue;
            }
            for (name, value) in record.fields() {
                if value.is_empty() || EMPTY_VALUES.contains(&value) {
                    continue;
                }
                if let Some(entry) = field_fill.iter_mut().find(|(n, _)| *n == name) {
                    entry.1 += 1;
                }
            }
        }

        Self {
            total: records.len(),
            successful: records.len() - degraded,
            degraded,
            field_fill,
        }
    }

    /// Share of records built from a fetched page, in percent
    pub fn success_rate(&self) -> f64 {
        if self.total > 0 {
            (self.successful as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &BatchStatistics) {
    println!("=== Batch Statistics ===\n");

    println!("Overview:");
    println!("  URLs processed: {}", stats.total);
    println!("  Profiles extracted: {}", stats.successful);
    println!("  Failed URLs: {}", stats.degraded);
    println!();

    if stats.successful > 0 {
        println!("Fields Found:");
        for (name, count) in &stats.field_fill {
            let percentage = (*count as f64 / stats.successful as f64) * 100.0;
            println!("  {}: {} ({:.1}%)", name, count, percentage);
        }
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} / {} URLs)",
        stats.success_rate(),
        stats.successful,
        stats.total
    );
}
