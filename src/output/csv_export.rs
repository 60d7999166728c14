//! CSV export
//!
//! The export carries a fixed subset of the record: social links other than
//! LinkedIn and Twitter, industry, employees, revenue and technologies are
//! not exported.

use crate::output::OutputResult;
use crate::record::CompanyRecord;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 11] = [
    "URL",
    "Company Name",
    "Email",
    "Phone",
    "LinkedIn",
    "Twitter",
    "Description",
    "Founded",
    "Address",
    "Competitors",
    "Market Position",
];

/// Writes records as CSV, one row per record in the given order
pub fn write_csv<W: Write>(records: &[CompanyRecord], writer: W) -> OutputResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    for record in records {
        wtr.write_record([
            &record.url,
            &record.company_name,
            &record.email,
            &record.phone,
            &record.linkedin,
            &record.twitter,
            &record.description,
            &record.founded_year,
            &record.address,
            &record.competitors_mentioned,
            &record.market_position,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the CSV export to a file
pub fn export_csv(records: &[CompanyRecord], output_path: &Path) -> OutputResult<()> {
    tracing::debug!(
        "Exporting {} records to CSV: {}",
        records.len(),
        output_path.display()
    );

    let file = File::create(output_path)?;
    write_csv(records, file)?;

    tracing::info!(
        "Exported {} records to CSV: {}",
        records.len(),
        output_path.display()
    );
    Ok(())
}
