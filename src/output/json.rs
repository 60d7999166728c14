//! JSON export and re-import of record lists
//!
//! Records are written with their external field names so a saved export can
//! be read back later, e.g. to produce a CSV without fetching again. Missing
//! keys in an imported file become empty strings.

use crate::output::OutputResult;
use crate::record::CompanyRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Writes records as a pretty-printed JSON array
pub fn write_json<W: Write>(records: &[CompanyRecord], writer: W) -> OutputResult<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Reads a JSON array of records
pub fn read_json<R: Read>(reader: R) -> OutputResult<Vec<CompanyRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes the JSON export to a file
pub fn export_json(records: &[CompanyRecord], output_path: &Path) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    write_json(records, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        "Exported {} records to JSON: {}",
        records.len(),
        output_path.display()
    );
    Ok(())
}

/// Loads a previously exported record list
pub fn load_json(input_path: &Path) -> OutputResult<Vec<CompanyRecord>> {
    let records = read_json(BufReader::new(File::open(input_path)?))?;
    tracing::debug!(
        "Loaded {} records from {}",
        records.len(),
        input_path.display()
    );
    Ok(records)
}
