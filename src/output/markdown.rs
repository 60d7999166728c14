//! Markdown table rendering for terminal output

use crate::record::CompanyRecord;

/// Columns shown in the table, same set and order as the CSV export
const TABLE_COLUMNS: [&str; 11] = [
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

/// Formats records as a markdown table, one row per record
///
/// # Arguments
///
/// * `records` - The records to render, in batch order
///
/// # Returns
///
/// The table as a string; only the header rows when `records` is empty
pub fn format_markdown_table(records: &[CompanyRecord]) -> String {
    let mut md = String::new();

    md.push_str(&format!("| {} |\n", TABLE_COLUMNS.join(" | ")));
    md.push_str(&format!(
        "|{}\n",
        TABLE_COLUMNS
            .iter()
            .map(|c| format!("{}|", "-".repeat(c.len() + 2)))
            .collect::<String>()
    ));

    for record in records {
        let cells = [
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
        ];
        let row: Vec<String> = cells.iter().map(|cell| escape_cell(cell)).collect();
        md.push_str(&format!("| {} |\n", row.join(" | ")));
    }

    md
}

/// Keeps a value on one table row
fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
