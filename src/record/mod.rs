//! Company records
//!
//! [`CompanyRecord`] is the fixed-schema output of the pipeline. Every field
//! is always a non-empty string: missing data is the [`NOT_AVAILABLE`]
//! sentinel, applied in one place by the assembler's cleaning pass.

mod assemble;

pub use assemble::{assemble, clean, RawProfile, MAX_TEXT_CHARS};

use serde::{Deserialize, Serialize};

/// Placeholder for any field that could not be extracted
pub const NOT_AVAILABLE: &str = "Not available";

/// Prefix of `company_name` on records for URLs that failed
pub const ERROR_PREFIX: &str = "Error: ";

/// Timestamp layout of `last_updated`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One company profile, produced once per input URL
///
/// Serialized field names match the keys of the JSON exports this record is
/// read back from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRecord {
    /// The URL as requested (not the redirect target)
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Company_Name")]
    pub company_name: String,

    /// Up to three addresses, comma-separated
    #[serde(rename = "Email")]
    pub email: String,

    /// Up to three numbers, comma-separated
    #[serde(rename = "Phone")]
    pub phone: String,

    #[serde(rename = "LinkedIn")]
    pub linkedin: String,

    #[serde(rename = "Twitter")]
    pub twitter: String,

    #[serde(rename = "Facebook")]
    pub facebook: String,

    #[serde(rename = "Instagram")]
    pub instagram: String,

    #[serde(rename = "YouTube")]
    pub youtube: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Founded")]
    pub founded_year: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Industry")]
    pub industry: String,

    #[serde(rename = "Employees")]
    pub employee_count: String,

    #[serde(rename = "Revenue")]
    pub revenue: String,

    #[serde(rename = "Technologies")]
    pub technologies: String,

    #[serde(rename = "Competitors")]
    pub competitors_mentioned: String,

    #[serde(rename = "Market_Position")]
    pub market_position: String,

    /// When the record was produced
    #[serde(rename = "Last_Updated")]
    pub last_updated: String,
}

impl CompanyRecord {
    /// Builds the record for a URL whose fetch or parse failed
    ///
    /// `company_name` carries the error, every other field the sentinel.
    pub fn degraded(url: &str, message: &str) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            url: url.to_string(),
            company_name: format!("{}{}", ERROR_PREFIX, message),
            email: na(),
            phone: na(),
            linkedin: na(),
            twitter: na(),
            facebook: na(),
            instagram: na(),
            youtube: na(),
            description: na(),
            founded_year: na(),
            address: na(),
            industry: na(),
            employee_count: na(),
            revenue: na(),
            technologies: na(),
            competitors_mentioned: na(),
            market_position: na(),
            last_updated: timestamp(),
        }
    }

    /// Whether this record stands in for a failed URL
    pub fn is_degraded(&self) -> bool {
        self.company_name.starts_with(ERROR_PREFIX)
    }

    /// All fields with their display names, in schema order
    pub fn fields(&self) -> [(&'static str, &str); 19] {
        [
            ("URL", self.url.as_str()),
            ("Company Name", self.company_name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Facebook", self.facebook.as_str()),
            ("Instagram", self.instagram.as_str()),
            ("YouTube", self.youtube.as_str()),
            ("Description", self.description.as_str()),
            ("Founded", self.founded_year.as_str()),
            ("Address", self.address.as_str()),
            ("Industry", self.industry.as_str()),
            ("Employees", self.employee_count.as_str()),
            ("Revenue", self.revenue.as_str()),
            ("Technologies", self.technologies.as_str()),
            ("Competitors", self.competitors_mentioned.as_str()),
            ("Market Position", self.market_position.as_str()),
            ("Last Updated", self.last_updated.as_str()),
        ]
    }
}

/// Current local time in the record timestamp layout
pub(crate) fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_record() {
        let record = CompanyRecord::degraded("https://down.example/", "Request timeout");

        assert_eq!(record.url, "https://down.example/");
        assert_eq!(record.company_name, "Error: Request timeout");
        assert!(record.is_degraded());
        for (name, value) in record.fields() {
            if name != "URL" && name != "Company Name" && name != "Last Updated" {
                assert_eq!(value, NOT_AVAILABLE, "field {}", name);
            }
        }
        assert_eq!(record.youtube, NOT_AVAILABLE);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_json_keys() {
        let record = CompanyRecord::degraded("https://acme.com", "x");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["URL"], "https://acme.com");
        assert_eq!(json["Company_Name"], "Error: x");
        assert_eq!(json["Market_Position"], NOT_AVAILABLE);
    }

    #[test]
    fn test_missing_json_keys_default_to_empty() {
        let record: CompanyRecord =
            serde_json::from_str(r#"{"URL": "https://acme.com", "Email": "a@acme.com"}"#).unwrap();
        assert_eq!(record.email, "a@acme.com");
        assert_eq!(record.phone, "");
    }
}
