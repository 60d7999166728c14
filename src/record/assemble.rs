//! Record assembly and cleaning
//!
//! [`assemble`] runs every extractor against one page and hands the raw
//! results to [`clean`], the single place where truncation and the
//! [`NOT_AVAILABLE`] sentinel are applied.

use crate::extract::{self, SocialLinks};
use crate::pipeline::PageView;
use crate::record::{timestamp, CompanyRecord, NOT_AVAILABLE};
use url::Url;

/// Longest description or address kept before truncation
pub const MAX_TEXT_CHARS: usize = 200;

/// Extractor output before cleaning
#[derive(Debug, Clone, Default)]
pub struct RawProfile {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social: SocialLinks,
    pub description: Option<String>,
    pub founded_year: Option<String>,
    pub address: Option<String>,
    pub industry: Option<String>,
    pub employee_count: Option<String>,
    pub revenue: Option<String>,
    pub technologies: Option<String>,
    pub competitors_mentioned: Option<String>,
    pub market_position: Option<String>,
}

impl RawProfile {
    /// Runs all extractors against a page
    pub fn extract(page: &dyn PageView, requested_url: &Url) -> Self {
        Self {
            company_name: extract::company_name(page, requested_url),
            email: extract::emails(page),
            phone: extract::phones(page),
            social: extract::social_links(page),
            description: extract::description(page),
            founded_year: extract::founded_year(page),
            address: extract::address(page),
            industry: extract::industry(page),
            employee_count: extract::employee_count(page),
            revenue: extract::revenue(page),
            technologies: extract::technologies(page),
            competitors_mentioned: Some(extract::competitors(page).to_string()),
            market_position: Some(extract::market_position(page).to_string()),
        }
    }
}

/// Builds the record for one page
///
/// `url` is the URL as requested; it is stored verbatim and used for the
/// company-name fallback. When it does not parse, the page's own URL is used
/// for the fallback instead.
pub fn assemble(url: &str, page: &dyn PageView) -> CompanyRecord {
    let requested = Url::parse(url).unwrap_or_else(|_| page.base_url().clone());
    let raw = RawProfile::extract(page, &requested);

    tracing::debug!(
        "Extracted {} for {}",
        raw.company_name.as_deref().unwrap_or("no name"),
        url
    );

    clean(url, raw)
}

/// Applies truncation and sentinel defaults to raw extractor output
pub fn clean(url: &str, raw: RawProfile) -> CompanyRecord {
    CompanyRecord {
        url: or_sentinel(Some(url.to_string())),
        company_name: or_sentinel(raw.company_name),
        email: or_sentinel(raw.email),
        phone: or_sentinel(raw.phone),
        linkedin: or_sentinel(raw.social.linkedin),
        twitter: or_sentinel(raw.social.twitter),
        facebook: or_sentinel(raw.social.facebook),
        instagram: or_sentinel(raw.social.instagram),
        youtube: or_sentinel(raw.social.youtube),
        description: or_sentinel(raw.description.map(|d| truncate_text(&d))),
        founded_year: or_sentinel(raw.founded_year),
        address: or_sentinel(raw.address.map(|a| truncate_text(&a))),
        industry: or_sentinel(raw.industry),
        employee_count: or_sentinel(raw.employee_count),
        revenue: or_sentinel(raw.revenue),
        technologies: or_sentinel(raw.technologies),
        competitors_mentioned: or_sentinel(raw.competitors_mentioned),
        market_position: or_sentinel(raw.market_position),
        last_updated: timestamp(),
    }
}

/// Cuts text longer than [`MAX_TEXT_CHARS`] and appends "..."
fn truncate_text(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_CHARS {
        format!("{}...", extract::truncate_chars(text, MAX_TEXT_CHARS))
    } else {
        text.to_string()
    }
}

/// Maps absent, blank and "-" values to the sentinel
fn or_sentinel(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() && v.trim() != "-" => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}
