//! Extraction pipeline
//!
//! This module contains the per-URL pipeline and its batch driver:
//! - HTTP fetching with a rotating client identity
//! - tolerant HTML parsing behind the [`PageView`] trait
//! - a fixed-rate politeness throttle
//! - the batch coordinator that isolates failures per URL

mod coordinator;
mod document;
mod fetcher;
mod throttle;

pub use coordinator::{profile_page, Coordinator};
pub use document::{resolve_href, Document, Element, PageView};
pub use fetcher::{build_http_client, fetch_page, FetchedPage, UserAgentPool};
pub use throttle::Throttle;

use crate::config::Config;
use crate::record::CompanyRecord;
use crate::ProfilerError;

/// Profiles a batch of URLs
///
/// This is the main library entry point. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Drop syntactically invalid URLs
/// 3. Fetch, parse and extract every remaining URL
/// 4. Return one record per valid URL, in input order
///
/// # Returns
///
/// * `Ok(Vec<CompanyRecord>)` - One record per valid URL; failed URLs yield degraded records
/// * `Err(ProfilerError)` - The configuration is invalid or the HTTP client could not be built
pub async fn profile_urls<S: AsRef<str>>(
    config: Config,
    urls: &[S],
) -> Result<Vec<CompanyRecord>, ProfilerError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run(urls).await)
}
