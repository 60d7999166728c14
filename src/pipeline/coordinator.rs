//! Batch coordinator - runs the pipeline over a list of URLs
//!
//! The coordinator:
//! - validates input URLs, dropping invalid ones
//! - bounds the number of URLs in flight
//! - spaces request starts through the shared throttle
//! - turns any per-URL failure into a degraded record
//! - returns records in input order regardless of completion order

use crate::config::{validate, Config};
use crate::pipeline::document::Document;
use crate::pipeline::fetcher::{build_http_client, fetch_page, FetchedPage, UserAgentPool};
use crate::pipeline::throttle::Throttle;
use crate::record::{assemble, CompanyRecord};
use crate::url::validate_seed_url;
use crate::{ParseError, ProfilerError};
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use url::Url;

/// Main batch coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    agents: Arc<UserAgentPool>,
    throttle: Arc<Throttle>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ProfilerError)` - The configuration is invalid or the HTTP
    ///   client could not be built
    pub fn new(config: Config) -> Result<Self, ProfilerError> {
        validate(&config)?;

        let client = build_http_client(&config.fetcher)?;
        let agents = UserAgentPool::from_config(&config.fetcher);
        let throttle = Throttle::from_millis(config.batch.request_delay_ms);

        Ok(Self {
            config: Arc::new(config),
            client,
            agents: Arc::new(agents),
            throttle: Arc::new(throttle),
        })
    }

    /// Runs the pipeline over a batch of URLs
    ///
    /// Invalid URLs are dropped (logged, not reported as records). Every
    /// valid URL yields exactly one record, in input order. URLs start in
    /// input order, at most `max-concurrent-fetches` at a time, each waiting
    /// on the throttle before its request.
    pub async fn run<S: AsRef<str>>(&self, urls: &[S]) -> Vec<CompanyRecord> {
        let seeds: Vec<(String, Url)> = urls
            .iter()
            .filter_map(|candidate| {
                let candidate = candidate.as_ref().trim();
                match validate_seed_url(candidate) {
                    Ok(url) => Some((candidate.to_string(), url)),
                    Err(e) => {
                        tracing::warn!("Dropping invalid URL '{}': {}", candidate, e);
                        None
                    }
                }
            })
            .collect();

        tracing::info!(
            "Profiling {} URLs ({} dropped as invalid, {} at a time)",
            seeds.len(),
            urls.len() - seeds.len(),
            self.config.batch.max_concurrent_fetches
        );

        let start_time = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.config.batch.max_concurrent_fetches));
        let mut handles = Vec::with_capacity(seeds.len());

        for (requested, url) in seeds {
            // Semaphore is never closed, so acquire cannot fail.
            let permit = semaphore.clone().acquire_owned().await.ok();
            self.throttle.acquire().await;

            let client = self.client.clone();
            let agents = self.agents.clone();
            let task_url = requested.clone();

            let handle = tokio::spawn(async move {
                let record = profile_url(&client, &agents, &task_url, &url).await;
                drop(permit);
                record
            });
            handles.push((requested, handle));
        }

        let mut records = Vec::with_capacity(handles.len());
        for (requested, handle) in handles {
            let record = match handle.await {
                Ok(record) => record,
                Err(e) => {
                    tracing::error!("Worker for {} failed: {}", requested, e);
                    CompanyRecord::degraded(&requested, &format!("worker failed: {}", e))
                }
            };
            records.push(record);
        }

        let degraded = records.iter().filter(|r| r.is_degraded()).count();
        tracing::info!(
            "Batch completed: {} records ({} degraded) in {:?}",
            records.len(),
            degraded,
            start_time.elapsed()
        );

        records
    }
}

/// Fetches and profiles one URL, never failing
async fn profile_url(
    client: &Client,
    agents: &UserAgentPool,
    requested: &str,
    url: &Url,
) -> CompanyRecord {
    let page = match fetch_page(client, agents, url).await {
        Ok(page) => {
            tracing::debug!(
                "{} answered HTTP {} ({}, {} bytes)",
                page.final_url,
                page.status_code,
                page.content_type.as_deref().unwrap_or("no content type"),
                page.body.len()
            );
            page
        }
        Err(e) => {
            tracing::warn!("Fetch failed for {}: {}", requested, e);
            return CompanyRecord::degraded(requested, &e.to_string());
        }
    };

    match profile_page(requested, &page) {
        Ok(record) => {
            tracing::info!("Profiled {} as '{}'", requested, record.company_name);
            record
        }
        Err(e) => {
            tracing::warn!("Parse failed for {}: {}", requested, e);
            CompanyRecord::degraded(requested, &e.to_string())
        }
    }
}

/// Parses a fetched page and assembles its record
///
/// Relative links are resolved against the page's final URL; the record keeps
/// the requested URL.
pub fn profile_page(requested: &str, page: &FetchedPage) -> Result<CompanyRecord, ParseError> {
    let document = Document::from_bytes(&page.body, &page.final_url)?;
    Ok(assemble(requested, &document))
}
