//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the pipeline, including:
//! - Building the HTTP client with timeouts and redirect policy
//! - Rotating the client identity (user agent) on every request
//! - Resolving the final URL after redirects
//! - Error classification
//!
//! There are no retries: one failed request is one `FetchError`.

use crate::config::FetcherConfig;
use crate::FetchError;
use rand::seq::SliceRandom;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Raw result of a successful request
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Content-Type header value
    pub content_type: Option<String>,

    /// Page body
    pub body: Vec<u8>,
}

/// Pool of client identities, one picked at random per request
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    /// Creates a pool from a list of user agents
    ///
    /// An empty list falls back to the built-in browser identities.
    pub fn new(agents: Vec<String>) -> Self {
        if agents.is_empty() {
            Self::from_config(&FetcherConfig::default())
        } else {
            Self { agents }
        }
    }

    /// Creates a pool from fetcher configuration
    pub fn from_config(config: &FetcherConfig) -> Self {
        Self {
            agents: config.user_agent_pool(),
        }
    }

    /// Picks a user agent for the next request
    pub fn pick(&self) -> &str {
        self.agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(crate::config::DEFAULT_USER_AGENTS[0])
    }

    /// Number of identities in the pool
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Builds an HTTP client with proper configuration
///
/// The user agent is not fixed on the client; [`fetch_page`] sets one per
/// request.
///
/// # Example
///
/// ```no_run
/// use company_profiler::config::FetcherConfig;
/// use company_profiler::pipeline::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .pool_max_idle_per_host(0)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its final location and body
///
/// Non-success status codes are not errors: their bodies are returned and
/// extracted like any other page. Only transport failures (DNS, connect,
/// TLS, timeout, redirect limit, body read) produce a [`FetchError`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `agents` - Identities to rotate through
/// * `url` - The absolute URL to fetch
pub async fn fetch_page(
    client: &Client,
    agents: &UserAgentPool,
    url: &Url,
) -> Result<FetchedPage, FetchError> {
    let user_agent = agents.pick().to_string();
    tracing::debug!("Fetching {} as '{}'", url, user_agent);

    let response = client
        .get(url.clone())
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        tracing::warn!("{} answered HTTP {}, extracting anyway", url, status);
    }
    if final_url != url.as_str() {
        tracing::debug!("{} redirected to {}", url, final_url);
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body: body.to_vec(),
    })
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}
