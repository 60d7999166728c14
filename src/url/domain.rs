use url::Url;

/// Extracts the lowercase host of a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use company_profiler::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the first label of the host with any leading `www.` removed
///
/// This is the last-resort company name source: `https://www.acme-corp.io/about`
/// yields `acme-corp`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use company_profiler::url::site_label;
///
/// let url = Url::parse("https://www.acme.com/about").unwrap();
/// assert_eq!(site_label(&url), Some("acme".to_string()));
/// ```
pub fn site_label(url: &Url) -> Option<String> {
    let domain = extract_domain(url)?;
    let domain = domain.strip_prefix("www.").unwrap_or(&domain);

    domain
        .split('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

/// Checks whether a URL's host is `domain` or one of its subdomains
///
/// `www.linkedin.com` matches `linkedin.com`; `notlinkedin.com` does not.
pub fn host_matches(url: &Url, domain: &str) -> bool {
    match extract_domain(url) {
        Some(host) => host == domain || host.ends_with(&format!(".{}", domain)),
        None => false,
    }
}
