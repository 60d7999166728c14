use crate::{UrlError, UrlResult};
use url::Url;

/// Validates a candidate seed URL
///
/// A seed must be an absolute `http`/`https` URL with a host. Surrounding
/// whitespace is ignored.
///
/// # Examples
///
/// ```
/// use company_profiler::url::validate_seed_url;
///
/// assert!(validate_seed_url(" https://acme.com ").is_ok());
/// assert!(validate_seed_url("acme.com").is_err());
/// assert!(validate_seed_url("ftp://acme.com/").is_err());
/// ```
pub fn validate_seed_url(candidate: &str) -> UrlResult<Url> {
    let url = Url::parse(candidate.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingDomain),
    }
}

/// Splits raw seed input on commas into trimmed, non-empty entries
///
/// Validation is left to [`validate_seed_url`] so callers can report what
/// they dropped.
pub fn split_seed_input<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|input| input.as_ref().split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_seed_urls() {
        assert!(validate_seed_url("https://acme.com").is_ok());
        assert!(validate_seed_url("http://acme.com/about?x=1").is_ok());
        assert!(validate_seed_url("http://127.0.0.1:8080/").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_seed_url("acme.com/about"),
            Err(UrlError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            validate_seed_url("mailto:info@acme.com"),
            Err(UrlError::InvalidScheme(_))
        ));
        assert!(matches!(
            validate_seed_url("ftp://acme.com/"),
            Err(UrlError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(validate_seed_url("").is_err());
        assert!(validate_seed_url("not a url").is_err());
        assert!(validate_seed_url("https://").is_err());
    }

    #[test]
    fn test_split_seed_input() {
        let inputs = vec![
            "https://a.com, https://b.com".to_string(),
            " ,https://c.com,".to_string(),
        ];
        assert_eq!(
            split_seed_input(&inputs),
            vec!["https://a.com", "https://b.com", "https://c.com"]
        );
    }

    #[test]
    fn test_split_seed_input_empty() {
        let inputs: Vec<&str> = vec![];
        assert!(split_seed_input(&inputs).is_empty());
    }
}
