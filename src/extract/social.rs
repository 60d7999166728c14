//! Social profile links

use crate::pipeline::PageView;
use crate::url::host_matches;

/// Social platforms reported on every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
    YouTube,
}

impl SocialPlatform {
    /// All platforms, in the order hrefs are tested against them
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Twitter,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::YouTube,
    ];

    /// Hosts that identify the platform
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            SocialPlatform::LinkedIn => &["linkedin.com"],
            SocialPlatform::Twitter => &["twitter.com", "x.com"],
            SocialPlatform::Facebook => &["facebook.com"],
            SocialPlatform::Instagram => &["instagram.com"],
            SocialPlatform::YouTube => &["youtube.com", "youtu.be"],
        }
    }
}

/// First profile link found for each platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
}

impl SocialLinks {
    fn slot(&mut self, platform: SocialPlatform) -> &mut Option<String> {
        match platform {
            SocialPlatform::LinkedIn => &mut self.linkedin,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::YouTube => &mut self.youtube,
        }
    }

    /// Link for a platform, if one was found
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::LinkedIn => self.linkedin.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Facebook => self.facebook.as_deref(),
            SocialPlatform::Instagram => self.instagram.as_deref(),
            SocialPlatform::YouTube => self.youtube.as_deref(),
        }
    }

    fn is_complete(&self) -> bool {
        SocialPlatform::ALL.iter().all(|p| self.get(*p).is_some())
    }
}

/// Scans anchors for social profile links
///
/// Each href is resolved against the page's base URL and matched on its host,
/// so `/company/linkedin` never counts as LinkedIn while
/// `https://www.linkedin.com/company/acme` does. An href counts for the first
/// platform it matches; the first href per platform wins.
pub fn social_links(page: &dyn PageView) -> SocialLinks {
    let mut links = SocialLinks::default();

    for anchor in page.find_all(&["a"]) {
        let Some(url) = anchor.attr("href").and_then(|href| page.resolve(href)) else {
            continue;
        };

        let platform = SocialPlatform::ALL.into_iter().find(|platform| {
            platform
                .domains()
                .iter()
                .any(|domain| host_matches(&url, domain))
        });

        if let Some(platform) = platform {
            let slot = links.slot(platform);
            if slot.is_none() {
                tracing::trace!("Found {:?} link: {}", platform, url);
                *slot = Some(url.to_string());
            }
        }

        if links.is_complete() {
            break;
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Document;
    use url::Url;

    fn links_of(html: &str) -> SocialLinks {
        let doc = Document::parse(html, Url::parse("https://acme.com/about").unwrap());
        social_links(&doc)
    }

    #[test]
    fn test_absolute_linkedin_link() {
        let links = links_of(r#"<a href="https://linkedin.com/company/acme">in</a>"#);
        assert_eq!(
            links.linkedin.as_deref(),
            Some("https://linkedin.com/company/acme")
        );
    }

    #[test]
    fn test_relative_path_is_not_a_platform() {
        let links = links_of(r#"<a href="/company/linkedin">Our LinkedIn</a>"#);
        assert_eq!(links.linkedin, None);
    }

    #[test]
    fn test_protocol_relative_link_resolved() {
        let links = links_of(r#"<a href="//www.facebook.com/acme">fb</a>"#);
        assert_eq!(
            links.facebook.as_deref(),
            Some("https://www.facebook.com/acme")
        );
    }

    #[test]
    fn test_all_platforms() {
        let links = links_of(
            r#"<a href="https://x.com/acme">x</a>
            <a href="https://www.instagram.com/acme/">ig</a>
            <a href="https://youtu.be/abc123">yt</a>
            <a href="https://www.linkedin.com/company/acme">li</a>
            <a href="https://facebook.com/acme">fb</a>"#,
        );
        assert_eq!(links.twitter.as_deref(), Some("https://x.com/acme"));
        assert_eq!(
            links.instagram.as_deref(),
            Some("https://www.instagram.com/acme/")
        );
        assert_eq!(links.youtube.as_deref(), Some("https://youtu.be/abc123"));
        assert!(links.linkedin.is_some());
        assert!(links.facebook.is_some());
    }

    #[test]
    fn test_first_link_per_platform_wins() {
        let links = links_of(
            r#"<a href="https://twitter.com/acme">1</a><a href="https://twitter.com/other">2</a>"#,
        );
        assert_eq!(links.twitter.as_deref(), Some("https://twitter.com/acme"));
    }

    #[test]
    fn test_lookalike_hosts_ignored() {
        let links = links_of(
            r#"<a href="https://www.netflix.com/">n</a><a href="https://dropbox.com/s/1">d</a>"#,
        );
        assert_eq!(links.twitter, None);
        assert_eq!(links, SocialLinks::default());
    }

    #[test]
    fn test_platform_subdomains_match_but_other_registrable_domains_do_not() {
        let links = links_of(
            r#"<a href="https://linkedin.com.au/company/acme">au</a>
            <a href="https://uk.linkedin.com/company/acme">uk</a>
            <a href="https://m.facebook.com/acme">m</a>
            <a href="https://notyoutube.com/acme">fake</a>"#,
        );
        assert_eq!(
            links.linkedin.as_deref(),
            Some("https://uk.linkedin.com/company/acme")
        );
        assert_eq!(links.facebook.as_deref(), Some("https://m.facebook.com/acme"));
        assert_eq!(links.youtube, None);
    }

    #[test]
    fn test_no_links() {
        assert_eq!(links_of("<p>no anchors</p>"), SocialLinks::default());
    }
}
