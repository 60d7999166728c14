//! Contact details: emails, phone numbers and postal address

use crate::extract::{first_success, join_unique};
use crate::pipeline::PageView;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of emails or phones kept per page
const MAX_CONTACTS: usize = 3;

/// Personal and placeholder mail domains never reported as company contacts
const EXCLUDED_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "example.com",
];

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{2,3}\)?[-.\s]?\d{2,4}[-.\s]?\d{2,4}")
        .expect("Invalid phone regex")
});

static ADDRESS_CLASS_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["address", "contact-info", "location"]
        .iter()
        .map(|name| Regex::new(&format!("(?i){}", name)).expect("Invalid address class regex"))
        .collect()
});

/// Extracts up to three business email addresses from the page text
///
/// Addresses on free-mail or placeholder domains (and their subdomains) are
/// skipped; duplicates are reported once.
pub fn emails(page: &dyn PageView) -> Option<String> {
    let found = EMAIL_REGEX
        .find_iter(page.visible_text())
        .map(|m| m.as_str().to_string())
        .filter(|email| !is_excluded_email(email));

    join_unique(found, MAX_CONTACTS)
}

fn is_excluded_email(email: &str) -> bool {
    let domain = match email.rsplit_once('@') {
        Some((_, domain)) => domain.to_ascii_lowercase(),
        None => return true,
    };

    EXCLUDED_EMAIL_DOMAINS
        .iter()
        .any(|excluded| domain == *excluded || domain.ends_with(&format!(".{}", excluded)))
}

/// Extracts up to three phone-number-like strings from the page text
///
/// A candidate counts only when it carries at least seven digits.
pub fn phones(page: &dyn PageView) -> Option<String> {
    let found = PHONE_REGEX
        .find_iter(page.visible_text())
        .map(|m| m.as_str().trim().to_string())
        .filter(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= 7);

    join_unique(found, MAX_CONTACTS)
}

/// Extracts a postal address
///
/// Fallback order:
/// 1. text of the first `<address>` element
/// 2. first `p`/`div`/`section` mentioning "address" with 21 to 199 characters
/// 3. first element with a class matching `address`, `contact-info` or `location`
pub fn address(page: &dyn PageView) -> Option<String> {
    first_success(page, &[&from_address_tag, &from_labelled_block, &from_class])
}

fn from_address_tag(page: &dyn PageView) -> Option<String> {
    page.find_first("address").map(|el| el.text)
}

fn from_labelled_block(page: &dyn PageView) -> Option<String> {
    page.find_all(&["p", "div", "section"])
        .into_iter()
        .find(|el| {
            let len = el.text_len();
            len > 20 && len < 200 && el.text.to_lowercase().contains("address")
        })
        .map(|el| el.text)
}

fn from_class(page: &dyn PageView) -> Option<String> {
    ADDRESS_CLASS_REGEXES.iter().find_map(|pattern| {
        page.find_by_class(pattern)
            .map(|el| el.text)
            .filter(|text| !text.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Document;
    use url::Url;

    fn doc(html: &str) -> Document {
        Document::parse(html, Url::parse("https://acmecorp.com/").unwrap())
    }

    #[test]
    fn test_free_mail_excluded() {
        let page = doc("<p>Write to jane@gmail.com, info@acmecorp.com</p>");
        assert_eq!(emails(&page), Some("info@acmecorp.com".to_string()));
    }

    #[test]
    fn test_emails_unique_and_limited() {
        let page = doc(
            "<p>a@acme.io b@acme.io a@acme.io c@acme.io d@acme.io test@example.com</p>",
        );
        assert_eq!(
            emails(&page),
            Some("a@acme.io, b@acme.io, c@acme.io".to_string())
        );
    }

    #[test]
    fn test_no_emails() {
        let page = doc("<p>Only user@hotmail.com and me@mail.yahoo.com here</p>");
        assert_eq!(emails(&page), None);
    }

    #[test]
    fn test_emails_in_scripts_ignored() {
        let page = doc(r#"<script>var e = "hidden@acme.io";</script><p>nothing</p>"#);
        assert_eq!(emails(&page), None);
    }

    #[test]
    fn test_phones_found() {
        let page = doc("<p>Call +1 415-555-0132 or (020) 7946 0958</p>");
        let found = phones(&page).unwrap();
        assert!(found.contains("415-555-0132"));
        assert!(found.contains("7946 0958"));
    }

    #[test]
    fn test_short_numbers_rejected() {
        let page = doc("<p>Room 12 34, floor 5</p>");
        assert_eq!(phones(&page), None);
    }

    #[test]
    fn test_phones_limited_to_three() {
        let page = doc(
            "<p>555-123-4567 / 555-123-4568 / 555-123-4569 / 555-123-4570</p>",
        );
        let found = phones(&page).unwrap();
        assert_eq!(found.split(", ").count(), 3);
    }

    #[test]
    fn test_address_tag() {
        let page = doc("<address>  1 Main St,\n Springfield </address>");
        assert_eq!(address(&page), Some("1 Main St, Springfield".to_string()));
    }

    #[test]
    fn test_address_labelled_block() {
        let page = doc(
            "<div><p>Hello</p><p>Our address: 42 Industrial Way, Leeds</p></div>",
        );
        // The outer div also mentions "address" and comes first in document order.
        assert_eq!(
            address(&page),
            Some("Hello Our address: 42 Industrial Way, Leeds".to_string())
        );
    }

    #[test]
    fn test_address_labelled_block_length_bounds() {
        let page = doc("<p>Address: here</p>");
        assert_eq!(address(&page), None);
    }

    #[test]
    fn test_address_class_fallback() {
        let page = doc(r#"<span class="office-location">Berlin, Germany</span>"#);
        assert_eq!(address(&page), Some("Berlin, Germany".to_string()));
    }
}
