//! Parsed page access for the extractors
//!
//! This module wraps the `scraper` HTML tree behind the [`PageView`] trait so
//! extractors depend only on a small set of queries:
//! - tag lookup (all / first) in document order
//! - class-name matching by regex
//! - visible text of the page and of single elements
//! - the nearest element of a given tag following another element
//! - attribute access and relative link resolution
//!
//! Parsing is tolerant: malformed markup always produces a best-effort tree.

use crate::ParseError;
use regex::Regex;
use scraper::{ElementRef, Html};
use url::Url;

/// Elements whose text is never rendered
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Owned snapshot of a matched element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name
    pub name: String,

    /// Attributes in source order
    pub attrs: Vec<(String, String)>,

    /// Visible text with whitespace collapsed
    pub text: String,

    /// Position of the element in document order
    pub position: usize,
}

impl Element {
    /// Returns the value of an attribute (case-insensitive name)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Number of characters of visible text
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Read-only queries the extractors run against a page
pub trait PageView {
    /// Final URL of the page, used to resolve relative links
    fn base_url(&self) -> &Url;

    /// Text of the `<title>` element
    fn title(&self) -> Option<String>;

    /// Visible text of the whole page (scripts and styles excluded)
    fn visible_text(&self) -> &str;

    /// All elements whose tag is one of `tags`, in document order
    fn find_all(&self, tags: &[&str]) -> Vec<Element>;

    /// First element whose class list has a class matching `pattern`
    fn find_by_class(&self, pattern: &Regex) -> Option<Element>;

    /// Nearest element with tag `tag` after `anchor` in document order
    fn next_following(&self, anchor: &Element, tag: &str) -> Option<Element>;

    /// First element with tag `tag`
    fn find_first(&self, tag: &str) -> Option<Element> {
        self.find_all(&[tag]).into_iter().next()
    }

    /// Content of the first `<meta>` whose `attr` equals `value` and whose
    /// content is non-empty
    fn meta_content(&self, attr: &str, value: &str) -> Option<String> {
        self.find_all(&["meta"]).into_iter().find_map(|meta| {
            let matches = meta
                .attr(attr)
                .map(|v| v.trim().eq_ignore_ascii_case(value))
                .unwrap_or(false);
            if !matches {
                return None;
            }
            meta.attr("content")
                .map(str::trim)
                .filter(|content| !content.is_empty())
                .map(str::to_string)
        })
    }

    /// Resolves an href against the page's base URL
    fn resolve(&self, href: &str) -> Option<Url> {
        resolve_href(self.base_url(), href)
    }
}

/// A parsed HTML page
pub struct Document {
    html: Html,
    base_url: Url,
    text: String,
}

impl Document {
    /// Parses markup into a document
    ///
    /// # Example
    ///
    /// ```
    /// use company_profiler::pipeline::{Document, PageView};
    /// use url::Url;
    ///
    /// let html = r#"<html><head><title>Acme</title></head><body><p>Hello</p></body></html>"#;
    /// let doc = Document::parse(html, Url::parse("https://acme.com/").unwrap());
    /// assert_eq!(doc.title(), Some("Acme".to_string()));
    /// ```
    pub fn parse(markup: &str, base_url: Url) -> Self {
        let html = Html::parse_document(markup);
        let text = visible_text_of(html.root_element());

        Self {
            html,
            base_url,
            text,
        }
    }

    /// Parses raw response bytes, decoding them as UTF-8 (lossy)
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - Parsed document
    /// * `Err(ParseError)` - The base URL is not an absolute URL
    pub fn from_bytes(bytes: &[u8], base_url: &str) -> Result<Self, ParseError> {
        let base = Url::parse(base_url).map_err(|e| ParseError::BaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::parse(&String::from_utf8_lossy(bytes), base))
    }

    /// Elements in document order with their positions
    fn elements(&self) -> impl Iterator<Item = (usize, ElementRef<'_>)> {
        self.html
            .root_element()
            .descendants()
            .enumerate()
            .filter_map(|(position, node)| ElementRef::wrap(node).map(|el| (position, el)))
    }
}

impl PageView for Document {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn title(&self) -> Option<String> {
        self.find_first("title")
            .map(|title| title.text)
            .filter(|text| !text.is_empty())
    }

    fn visible_text(&self) -> &str {
        &self.text
    }

    fn find_all(&self, tags: &[&str]) -> Vec<Element> {
        self.elements()
            .filter(|(_, el)| tags.contains(&el.value().name()))
            .map(|(position, el)| snapshot(position, el))
            .collect()
    }

    fn find_by_class(&self, pattern: &Regex) -> Option<Element> {
        self.elements()
            .find(|(_, el)| el.value().classes().any(|class| pattern.is_match(class)))
            .map(|(position, el)| snapshot(position, el))
    }

    fn next_following(&self, anchor: &Element, tag: &str) -> Option<Element> {
        self.elements()
            .find(|(position, el)| *position > anchor.position && el.value().name() == tag)
            .map(|(position, el)| snapshot(position, el))
    }
}

/// Builds an owned snapshot of an element
fn snapshot(position: usize, el: ElementRef<'_>) -> Element {
    Element {
        name: el.value().name().to_string(),
        attrs: el
            .value()
            .attrs()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        text: visible_text_of(el),
        position,
    }
}

/// Collects the rendered text below an element, whitespace collapsed
fn visible_text_of(el: ElementRef<'_>) -> String {
    let mut words: Vec<&str> = Vec::new();

    for node in el.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map(|e| HIDDEN_TAGS.contains(&e.name()))
                .unwrap_or(false)
        });

        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}

/// Resolves a link href to an absolute HTTP(S) URL
///
/// Returns None for empty hrefs, fragment-only links, `javascript:`,
/// `mailto:`, `tel:` and `data:` links, and anything that does not resolve
/// to an HTTP(S) URL.
pub fn resolve_href(base_url: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    base_url
        .join(href)
        .ok()
        .filter(|url| url.scheme() == "http" || url.scheme() == "https")
}
