//! Descriptive fields: description, founding year and industry

use crate::extract::{first_success, truncate_chars};
use crate::pipeline::PageView;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters kept from a paragraph found after a heading
const EXCERPT_CHARS: usize = 200;

static FOUNDED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:Founded|Established|Est\.?|Since)\s*(?:in\s*)?(\d{4})\b")
        .expect("Invalid founded regex")
});

static COPYRIGHT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:©|\bCopyright\b)[\s©]*(\d{4})(?:\s*[-–]\s*\d{4})?")
        .expect("Invalid copyright regex")
});

static YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("Invalid year regex"));

static FOOTER_CLASS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)footer").expect("Invalid footer class regex"));

/// Extracts a short company description
///
/// Fallback order:
/// 1. `description` or `og:description` meta content
/// 2. first paragraph whose text is 51 to 249 characters long
/// 3. first non-empty paragraph following an `h1`/`h2`/`h3`, cut to 200
///    characters and marked with "..."
pub fn description(page: &dyn PageView) -> Option<String> {
    first_success(
        page,
        &[&from_meta_description, &from_sized_paragraph, &from_heading_paragraph],
    )
}

fn from_meta_description(page: &dyn PageView) -> Option<String> {
    page.meta_content("name", "description")
        .or_else(|| page.meta_content("property", "og:description"))
}

fn from_sized_paragraph(page: &dyn PageView) -> Option<String> {
    page.find_all(&["p"])
        .into_iter()
        .find(|p| {
            let len = p.text_len();
            len > 50 && len < 250
        })
        .map(|p| p.text)
}

fn from_heading_paragraph(page: &dyn PageView) -> Option<String> {
    page.find_all(&["h1", "h2", "h3"])
        .iter()
        .filter_map(|heading| page.next_following(heading, "p"))
        .find(|p| !p.text.is_empty())
        .map(|p| format!("{}...", truncate_chars(&p.text, EXCERPT_CHARS)))
}

/// Extracts the founding year
///
/// Fallback order:
/// 1. "Founded / Established / Est. / Since <year>"
/// 2. copyright notice ("©" or "Copyright" with a year or year range); the
///    first year of a range is reported
/// 3. any 19xx/20xx year inside the footer (`<footer>` or a `footer` class)
pub fn founded_year(page: &dyn PageView) -> Option<String> {
    first_success(page, &[&from_founding_phrase, &from_copyright, &from_footer])
}

fn from_founding_phrase(page: &dyn PageView) -> Option<String> {
    FOUNDED_REGEX
        .captures(page.visible_text())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn from_copyright(page: &dyn PageView) -> Option<String> {
    COPYRIGHT_REGEX
        .captures(page.visible_text())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn from_footer(page: &dyn PageView) -> Option<String> {
    let footer = page
        .find_first("footer")
        .or_else(|| page.find_by_class(&FOOTER_CLASS_REGEX))?;

    YEAR_REGEX
        .find(&footer.text)
        .map(|m| m.as_str().to_string())
}

/// Extracts the industry or business category
///
/// Fallback order:
/// 1. first entry of the `keywords` meta tag
/// 2. first `h1`, then `h2`, then `h3` mentioning "industry", "sector" or "category"
pub fn industry(page: &dyn PageView) -> Option<String> {
    first_success(page, &[&from_meta_keywords, &from_category_heading])
}

fn from_meta_keywords(page: &dyn PageView) -> Option<String> {
    page.meta_content("name", "keywords")
        .and_then(|content| content.split(',').next().map(|kw| kw.trim().to_string()))
}

fn from_category_heading(page: &dyn PageView) -> Option<String> {
    ["h1", "h2", "h3"].iter().find_map(|tag| {
        page.find_all(&[*tag]).into_iter().find_map(|heading| {
            let lowered = heading.text.to_lowercase();
            ["industry", "sector", "category"]
                .iter()
                .any(|word| lowered.contains(word))
                .then_some(heading.text)
        })
    })
}
