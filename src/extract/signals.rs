//! Firmographic signals scanned from the page text

use crate::extract::title_case;
use crate::pipeline::PageView;
use once_cell::sync::Lazy;
use regex::Regex;

pub const COMPETITOR_MENTIONS: &str = "Mentions competitors";
pub const NO_COMPETITOR_MENTIONS: &str = "No competitor mentions";
pub const POSITION_NOT_SPECIFIED: &str = "Not specified";

/// Technology keywords looked up in the lowercased page text
const TECH_KEYWORDS: &[&str] = &[
    "wordpress",
    "shopify",
    "react",
    "angular",
    "django",
    "rails",
    "node",
    "php",
    "aws",
];

static EMPLOYEE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(\d{1,5})\s*(?:employees|staff|team)",
        r"(?i)team\s*of\s*(\d{1,5})\b",
        r"(?i)over\s*(\d{1,5})\s*people",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid employee regex"))
    .collect()
});

static REVENUE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:revenue|sales)\s*(?:of|:)?\s*\$?(\d+\.?\d*\s*[MB]?)",
        r"(?i)\$(\d+\.?\d*\s*[mb]illion)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid revenue regex"))
    .collect()
});

static COMPETITOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)competitors?|alternatives|similar (?:companies|services)")
        .expect("Invalid competitor regex")
});

/// Market position labels with the phrases that signal them, in priority order
static POSITION_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("Leader", r"leader in|market leader|industry leader"),
        ("Top", r"top rated|top provider|top \d+"),
        ("Growing", r"fast growing|rapidly growing"),
    ]
    .iter()
    .map(|(label, pattern)| {
        (
            *label,
            Regex::new(&format!("(?i){}", pattern)).expect("Invalid market position regex"),
        )
    })
    .collect()
});

/// Returns capture group 1 of the first pattern that matches
fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Extracts an approximate head count
///
/// Recognizes "<N> employees/staff/team", "team of <N>" and "over <N> people".
pub fn employee_count(page: &dyn PageView) -> Option<String> {
    first_capture(&EMPLOYEE_REGEXES, page.visible_text())
}

/// Extracts a revenue figure such as "$12M" or "$3.5 billion"
pub fn revenue(page: &dyn PageView) -> Option<String> {
    first_capture(&REVENUE_REGEXES, page.visible_text())
}

/// Lists known technology keywords mentioned on the page, capitalized
pub fn technologies(page: &dyn PageView) -> Option<String> {
    let text = page.visible_text().to_lowercase();
    let found: Vec<String> = TECH_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| title_case(keyword))
        .collect();

    if found.is_empty() {
        None
    } else {
        Some(found.join(", "))
    }
}

/// Flags pages that talk about competitors or alternatives
pub fn competitors(page: &dyn PageView) -> &'static str {
    if COMPETITOR_REGEX.is_match(page.visible_text()) {
        COMPETITOR_MENTIONS
    } else {
        NO_COMPETITOR_MENTIONS
    }
}

/// Classifies market-position claims as Leader, Top or Growing
pub fn market_position(page: &dyn PageView) -> &'static str {
    let text = page.visible_text();
    POSITION_REGEXES
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(label, _)| *label)
        .unwrap_or(POSITION_NOT_SPECIFIED)
}
