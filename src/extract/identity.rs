//! Company name extraction

use crate::extract::{first_success, title_case};
use crate::pipeline::PageView;
use crate::url::site_label;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Boilerplate suffixes stripped from page titles
static TITLE_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" - Home Page$| - Official Site$| \|.*$").expect("Invalid title suffix regex")
});

/// Extracts the company name
///
/// Fallback order:
/// 1. `og:site_name` / `og:title` meta tags
/// 2. `<title>` without a trailing " - Home Page", " - Official Site" or `| ...` suffix
/// 3. First `h1`, then first `h2`, when its text is 4 to 49 characters long
/// 4. First label of the requested URL's host, `www.` stripped, capitalized
pub fn company_name(page: &dyn PageView, requested_url: &Url) -> Option<String> {
    first_success(
        page,
        &[
            &from_open_graph,
            &from_title,
            &from_headings,
            &|_: &dyn PageView| site_label(requested_url).map(|label| title_case(&label)),
        ],
    )
}

fn from_open_graph(page: &dyn PageView) -> Option<String> {
    page.find_all(&["meta"]).into_iter().find_map(|meta| {
        let property = meta.attr("property")?.trim().to_ascii_lowercase();
        if property != "og:site_name" && property != "og:title" {
            return None;
        }
        meta.attr("content")
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    })
}

fn from_title(page: &dyn PageView) -> Option<String> {
    let title = page.title()?;
    Some(TITLE_SUFFIX_REGEX.replace(&title, "").trim().to_string())
}

fn from_headings(page: &dyn PageView) -> Option<String> {
    ["h1", "h2"].iter().find_map(|tag| {
        page.find_first(tag)
            .map(|heading| heading.text)
            .filter(|text| {
                let len = text.chars().count();
                len > 3 && len < 50
            })
    })
}
