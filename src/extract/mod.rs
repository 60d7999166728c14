//! Field extractors
//!
//! Every extractor is a stateless function of a [`PageView`] that returns
//! `Some(value)` or `None`. Defaults are never applied here; the record
//! assembler owns the sentinel policy.
//!
//! Most extractors are a fallback chain: an ordered list of heuristics, from
//! most to least precise, evaluated by [`first_success`].

mod contact;
mod identity;
mod profile;
mod signals;
mod social;

pub use contact::{address, emails, phones};
pub use identity::company_name;
pub use profile::{description, founded_year, industry};
pub use signals::{
    competitors, employee_count, market_position, revenue, technologies, COMPETITOR_MENTIONS,
    NO_COMPETITOR_MENTIONS, POSITION_NOT_SPECIFIED,
};
pub use social::{social_links, SocialLinks, SocialPlatform};

use crate::pipeline::PageView;

/// One step of a fallback chain
pub type Heuristic<'a> = &'a dyn Fn(&dyn PageView) -> Option<String>;

/// Runs heuristics in order and returns the first non-blank result, trimmed
pub fn first_success(page: &dyn PageView, chain: &[Heuristic<'_>]) -> Option<String> {
    chain.iter().enumerate().find_map(|(step, heuristic)| {
        let value = heuristic(page)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())?;
        tracing::trace!("Fallback chain matched at step {}", step);
        Some(value)
    })
}

/// Joins up to `limit` unique values in first-seen order
pub(crate) fn join_unique<I>(values: I, limit: usize) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut kept: Vec<String> = Vec::new();
    for value in values {
        if kept.len() == limit {
            break;
        }
        if !kept.contains(&value) {
            kept.push(value);
        }
    }

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(", "))
    }
}

/// Capitalizes the first letter of every alphabetic run, lowercasing the rest
///
/// `acme-corp` becomes `Acme-Corp`, `aws` becomes `Aws`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// Keeps the first `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
