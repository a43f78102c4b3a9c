// ABOUTME: Selector resolution engine over parsed HTML documents.
// ABOUTME: Merges comma-joined CSS queries and collapses matches via first/longest/all modes.

//! Selector-based value resolution.
//!
//! A field's selector group is evaluated as one merged query: the patterns
//! are comma-joined and matched together, so results come back in document
//! order rather than per-pattern priority.
//!
//! Key behaviors:
//! - `resolve_first` returns the first matched element's value. An empty
//!   value on a matched element is a legitimate result, distinct from
//!   "no match" (`None`).
//! - `resolve_longest` and `resolve_all` skip empty values entirely.
//! - `resolve_longest` picks the greatest character count; ties keep the
//!   earliest match.

use scraper::{ElementRef, Html, Selector};

/// What to read off a matched element.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Inner text, whitespace-normalized.
    Text,
    /// A named attribute, trimmed. Absent attributes read as empty.
    Attr(&'a str),
}

/// Collapses runs of whitespace into single spaces and trims.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn merged_selector(selectors: &[&str]) -> Option<Selector> {
    Selector::parse(&selectors.join(", ")).ok()
}

fn value_of(el: ElementRef<'_>, target: Target<'_>) -> String {
    match target {
        Target::Text => normalize_whitespace(&el.text().collect::<Vec<_>>().join(" ")),
        Target::Attr(name) => el
            .value()
            .attr(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Value of the first matched element, or `None` when nothing matched.
pub fn resolve_first(doc: &Html, selectors: &[&str], target: Target<'_>) -> Option<String> {
    let sel = merged_selector(selectors)?;
    doc.select(&sel).next().map(|el| value_of(el, target))
}

/// Longest non-empty value across all matches.
///
/// Longer meta-tag values are usually the more complete ones when several
/// competing tags carry the same field.
pub fn resolve_longest(doc: &Html, selectors: &[&str], target: Target<'_>) -> Option<String> {
    let sel = merged_selector(selectors)?;
    let mut best: Option<String> = None;
    for el in doc.select(&sel) {
        let value = value_of(el, target);
        if value.is_empty() {
            continue;
        }
        let longer = best
            .as_ref()
            .map_or(true, |b| value.chars().count() > b.chars().count());
        if longer {
            best = Some(value);
        }
    }
    best
}

/// Every non-empty value in document order, duplicates kept.
pub fn resolve_all(doc: &Html, selectors: &[&str], target: Target<'_>) -> Vec<String> {
    let Some(sel) = merged_selector(selectors) else {
        return Vec::new();
    };
    doc.select(&sel)
        .map(|el| value_of(el, target))
        .filter(|v| !v.is_empty())
        .collect()
}
