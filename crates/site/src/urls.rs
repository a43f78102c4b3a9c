// ABOUTME: URL scheme normalization, absolutization, and the feed-link heuristic.
// ABOUTME: Classifies href candidates as plausible syndication feeds.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use url::Url;

/// Substrings that disqualify a candidate from being a feed link.
static REJECT_MARKERS: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(["comment", "comments", "target="]).unwrap());

const REJECT_SUFFIXES: &[&str] = &[".html", ".png", ".jpg", ".gif"];

/// True when parsing the URL yields a non-empty scheme or host.
pub fn has_scheme(url: &str) -> bool {
    match Url::parse(url.trim()) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() || parsed.host_str().map_or(false, |h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Prefixes `http://` when the URL has no scheme. Idempotent.
pub fn ensure_scheme(url: &str) -> String {
    let trimmed = url.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Standard URI merge of a possibly-relative candidate against a base.
///
/// Resolution is forgiving: when the base does not parse or the merge fails,
/// the candidate comes back unchanged rather than being dropped.
pub fn absolutize(candidate: &str, base: &str) -> String {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return String::new();
    }
    match Url::parse(base).and_then(|b| b.join(candidate)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => candidate.to_string(),
    }
}

/// Extracts the host of a URL, e.g. `https://blog.example.com/a` -> `blog.example.com`.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().map(str::to_string)
}

/// Heuristic acceptance test for syndication-feed candidates.
///
/// A candidate qualifies only when all of these hold: explicit http/https
/// scheme; no `.html`/`.png`/`.jpg`/`.gif` suffix; non-empty path that is
/// either non-root or carries a query string; none of the reject markers
/// (`comment`, `target=`); not an `android-app:` URI.
pub fn is_likely_feed(url: &str) -> bool {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.starts_with("android-app:") {
        return false;
    }
    let parsed = match Url::parse(trimmed) {
        Ok(p) => p,
        Err(_) => return false,
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    let lower = trimmed.to_ascii_lowercase();
    if REJECT_SUFFIXES.iter().any(|ext| lower.ends_with(ext)) {
        return false;
    }

    let path = parsed.path();
    if path.is_empty() {
        return false;
    }
    if path == "/" && parsed.query().is_none() {
        return false;
    }

    !REJECT_MARKERS.is_match(&lower)
}
