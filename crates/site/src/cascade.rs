// ABOUTME: The website metadata cascade: selector tables, regex fallbacks, normalization.
// ABOUTME: Resolves a Website record from raw HTML plus the URL it came from.

//! Field-by-field metadata resolution for HTML documents.
//!
//! Each field is driven by a static selector table and a resolution mode;
//! regex fallbacks fire only when the structured pass found nothing. The
//! resolved site URL (canonical, or the scheme-normalized input) is the base
//! for absolutizing every other link field.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use crate::models::{Tag, Website, KEYWORD_TAG_ACCURACY};
use crate::select::{resolve_all, resolve_first, resolve_longest, Target};
use crate::urls::{absolutize, ensure_scheme, is_likely_feed};

const TYPE_SELECTORS: &[&str] = &[
    "meta[property='og:type']",
    "meta[name='twitter:type']",
    "meta[name='type']",
];

const TITLE_SELECTORS: &[&str] = &["title"];

const DESCRIPTION_SELECTORS: &[&str] = &[
    "meta[property='og:description']",
    "meta[property='twitter:description']",
    "meta[name='twitter:description']",
    "meta[name='description']",
];

const IMAGE_SELECTORS: &[&str] = &[
    "meta[property='og:image']",
    "meta[property='twitter:image']",
    "meta[name='twitter:image']",
];

const FAVICON_SELECTORS: &[&str] = &[
    "link[rel='apple-touch-icon']",
    "link[rel='apple-touch-icon-precomposed']",
    "link[rel='shortcut icon']",
    "link[rel='icon']",
];

const TILE_IMAGE_SELECTORS: &[&str] = &["meta[name='msapplication-TileImage']"];

const FEED_SELECTORS: &[&str] = &[
    "link[type='application/rss+xml']",
    "link[type='application/atom+xml']",
    "link[rel='alternate']",
];

const TWITTER_SITE_SELECTORS: &[&str] = &[
    "meta[property='twitter:site']",
    "meta[name='twitter:site']",
];

const KEYWORD_SELECTORS: &[&str] = &["meta[name='keywords']"];

const CANONICAL_SELECTORS: &[&str] = &["link[rel='canonical']"];

/// A canonical href shorter than this is treated as absent.
const MIN_CANONICAL_LEN: usize = 3;

// Fallback scans over the raw markup, compiled once: the input corpus is
// large in a crawler setting.
static TITLE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s[|-].").unwrap());
static FEED_HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)href\s*=\s*["']([^"']*(?:rss|atom|feed|xml)[^"']*)["']"#).unwrap()
});
static TWITTER_HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)href\s*=\s*["'][^"']*twitter\.com/(@?[A-Za-z0-9_]+)"#).unwrap()
});

/// Resolves a Website record from an HTML document.
///
/// Pure extraction: no network is touched and `valid` stays at its default
/// until a probe stamps it. Missing fields resolve to empty values.
pub fn extract_website(html: &str, url: &str) -> Website {
    let doc = Html::parse_document(html);

    let site_url = resolve_site_url(&doc, url);

    let kind = resolve_longest(&doc, TYPE_SELECTORS, Target::Attr("content")).unwrap_or_default();

    let title = resolve_longest(&doc, TITLE_SELECTORS, Target::Text)
        .map(|t| truncate_site_suffix(&t))
        .unwrap_or_default();

    let description =
        resolve_longest(&doc, DESCRIPTION_SELECTORS, Target::Attr("content")).unwrap_or_default();

    let image = resolve_first(&doc, IMAGE_SELECTORS, Target::Attr("content")).unwrap_or_default();

    let favicon = resolve_longest(&doc, FAVICON_SELECTORS, Target::Attr("href"))
        .or_else(|| resolve_first(&doc, TILE_IMAGE_SELECTORS, Target::Attr("content")))
        .unwrap_or_default();

    let mut feed_candidates = resolve_all(&doc, FEED_SELECTORS, Target::Attr("href"));
    if feed_candidates.is_empty() {
        feed_candidates = scan_feed_hrefs(html);
    }

    let mut twitter_accounts = resolve_all(&doc, TWITTER_SITE_SELECTORS, Target::Attr("content"));
    if twitter_accounts.is_empty() {
        twitter_accounts = scan_twitter_handles(html);
    }

    let tags = resolve_all(&doc, KEYWORD_SELECTORS, Target::Attr("content"))
        .iter()
        .flat_map(|content| split_keywords(content))
        .collect();

    // Normalization pass: everything absolutizes against the resolved URL,
    // and feed candidates must also pass the heuristic.
    let image = absolutize(&image, &site_url);
    let favicon = absolutize(&favicon, &site_url);
    let feeds = feed_candidates
        .iter()
        .map(|candidate| absolutize(candidate, &site_url))
        .filter(|resolved| is_likely_feed(resolved))
        .collect();

    Website {
        kind,
        title,
        description,
        url: site_url,
        image,
        favicon,
        feeds,
        tags,
        twitter_accounts,
        ..Website::default()
    }
}

/// Canonical link when present and plausible, otherwise the scheme-normalized
/// input URL. The canonical value is used verbatim, without a scheme check.
fn resolve_site_url(doc: &Html, input_url: &str) -> String {
    match resolve_first(doc, CANONICAL_SELECTORS, Target::Attr("href")) {
        Some(canonical) if canonical.len() >= MIN_CANONICAL_LEN => canonical,
        _ => ensure_scheme(input_url),
    }
}

/// Drops a trailing "site name" suffix: everything from the first
/// whitespace-then-separator run (`" | "`, `" - "`) onward.
fn truncate_site_suffix(title: &str) -> String {
    match TITLE_SUFFIX_RE.find(title) {
        Some(m) => title[..m.start()].to_string(),
        None => title.to_string(),
    }
}

/// Splits a keywords meta value on `;`, `,`, and `|` into keyword tags.
/// Duplicates are kept.
fn split_keywords(content: &str) -> Vec<Tag> {
    content
        .split(|c| c == ';' || c == ',' || c == '|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| Tag::new(part, KEYWORD_TAG_ACCURACY))
        .collect()
}

/// Raw-markup fallback: href values that look like feed endpoints.
fn scan_feed_hrefs(html: &str) -> Vec<String> {
    FEED_HREF_RE
        .captures_iter(html)
        .map(|cap| cap[1].trim().to_string())
        .filter(|href| !href.is_empty())
        .collect()
}

/// Raw-markup fallback: twitter.com profile links rewritten to @handles.
/// Unlike keyword tags, handles are deduplicated.
fn scan_twitter_handles(html: &str) -> Vec<String> {
    let mut handles: Vec<String> = Vec::new();
    for cap in TWITTER_HREF_RE.captures_iter(html) {
        let handle = format!("@{}", cap[1].trim_start_matches('@'));
        if !handles.contains(&handle) {
            handles.push(handle);
        }
    }
    handles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_suffix_truncation() {
        assert_eq!(truncate_site_suffix("Foo Bar | My Site"), "Foo Bar");
        assert_eq!(truncate_site_suffix("Foo Bar - My Site"), "Foo Bar");
        assert_eq!(truncate_site_suffix("Just A Title"), "Just A Title");
    }

    #[test]
    fn keyword_splitting_keeps_duplicates() {
        let tags = split_keywords("tech, news|daily; breaking");
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["tech", "news", "daily", "breaking"]);
        assert!(tags.iter().all(|t| t.accuracy == KEYWORD_TAG_ACCURACY));

        let dup = split_keywords("rust, Rust");
        assert_eq!(dup.len(), 2);
        assert_eq!(dup[0].name, dup[1].name);
    }

    #[test]
    fn canonical_wins_over_input_url() {
        let html = r#"<html><head>
            <link rel="canonical" href="https://example.com/canonical">
        </head></html>"#;
        let site = extract_website(html, "example.com/original");
        assert_eq!(site.url, "https://example.com/canonical");
    }

    #[test]
    fn short_canonical_falls_back_to_normalized_input() {
        let html = r#"<html><head><link rel="canonical" href="/x"></head></html>"#;
        let site = extract_website(html, "example.com/page");
        assert_eq!(site.url, "http://example.com/page");
    }

    #[test]
    fn feed_scan_fallback_fires_only_without_link_tags() {
        let html = r#"<html><body>
            <a href="/blog/feed.xml">subscribe</a>
            <a href="/about.html">about</a>
        </body></html>"#;
        let site = extract_website(html, "https://example.com/");
        assert_eq!(site.feeds, vec!["https://example.com/blog/feed.xml".to_string()]);
    }

    #[test]
    fn declared_feed_links_pass_through_heuristic() {
        let html = r#"<html><head>
            <link rel="alternate" type="application/rss+xml" href="/rss">
            <link rel="alternate" href="/translated.html">
        </head></html>"#;
        let site = extract_website(html, "https://example.com/");
        assert_eq!(site.feeds, vec!["https://example.com/rss".to_string()]);
    }

    #[test]
    fn twitter_scan_rewrites_and_dedupes() {
        let html = r#"<html><body>
            <a href="https://twitter.com/rustlang">follow</a>
            <a href="http://twitter.com/rustlang">again</a>
            <a href="https://twitter.com/ferris">crab</a>
        </body></html>"#;
        let site = extract_website(html, "https://example.com/");
        assert_eq!(site.twitter_accounts, vec!["@rustlang".to_string(), "@ferris".to_string()]);
    }

    #[test]
    fn twitter_meta_preempts_scan() {
        let html = r#"<html><head>
            <meta name="twitter:site" content="@official">
        </head><body><a href="https://twitter.com/other">x</a></body></html>"#;
        let site = extract_website(html, "https://example.com/");
        assert_eq!(site.twitter_accounts, vec!["@official".to_string()]);
    }

    #[test]
    fn image_and_favicon_absolutize_against_site_url() {
        let html = r#"<html><head>
            <link rel="canonical" href="https://example.com/section/page">
            <meta property="og:image" content="/img/hero.png">
            <link rel="icon" href="favicon.ico">
        </head></html>"#;
        let site = extract_website(html, "ignored.example.net");
        assert_eq!(site.image, "https://example.com/img/hero.png");
        assert_eq!(site.favicon, "https://example.com/section/favicon.ico");
    }

    #[test]
    fn favicon_tile_fallback() {
        let html = r#"<html><head>
            <meta name="msapplication-TileImage" content="/tile.png">
        </head></html>"#;
        let site = extract_website(html, "https://example.com/");
        assert_eq!(site.favicon, "https://example.com/tile.png");
    }

    #[test]
    fn longest_description_wins() {
        let html = r#"<html><head>
            <meta name="description" content="Short">
            <meta property="og:description" content="A Much Longer Description">
        </head></html>"#;
        let site = extract_website(html, "https://example.com/");
        assert_eq!(site.description, "A Much Longer Description");
    }

    #[test]
    fn missing_everything_resolves_to_empty_fields() {
        let site = extract_website("<html></html>", "example.com");
        assert_eq!(site.url, "http://example.com");
        assert!(site.title.is_empty());
        assert!(site.feeds.is_empty());
        assert!(site.tags.is_empty());
    }
}
