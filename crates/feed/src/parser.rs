// ABOUTME: The feed cascade: channel fields, per-item transforms, and the URLs-only variant.
// ABOUTME: Maps a syndication XML document onto Feed and FeedItem records.

use once_cell::sync::Lazy;
use regex::Regex;

use seedling_site::{absolutize, clean_opt, host_of, resolve_date, Tag, CATEGORY_TAG_ACCURACY};

use crate::error::FeedError;
use crate::models::{Feed, FeedItem};
use crate::xml::{self, Element};

/// Logo lookup endpoint; the host is appended and the URL is never fetched.
pub const LOGO_ENDPOINT: &str = "//logo.clearbit.com/";

/// Channel date elements, in resolution order.
const CHANNEL_DATE_NAMES: &[&str] = &["updated", "pubDate", "pubdate"];

/// Item date elements, in resolution order. RSS `pubDate` first since it
/// dominates in the wild; Atom `published` before `updated` because updated
/// timestamps drift on edits.
const ITEM_DATE_NAMES: &[&str] = &["pubDate", "published", "updated"];

/// Image-like src attribute inside an item's raw markup.
static ITEM_IMG_SRC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)src=["']([^"']+\.(?:jpe?g|png))["']"#).unwrap());

/// Parses a syndication document into a Feed with its items in document
/// order. Items are transformed sequentially; see [`crate::fanout`] for the
/// bounded-concurrency variant.
pub fn parse_feed(xml: &str, feed_url: &str) -> Result<Feed, FeedError> {
    let channel = parse_channel(xml)?;
    let mut feed = channel_fields(&channel, feed_url);
    feed.items = collect_items(&channel)
        .iter()
        .map(|item| transform_item(item, feed_url))
        .collect();
    Ok(feed)
}

/// Lightweight variant that resolves only the item URLs, skipping the full
/// item transform.
pub fn parse_feed_urls(xml: &str) -> Result<Vec<String>, FeedError> {
    let channel = parse_channel(xml)?;
    Ok(collect_items(&channel)
        .iter()
        .map(|item| item_url(item))
        .filter(|url| !url.is_empty())
        .collect())
}

/// Parses the document and locates the channel element: `<channel>` for RSS,
/// the `<feed>` root for Atom.
pub(crate) fn parse_channel(xml: &str) -> Result<Element, FeedError> {
    let doc = xml::parse(xml)?;
    doc.first_descendant("channel")
        .or_else(|| doc.first_descendant("feed"))
        .cloned()
        .ok_or_else(|| FeedError::invalid("no channel or feed element"))
}

/// Items/entries under the channel, in document order.
pub(crate) fn collect_items(channel: &Element) -> Vec<Element> {
    channel
        .descendants_where(&|e| e.name_is("item") || e.name_is("entry"))
        .into_iter()
        .cloned()
        .collect()
}

/// Channel-level fields, without items.
pub(crate) fn channel_fields(channel: &Element, feed_url: &str) -> Feed {
    let website = channel
        .child("link")
        .map(|link| absolutize(&link_value(link), feed_url))
        .unwrap_or_default();

    let logo = host_of(&website)
        .map(|host| format!("{}{}", LOGO_ENDPOINT, host))
        .unwrap_or_default();

    let pubdate = CHANNEL_DATE_NAMES
        .iter()
        .map(|name| channel.child_text(name))
        .find(|text| !text.is_empty())
        .and_then(|text| resolve_date(&text));

    let image = channel
        .child("itunes:image")
        .and_then(|el| el.attr("href"))
        .map(|href| absolutize(href, feed_url))
        .unwrap_or_default();

    Feed {
        title: channel.child_text("title"),
        subtitle: channel.child_text("itunes:subtitle"),
        website,
        pubdate,
        logo,
        image,
        content_encoded: channel.child_text("content:encoded"),
        language: channel.child_text("language"),
        items: Vec::new(),
    }
}

/// Transforms one item element into a FeedItem.
///
/// Pure function of the element (plus the immutable base URL): items never
/// depend on each other, which is what makes the parallel map in
/// [`crate::fanout`] safe.
pub(crate) fn transform_item(item: &Element, base_url: &str) -> FeedItem {
    let description_raw = ["description", "summary", "content"]
        .iter()
        .map(|name| item.child_text(name))
        .find(|text| !text.is_empty());
    let description = clean_opt(description_raw.as_deref()).unwrap_or_default();

    let pubdate = ITEM_DATE_NAMES
        .iter()
        .map(|name| item.child_text(name))
        .find(|text| !text.is_empty())
        .and_then(|text| resolve_date(&text));

    let (media, media_type) = extract_media(item);

    FeedItem {
        title: item.child_text("title"),
        description,
        content_encoded: item.child_text("content:encoded"),
        url: absolutize(&item_url(item), base_url),
        author: item_author(item),
        tags: item_tags(item),
        image: absolutize(&item_image(item), base_url),
        pubdate,
        media: absolutize(&media, base_url),
        media_type,
    }
}

/// Item URL: the first link's `href` attribute, or its text content when the
/// attribute is absent or empty (the RSS shape).
fn item_url(item: &Element) -> String {
    item.child("link").map(|link| link_value(link)).unwrap_or_default()
}

fn link_value(link: &Element) -> String {
    match link.attr("href") {
        Some(href) if !href.trim().is_empty() => href.trim().to_string(),
        _ => link.text.trim().to_string(),
    }
}

/// Author cascade: `dc:creator`, then `author > name`, then `author` text.
fn item_author(item: &Element) -> String {
    let creator = item.child_text("dc:creator");
    if !creator.is_empty() {
        return creator;
    }
    if let Some(author) = item.child("author") {
        let name = author.child_text("name");
        if !name.is_empty() {
            return name;
        }
        return author.text.trim().to_string();
    }
    String::new()
}

/// Category markup carries human-curated tags.
/// Atom's `<category term="…"/>` has no text, so the attribute fills in.
fn item_tags(item: &Element) -> Vec<Tag> {
    item.children_named("category")
        .map(|cat| {
            let text = cat.text.trim();
            if text.is_empty() {
                cat.attr("term").unwrap_or_default().to_string()
            } else {
                text.to_string()
            }
        })
        .filter(|name| !name.is_empty())
        .map(|name| Tag::new(&name, CATEGORY_TAG_ACCURACY))
        .collect()
}

/// Media extraction is hardened per item: the first enclosure-like element
/// only yields media fields when it carries both `type` and `length`, and a
/// miss never affects sibling items.
fn extract_media(item: &Element) -> (String, String) {
    let enclosure = item.children.iter().find(|child| {
        child.name_is("enclosure")
            || (child.name_is("link") && child.attr("rel") == Some("enclosure"))
    });
    let Some(el) = enclosure else {
        return (String::new(), String::new());
    };
    match (el.attr("type"), el.attr("length")) {
        (Some(media_type), Some(_length)) => {
            let media = el.attr("url").or_else(|| el.attr("href")).unwrap_or_default();
            (media.trim().to_string(), media_type.trim().to_string())
        }
        _ => (String::new(), String::new()),
    }
}

/// Item image: the itunes image href, falling back to an image-like `src`
/// anywhere in the item's raw markup.
fn item_image(item: &Element) -> String {
    if let Some(href) = item.child("itunes:image").and_then(|el| el.attr("href")) {
        if !href.trim().is_empty() {
            return href.trim().to_string();
        }
    }
    ITEM_IMG_SRC_RE
        .captures(&item.deep_text())
        .map(|cap| cap[1].to_string())
        .unwrap_or_default()
}
