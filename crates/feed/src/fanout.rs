// ABOUTME: Bounded-concurrency parallel map over feed items.
// ABOUTME: Indexed task dispatch with order-preserving result gathering.

use futures::stream::{self, StreamExt};

use crate::error::FeedError;
use crate::models::{Feed, FeedItem};
use crate::parser::{channel_fields, collect_items, parse_channel, transform_item};

/// How many item transforms may run at once.
const ITEM_CONCURRENCY: usize = 8;

/// Parses a feed with the item transforms fanned out across blocking tasks.
///
/// Each item is dispatched in input order and `buffered` gathers results in
/// that same order, so the returned item sequence always matches the
/// document, regardless of which transform finishes first.
pub async fn parse_feed_parallel(xml: &str, feed_url: &str) -> Result<Feed, FeedError> {
    let channel = parse_channel(xml)?;
    let mut feed = channel_fields(&channel, feed_url);

    let base = feed_url.to_string();
    feed.items = stream::iter(collect_items(&channel))
        .map(|item| {
            let base = base.clone();
            tokio::task::spawn_blocking(move || transform_item(&item, &base))
        })
        .buffered(ITEM_CONCURRENCY)
        .map(|joined| joined.unwrap_or_else(|_| FeedItem::default()))
        .collect()
        .await;

    Ok(feed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_feed;
    use pretty_assertions::assert_eq;

    fn many_item_rss(count: usize) -> String {
        let items: String = (0..count)
            .map(|i| {
                format!(
                    "<item><title>Item {i}</title><link>https://example.com/{i}</link></item>"
                )
            })
            .collect();
        format!("<rss><channel><title>Big</title>{items}</channel></rss>")
    }

    #[tokio::test]
    async fn parallel_map_preserves_document_order() {
        let rss = many_item_rss(40);
        let feed = parse_feed_parallel(&rss, "https://example.com/feed").await.unwrap();
        assert_eq!(feed.items.len(), 40);
        for (i, item) in feed.items.iter().enumerate() {
            assert_eq!(item.title, format!("Item {i}"));
            assert_eq!(item.url, format!("https://example.com/{i}"));
        }
    }

    #[tokio::test]
    async fn parallel_and_sequential_agree() {
        let rss = many_item_rss(12);
        let parallel = parse_feed_parallel(&rss, "https://example.com/feed").await.unwrap();
        let sequential = parse_feed(&rss, "https://example.com/feed").unwrap();
        assert_eq!(parallel, sequential);
    }

    #[tokio::test]
    async fn invalid_document_still_errors() {
        assert!(parse_feed_parallel("<html/>", "x").await.is_err());
    }
}
