// ABOUTME: Value structs for parsed syndication documents.
// ABOUTME: Provides the Feed channel record and its FeedItem entries.

use chrono::{DateTime, Utc};
use seedling_site::Tag;
use serde::{Deserialize, Serialize};

/// A single item or entry within a feed.
///
/// `pubdate` is `None` when no date was present or none of the known formats
/// matched; consumers that need a concrete instant substitute their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub content_encoded: String,
    pub url: String,
    pub author: String,
    pub tags: Vec<Tag>,
    pub image: String,
    pub pubdate: Option<DateTime<Utc>>,
    pub media: String,
    pub media_type: String,
}

/// A parsed feed channel with its items in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub subtitle: String,
    pub website: String,
    pub pubdate: Option<DateTime<Utc>>,
    pub logo: String,
    pub image: String,
    pub content_encoded: String,
    pub language: String,
    pub items: Vec<FeedItem>,
}
