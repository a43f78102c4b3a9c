// ABOUTME: Core library for parsing RSS/Atom syndication documents.
// ABOUTME: Exposes the feed cascade, the URLs-only variant, and the parallel item map.

//! seedling-feed: syndication document resolution.
//!
//! Parses RSS and Atom markup into a [`Feed`] channel record plus its
//! [`FeedItem`] sequence, following the same forgiving philosophy as
//! `seedling-site`: missing fields resolve to empty values, a broken
//! enclosure never takes down its sibling items, and unknown dates stay
//! explicitly unknown.

pub mod error;
pub mod fanout;
pub mod models;
pub mod parser;
pub mod xml;

pub use error::FeedError;
pub use fanout::parse_feed_parallel;
pub use models::{Feed, FeedItem};
pub use parser::{parse_feed, parse_feed_urls, LOGO_ENDPOINT};
