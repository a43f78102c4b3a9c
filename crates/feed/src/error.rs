// ABOUTME: Error types for feed parsing operations.
// ABOUTME: Provides FeedError with Parse and Invalid variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while parsing a syndication document.
///
/// Missing optional data never errors; these cover documents that are not
/// feeds at all.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The document is not well-formed XML.
    #[error("failed to parse feed: {0}")]
    Parse(String),

    /// Well-formed XML without a channel or feed root.
    #[error("invalid feed: {0}")]
    Invalid(String),
}

impl FeedError {
    /// Creates a Parse error from an underlying XML error.
    pub fn parse(err: impl fmt::Display) -> Self {
        FeedError::Parse(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        FeedError::Invalid(msg.into())
    }
}
