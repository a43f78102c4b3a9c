// ABOUTME: Value structs for resolved website metadata.
// ABOUTME: Provides Website, Tag, and the Validity reachability flag.

use serde::{Deserialize, Serialize};

/// Accuracy assigned to tags split out of a keywords meta tag.
/// Machine-generated keyword lists are noisy.
pub const KEYWORD_TAG_ACCURACY: f64 = 0.6;

/// Accuracy assigned to tags taken from explicit category markup.
pub const CATEGORY_TAG_ACCURACY: f64 = 0.9;

/// Whether the resolved site URL answered a probe request.
///
/// Pure extraction always leaves this at `Invalid`; only a successful
/// reachability probe flips it to `Valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    #[default]
    Invalid,
}

/// A topic tag with a confidence score in `[0, 1]`.
///
/// The score reflects how the tag was derived, not a measured probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub accuracy: f64,
}

impl Tag {
    /// Builds a tag, enforcing the trimmed/lower-cased name invariant.
    pub fn new(name: &str, accuracy: f64) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            accuracy,
        }
    }
}

/// Metadata resolved from one HTML document.
///
/// `url` is the canonical (or scheme-normalized input) URL and is the base
/// every other link field was absolutized against. All URL fields are either
/// empty or absolute with an explicit scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub valid: Validity,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub favicon: String,
    pub feeds: Vec<String>,
    pub tags: Vec<Tag>,
    pub twitter_accounts: Vec<String>,
}
