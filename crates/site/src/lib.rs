// ABOUTME: Core library for resolving website metadata from raw HTML.
// ABOUTME: Exposes the selector cascade, text/date/URL utilities, and the probing client.

//! seedling-site: website metadata resolution.
//!
//! Extracts title, description, preview image, favicon, feed candidates,
//! keyword tags, and twitter handles from imperfect real-world HTML. The
//! design favors resolving *something reasonable* quickly over precision:
//! every field falls back gracefully and missing data resolves to empty
//! values rather than errors.
//!
//! # Example
//!
//! ```no_run
//! use seedling_site::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder().build();
//!     let site = client
//!         .parse_website("<html>...</html>", "https://example.com/")
//!         .await;
//!     println!("{} ({:?})", site.title, site.valid);
//! }
//! ```

pub mod cascade;
pub mod client;
pub mod dates;
pub mod models;
pub mod probe;
pub mod select;
pub mod text;
pub mod urls;

pub use cascade::extract_website;
pub use client::{Client, ClientBuilder};
pub use dates::resolve_date;
pub use models::{Tag, Validity, Website, CATEGORY_TAG_ACCURACY, KEYWORD_TAG_ACCURACY};
pub use probe::{check_reachable, ProbeError, PROBE_TIMEOUT};
pub use text::{clean, clean_opt};
pub use urls::{absolutize, ensure_scheme, has_scheme, host_of, is_likely_feed};
