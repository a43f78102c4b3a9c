// ABOUTME: Async client facade combining the metadata cascade with the probe.
// ABOUTME: Provides Client/ClientBuilder for website resolution.

use std::time::Duration;

use crate::cascade::extract_website;
use crate::models::{Validity, Website};
use crate::probe::{check_reachable, PROBE_TIMEOUT};

/// Builder for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            timeout: PROBE_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    /// Overrides the probe timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Client {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .unwrap_or_default();
        Client { http }
    }
}

/// Resolves website metadata and stamps reachability.
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Runs the pure metadata cascade, then probes the resolved URL.
    ///
    /// All transport failures collapse to `Invalid`.
    pub async fn parse_website(&self, html: &str, url: &str) -> Website {
        let mut site = extract_website(html, url);
        site.valid = Validity::from(&check_reachable(&self.http, &site.url).await);
        site
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn parse_website_marks_reachable_sites_valid() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/page");
                then.status(200);
            })
            .await;

        let html = format!(
            "<html><head><link rel=\"canonical\" href=\"{}\"><title>Up | Site</title></head></html>",
            server.url("/page")
        );
        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build();
        let site = client.parse_website(&html, "unused.example.com").await;

        assert_eq!(site.valid, Validity::Valid);
        assert_eq!(site.title, "Up");
        assert_eq!(site.url, server.url("/page"));
    }

    #[tokio::test]
    async fn parse_website_marks_dead_hosts_invalid() {
        let client = Client::builder()
            .timeout(Duration::from_secs(1))
            .build();
        let site = client
            .parse_website("<html></html>", "http://127.0.0.1:1/")
            .await;
        assert_eq!(site.valid, Validity::Invalid);
    }
}
