// ABOUTME: End-to-end CLI tests running the seedling binary on fixture files.
// ABOUTME: Checks JSON output for site, feed, and feed-urls kinds.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn site_kind_prints_website_json() {
    let fixture = write_fixture(
        r#"<html><head>
            <title>Fixture Page | Site</title>
            <meta property="og:description" content="A page used by the CLI test.">
        </head></html>"#,
    );

    Command::cargo_bin("seedling")
        .unwrap()
        .arg(fixture.path())
        .args(["--kind", "site", "--url", "https://example.com/fixture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Fixture Page\""))
        .stdout(predicate::str::contains("\"valid\": \"invalid\""));
}

#[test]
fn feed_kind_prints_feed_json() {
    let fixture = write_fixture(
        r#"<rss><channel>
            <title>CLI Feed</title>
            <item><title>One</title><link>https://example.com/one</link></item>
        </channel></rss>"#,
    );

    Command::cargo_bin("seedling")
        .unwrap()
        .arg(fixture.path())
        .args(["--kind", "feed", "--url", "https://example.com/feed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"CLI Feed\""))
        .stdout(predicate::str::contains("https://example.com/one"));
}

#[test]
fn feed_urls_kind_reads_stdin() {
    Command::cargo_bin("seedling")
        .unwrap()
        .args(["-", "--kind", "feed-urls", "--compact"])
        .write_stdin(
            "<rss><channel><item><link>https://example.com/a</link></item></channel></rss>",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"urls":["https://example.com/a"]}"#));
}

#[test]
fn unreadable_target_fails() {
    Command::cargo_bin("seedling")
        .unwrap()
        .arg("/definitely/not/here.html")
        .assert()
        .failure();
}
