// ABOUTME: CLI for resolving site or feed metadata from local documents.
// ABOUTME: Reads a file or stdin and prints the resolved record as JSON.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use seedling_feed::{parse_feed_parallel, parse_feed_urls};
use seedling_site::{extract_website, Client};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// HTML document -> Website record.
    Site,
    /// RSS/Atom document -> Feed record.
    Feed,
    /// RSS/Atom document -> item URLs only.
    FeedUrls,
}

/// Resolve metadata from an HTML page or RSS/Atom feed and print JSON.
#[derive(Parser, Debug)]
#[command(name = "seedling")]
#[command(about = "Resolve site/feed metadata and print JSON", long_about = None)]
struct Args {
    /// Local file path, or "-" to read from stdin.
    target: String,

    /// How to interpret the document.
    #[arg(long, value_enum, default_value = "site")]
    kind: Kind,

    /// The URL the document came from; used for canonicalization and
    /// link absolutization.
    #[arg(long, default_value = "")]
    url: String,

    /// Probe the resolved site URL to stamp validity (site kind only).
    #[arg(long, default_value_t = false)]
    probe: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let input = load_input(&args.target)?;

    let value = match args.kind {
        Kind::Site => {
            let site = if args.probe {
                Client::builder().build().parse_website(&input, &args.url).await
            } else {
                extract_website(&input, &args.url)
            };
            serde_json::to_value(site)?
        }
        Kind::Feed => {
            let feed = parse_feed_parallel(&input, &args.url).await?;
            serde_json::to_value(feed)?
        }
        Kind::FeedUrls => {
            let urls = parse_feed_urls(&input)?;
            json!({ "urls": urls })
        }
    };

    let output = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{}", output);
    Ok(())
}

fn load_input(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(target).with_context(|| format!("failed to read {}", target))
    }
}
