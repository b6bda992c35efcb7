//! # AS CLUB Feeds
//!
//! Publishes the AS CLUB news listing (<https://www.asclub.pt/noticias>),
//! which has no feed of its own, as an RSS 2.0 document, and derives a
//! Google News sitemap from that feed.
//!
//! ## Architecture
//!
//! The RSS binary is one linear pipeline:
//! 1. **Fetch**: a single GET of the listing page ([`fetcher`])
//! 2. **Extract**: article anchors, titles and dates from the HTML ([`scrapers::asclub`])
//! 3. **Dedupe**: first occurrence of each link wins
//! 4. **Serialize**: `rss.xml`, skipped when nothing was found ([`outputs::rss`])
//!
//! The sitemap binary reads a published feed back ([`scrapers::feed`]),
//! keeps the last 48 hours ([`sitemap`]) and writes `news-sitemap.xml`
//! ([`outputs::sitemap`]).

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod sitemap;
pub mod utils;

pub use config::{FeedConfig, SitemapConfig};
pub use error::{ExtractionError, FeedError, FetchError, SitemapError};
pub use fetcher::Fetcher;
pub use models::Record;
pub use scrapers::asclub::Extractor;
