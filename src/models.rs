//! Data models shared between the extractor, the feed writer and the
//! sitemap generator.
//!
//! - [`Record`]: one article scraped from the news listing
//! - [`FeedEntry`]: one item read back from a published RSS or Atom feed
//! - [`NewsEntry`]: a feed entry that qualifies for the news sitemap

use chrono::{DateTime, Utc};

/// An article extracted from the listing page.
///
/// Records live only between extraction and serialization; nothing is
/// persisted across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Heading text of the article card. Never empty.
    pub title: String,
    /// Absolute article URL. Unique within one run.
    pub link: String,
    /// Always the title: the listing exposes no excerpt.
    pub description: String,
    /// Date shown next to the card, or the extraction time when none is found.
    pub published_at: DateTime<Utc>,
}

impl Record {
    /// Create a record whose description repeats the title.
    ///
    /// # Arguments
    ///
    /// * `title` - Heading text, already trimmed and non-empty
    /// * `link` - Absolute article URL
    /// * `published_at` - Card date, or the extraction time
    pub fn new(title: String, link: String, published_at: DateTime<Utc>) -> Self {
        Self {
            description: title.clone(),
            title,
            link,
            published_at,
        }
    }
}

/// An item as read from an RSS channel or Atom feed, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    /// Item title, untrimmed.
    pub title: String,
    /// Item link (Atom: the `alternate` link when present).
    pub url: String,
    /// Raw date text for RSS (`pubDate` or `dc:date`), RFC 3339 for Atom.
    pub date: Option<String>,
}

/// A validated, recent entry ready to be written into the news sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsEntry {
    pub title: String,
    pub url: String,
    /// Publication time normalized to UTC.
    pub published_at: DateTime<Utc>,
}
