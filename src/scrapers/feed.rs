//! Reader for published RSS 2.0 and Atom feeds.
//!
//! Used by the sitemap generator to read back the feed this crate publishes
//! (or any other feed). RSS is tried first, then Atom.

use crate::error::SitemapError;
use crate::models::FeedEntry;
use tracing::{debug, instrument};

/// Parse `content` as RSS, falling back to Atom.
///
/// Missing titles or links become empty strings; validation happens later.
#[instrument(level = "info", skip_all, fields(bytes = content.len()))]
pub fn parse_feed(content: &[u8]) -> Result<Vec<FeedEntry>, SitemapError> {
    let rss_error = match rss::Channel::read_from(content) {
        Ok(channel) => {
            debug!(items = channel.items().len(), "Parsed RSS channel");
            return Ok(rss_entries(&channel));
        }
        Err(e) => e,
    };

    match atom_syndication::Feed::read_from(content) {
        Ok(feed) => {
            debug!(entries = feed.entries().len(), "Parsed Atom feed");
            Ok(atom_entries(&feed))
        }
        Err(atom_error) => Err(SitemapError::UnrecognizedFeed(format!(
            "rss: {rss_error}; atom: {atom_error}"
        ))),
    }
}

fn rss_entries(channel: &rss::Channel) -> Vec<FeedEntry> {
    channel
        .items()
        .iter()
        .map(|item| {
            let dc_date = item
                .dublin_core_ext()
                .and_then(|dc| dc.dates().first())
                .map(String::as_str);
            FeedEntry {
                title: item.title().unwrap_or_default().to_string(),
                url: item.link().unwrap_or_default().to_string(),
                date: item.pub_date().or(dc_date).map(str::to_string),
            }
        })
        .collect()
}

fn atom_entries(feed: &atom_syndication::Feed) -> Vec<FeedEntry> {
    feed.entries()
        .iter()
        .map(|entry| {
            // Prefer the alternate link, then whatever link comes first.
            let url = entry
                .links()
                .iter()
                .find(|link| link.rel() == "alternate")
                .or_else(|| entry.links().first())
                .map(|link| link.href().to_string())
                .unwrap_or_default();
            let date = entry.published().unwrap_or(entry.updated()).to_rfc3339();
            FeedEntry {
                title: entry.title().to_string(),
                url,
                date: Some(date),
            }
        })
        .collect()
}
