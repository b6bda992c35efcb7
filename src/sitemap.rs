//! Google News sitemap generation from a published feed.
//!
//! Reads the feed back over HTTP, keeps the entries published within the
//! freshness window (48 hours), and writes them as a news sitemap. Google
//! News only indexes recent articles, so older entries are left out rather
//! than listed.

use crate::config::SitemapConfig;
use crate::error::SitemapError;
use crate::fetcher::Fetcher;
use crate::models::{FeedEntry, NewsEntry};
use crate::outputs::sitemap::render_sitemap;
use crate::scrapers::feed::parse_feed;
use crate::utils::write_output;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, instrument};

/// Fetch the configured feed and write the news sitemap.
///
/// Returns how many URLs were written. An empty result still produces a
/// (valid, empty) sitemap.
#[instrument(level = "info", skip_all, fields(feed_url = %config.feed_url))]
pub async fn generate(config: &SitemapConfig) -> Result<usize, SitemapError> {
    let fetcher = Fetcher::new(&config.user_agent)?;
    generate_with(&fetcher, config).await
}

/// [`generate`] with a caller-supplied fetcher.
pub async fn generate_with(fetcher: &Fetcher, config: &SitemapConfig) -> Result<usize, SitemapError> {
    let body = fetcher.fetch(&config.feed_url).await?;

    let entries = parse_feed(&body)?;
    info!(count = entries.len(), "Read feed entries");

    let recent = select_recent(entries, config, Utc::now());
    let xml = render_sitemap(&recent, config)?;
    write_output(&config.output_path, &xml).await?;

    info!(
        urls = recent.len(),
        path = %config.output_path.display(),
        window_hours = config.window_hours,
        "News sitemap generated"
    );
    Ok(recent.len())
}

/// Validate entries and keep those published within the window ending at `now`.
///
/// Titles and URLs are trimmed; entries missing either, or carrying no
/// parseable date, are dropped. Feed order is kept and the result is capped
/// at `max_entries`.
pub fn select_recent(entries: Vec<FeedEntry>, config: &SitemapConfig, now: DateTime<Utc>) -> Vec<NewsEntry> {
    let cutoff = now - Duration::hours(config.window_hours);
    entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.trim();
            let url = entry.url.trim();
            let published_at = entry.date.as_deref().and_then(parse_feed_date);
            match published_at {
                Some(published_at) if !title.is_empty() && !url.is_empty() => Some(NewsEntry {
                    title: title.to_string(),
                    url: url.to_string(),
                    published_at,
                }),
                _ => {
                    debug!(title, url, date = ?entry.date, "Dropping incomplete feed entry");
                    None
                }
            }
        })
        .filter(|entry| entry.published_at >= cutoff)
        .take(config.max_entries)
        .collect()
}

/// RFC 2822 (RSS `pubDate`) or RFC 3339 (Atom, `dc:date`).
fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
