//! Command-line interface of the `news_sitemap` binary.
//!
//! The RSS binary takes no arguments at all; only the sitemap generator needs
//! to be told where the published feed lives.

use clap::Parser;

/// Generate a Google News sitemap (`news-sitemap.xml`) from a published feed.
///
/// # Examples
///
/// ```sh
/// news_sitemap --feed-url https://axtancap.github.io/asclub-feeds/rss.xml
///
/// # Or through the environment
/// FEED_URL=https://axtancap.github.io/asclub-feeds/rss.xml news_sitemap
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct SitemapCli {
    /// URL of the RSS or Atom feed to read
    #[arg(long, env = "FEED_URL")]
    pub feed_url: String,
}
