//! Fixed configuration for the feed and sitemap generators.
//!
//! Nothing here is read from the environment: every value is a constant of
//! the AS CLUB deployment. The structs exist so each component receives its
//! parameters explicitly at construction instead of reaching for globals.

use std::path::PathBuf;

/// Parameters of the RSS pipeline (fetch, extract, serialize).
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// The news listing page that gets scraped.
    pub source_url: String,
    /// Site root. Relative article links are resolved against it and it is
    /// the channel `<link>`.
    pub site_link: String,
    /// Channel `<title>`.
    pub title: String,
    /// Channel `<description>`.
    pub description: String,
    /// Channel `<language>` code.
    pub language: String,
    /// Where the published feed lives, used for the `atom:link rel="self"`.
    pub self_link: String,
    /// Value of every item's `dc:creator`.
    pub creator: String,
    /// `User-Agent` header sent when fetching the listing.
    pub user_agent: String,
    /// File the feed is written to, replaced on every run.
    pub output_path: PathBuf,
    /// How many matching anchors are considered, before deduplication.
    pub max_candidates: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source_url: "https://www.asclub.pt/noticias".to_string(),
            site_link: "https://www.asclub.pt".to_string(),
            title: "AS CLUB - Notícias".to_string(),
            description: "Últimas notícias de finanças e investimentos do AS Club".to_string(),
            language: "pt".to_string(),
            self_link: "https://axtancap.github.io/asclub-feeds/rss.xml".to_string(),
            creator: "AS CLUB".to_string(),
            user_agent: "ASClub-RSS-Bot/1.0".to_string(),
            output_path: PathBuf::from("rss.xml"),
            max_candidates: 30,
        }
    }
}

/// Parameters of the Google News sitemap generator.
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// Published RSS or Atom feed to read entries from.
    pub feed_url: String,
    /// `<news:name>` of the publication.
    pub publication_name: String,
    /// `<news:language>` code.
    pub language: String,
    /// Entries older than this many hours are left out.
    pub window_hours: i64,
    /// Upper bound on sitemap URLs, applied after the window filter.
    pub max_entries: usize,
    /// `User-Agent` header sent when fetching the feed.
    pub user_agent: String,
    /// File the sitemap is written to.
    pub output_path: PathBuf,
}

impl SitemapConfig {
    /// Sitemap configuration for the feed published at `feed_url`.
    pub fn for_feed(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            publication_name: "AS CLUB".to_string(),
            language: "pt".to_string(),
            window_hours: 48,
            max_entries: 1000,
            user_agent: "asclub-sitemap-bot/1.0".to_string(),
            output_path: PathBuf::from("news-sitemap.xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_config_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.source_url, "https://www.asclub.pt/noticias");
        assert_eq!(config.language, "pt");
        assert_eq!(config.max_candidates, 30);
        assert_eq!(config.output_path, PathBuf::from("rss.xml"));
    }

    #[test]
    fn test_sitemap_config_for_feed() {
        let config = SitemapConfig::for_feed("https://example.com/rss.xml");
        assert_eq!(config.feed_url, "https://example.com/rss.xml");
        assert_eq!(config.window_hours, 48);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.output_path, PathBuf::from("news-sitemap.xml"));
    }
}
