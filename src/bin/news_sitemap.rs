//! Build `news-sitemap.xml` from the published RSS feed.
//!
//! ```sh
//! FEED_URL=https://axtancap.github.io/asclub-feeds/rss.xml news_sitemap
//! ```

use asclub_feeds::SitemapConfig;
use asclub_feeds::cli::SitemapCli;
use asclub_feeds::sitemap::generate;
use asclub_feeds::utils::init_tracing;
use clap::Parser;
use std::error::Error;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args = SitemapCli::parse();
    let config = SitemapConfig::for_feed(args.feed_url);
    info!(feed_url = %config.feed_url, "news_sitemap starting up");

    match generate(&config).await {
        Ok(urls) => {
            info!(urls, path = %config.output_path.display(), "Execution complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Failed to generate news sitemap");
            Err(e.into())
        }
    }
}
