//! Scrape the AS CLUB news listing and publish it as `rss.xml`.
//!
//! Takes no arguments; every parameter is a constant in [`FeedConfig`].
//! Progress is logged to stdout (`RUST_LOG` adjusts verbosity). A failed
//! fetch is fatal and exits non-zero; finding no articles only warns.

use asclub_feeds::outputs::rss::write_feed;
use asclub_feeds::utils::init_tracing;
use asclub_feeds::{Extractor, FeedConfig, Fetcher};
use std::error::Error;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let start_time = std::time::Instant::now();
    let config = FeedConfig::default();
    info!(source = %config.source_url, "asclub_feeds starting up");

    let fetcher = Fetcher::new(&config.user_agent)?;
    let extractor = Extractor::new(&config)?;

    let raw = match fetcher.fetch(&config.source_url).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, url = %config.source_url, "Failed to fetch news listing");
            return Err(e.into());
        }
    };

    let records = extractor.extract(&raw);
    if records.is_empty() {
        warn!("No articles found; nothing to publish");
    } else if let Err(e) = write_feed(&records, &config).await {
        error!(error = %e, path = %config.output_path.display(), "Failed to write RSS feed");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = records.len(),
        "Execution complete"
    );
    Ok(())
}
