//! Helpers shared by both binaries: tracing setup, log truncation, date
//! formatting, XML text cleanup and output file writing.

use crate::error::FeedError;
use chrono::{DateTime, Utc};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Events go to stdout with an
/// RFC 3339 UTC timestamp and their target.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// RFC 822 date as used by RSS 2.0, always in UTC (`+0000`).
pub fn rfc822(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}

/// Drop control characters that XML 1.0 cannot carry (everything below
/// U+0020 except tab, LF and CR).
pub fn sanitize_xml_text(input: &str) -> String {
    input
        .chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\r') || c >= ' ')
        .collect()
}

/// Write `bytes` to `path`, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path.display(), bytes = bytes.len()))]
pub async fn write_output(path: &Path, bytes: &[u8]) -> Result<(), FeedError> {
    fs::write(path, bytes).await.map_err(|source| FeedError::Io {
        operation: "writing",
        path: path.display().to_string(),
        source,
    })?;
    info!("Wrote output file");
    Ok(())
}
