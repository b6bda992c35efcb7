//! AS CLUB news listing extractor.
//!
//! The listing at <https://www.asclub.pt/noticias> is a Framer page with no
//! stable class names, so articles are recognised structurally:
//!
//! - an `<a>` whose `href` ends in `/noticias/<slug>` is a candidate
//! - the first `h1`..`h6` inside the anchor is the title
//! - the nearest preceding `div`/`span`/`p` whose sole text holds a
//!   `dd/mm/yyyy` token gives the publication date; that whole text must
//!   parse as `dd/mm/yyyy`, otherwise the extraction time is used
//!
//! Only the first [`FeedConfig::max_candidates`] anchors are looked at. A
//! candidate that fails extraction is logged and dropped; the others are
//! unaffected.

use crate::config::FeedConfig;
use crate::error::ExtractionError;
use crate::models::Record;
use crate::scrapers::document::{LinearDocument, Node};
use crate::utils::truncate_for_log;
use chrono::{DateTime, NaiveDate, Utc};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::{debug, info, instrument, warn};
use url::Url;

static ARTICLE_HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/noticias/[^/]+$").expect("article href pattern is valid"));

static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}/\d{2}/\d{4}").expect("date pattern is valid"));

const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

const DATE_CONTAINERS: [&str; 3] = ["div", "span", "p"];

/// Turns the raw listing markup into an ordered, deduplicated list of records.
#[derive(Debug, Clone)]
pub struct Extractor {
    base: Url,
    max_candidates: usize,
}

impl Extractor {
    /// # Errors
    ///
    /// Fails only if the configured site link is not an absolute URL.
    pub fn new(config: &FeedConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(&config.site_link)?,
            max_candidates: config.max_candidates,
        })
    }

    /// Extract records from the listing page body.
    ///
    /// HTML parsing is error-tolerant, so this never fails as a whole; bad
    /// candidates are skipped individually. The result keeps page order and
    /// holds each link at most once.
    #[instrument(level = "info", skip_all, fields(bytes = raw.len()))]
    pub fn extract(&self, raw: &[u8]) -> Vec<Record> {
        let markup = String::from_utf8_lossy(raw);
        let html = Html::parse_document(&markup);
        let document = LinearDocument::new(&html);
        let now = Utc::now();

        let candidates = self.candidates(&document);
        debug!(count = candidates.len(), elements = document.len(), "Collected candidates");

        let mut records = Vec::with_capacity(candidates.len());
        for (position, anchor) in candidates {
            match self.extract_candidate(&document, position, anchor, now) {
                Ok(record) => records.push(record),
                Err(ExtractionError::MissingHeading) => {
                    debug!(href = ?anchor.attr("href"), "Anchor has no heading; skipping");
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        href = %truncate_for_log(anchor.attr("href").unwrap_or_default(), 200),
                        "Failed to extract article; skipping"
                    );
                }
            }
        }

        let records = dedupe(records);
        info!(count = records.len(), "Extracted articles");
        records
    }

    /// Anchors pointing at a single article, first `max_candidates` in page order.
    fn candidates<'a>(&self, document: &LinearDocument<'a>) -> Vec<(usize, Node<'a>)> {
        document
            .iter()
            .filter(|(_, node)| node.name() == "a")
            .filter(|(_, node)| node.attr("href").is_some_and(|href| ARTICLE_HREF.is_match(href)))
            .take(self.max_candidates)
            .collect()
    }

    fn extract_candidate(
        &self,
        document: &LinearDocument<'_>,
        position: usize,
        anchor: Node<'_>,
        now: DateTime<Utc>,
    ) -> Result<Record, ExtractionError> {
        let href = anchor.attr("href").ok_or(ExtractionError::MissingHref)?;
        let link = self.resolve(href)?;

        let heading = anchor
            .descendants()
            .find(|node| HEADINGS.contains(&node.name()))
            .ok_or(ExtractionError::MissingHeading)?;
        let title = heading.text();
        if title.is_empty() {
            return Err(ExtractionError::EmptyTitle);
        }

        let published_at = match find_date(document, position) {
            Some(text) => parse_date(text).unwrap_or_else(|| {
                debug!(%text, "Unparseable date; using extraction time");
                now
            }),
            None => now,
        };

        Ok(Record::new(title, link, published_at))
    }

    /// Absolute URL for `href`, joined onto the site root per RFC 3986.
    fn resolve(&self, href: &str) -> Result<String, ExtractionError> {
        self.base
            .join(href.trim())
            .map(String::from)
            .map_err(|source| ExtractionError::InvalidHref {
                href: href.to_string(),
                source,
            })
    }
}

/// Keep the first record for every link, preserving order.
pub fn dedupe(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .unique_by(|record| record.link.clone())
        .collect()
}

/// Trimmed sole text of the nearest element before `position` (in document
/// order) that contains a `dd/mm/yyyy` token.
fn find_date<'a>(document: &LinearDocument<'a>, position: usize) -> Option<&'a str> {
    document
        .preceding(position)
        .filter(|node| DATE_CONTAINERS.contains(&node.name()))
        .filter_map(|node| node.sole_text())
        .find(|text| DATE_TOKEN.is_match(text))
        .map(str::trim)
}

/// Parse the whole of `text` as `dd/mm/yyyy`, at midnight UTC.
///
/// Surrounding words or a time of day make the text unparseable.
fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(text.trim(), "%d/%m/%Y")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}
