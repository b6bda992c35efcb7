//! Error types for fetching, extraction and output.

use thiserror::Error;

/// The listing page (or a feed) could not be downloaded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

/// A single candidate anchor could not be turned into a record.
///
/// These never abort a run; the extractor logs them and moves on.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("anchor has no href")]
    MissingHref,

    #[error("cannot resolve href '{href}': {source}")]
    InvalidHref {
        href: String,
        source: url::ParseError,
    },

    #[error("anchor contains no heading")]
    MissingHeading,

    #[error("heading has no text")]
    EmptyTitle,
}

/// Writing the feed or sitemap failed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("XML write failed: {0}")]
    Xml(String),

    #[error("{operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: String,
        source: std::io::Error,
    },
}

/// The news sitemap could not be produced.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("feed is neither RSS nor Atom: {0}")]
    UnrecognizedFeed(String),

    #[error(transparent)]
    Output(#[from] FeedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            status: 503,
            url: "https://www.asclub.pt/noticias".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 from https://www.asclub.pt/noticias");
    }

    #[test]
    fn test_invalid_href_message() {
        let source = url::Url::parse("http://[::1").unwrap_err();
        let err = ExtractionError::InvalidHref {
            href: "http://[::1".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("cannot resolve href 'http://[::1'"));
    }

    #[test]
    fn test_sitemap_error_wraps_output() {
        let err: SitemapError = FeedError::Xml("boom".to_string()).into();
        assert_eq!(err.to_string(), "XML write failed: boom");
    }
}
