//! Turning fetched bytes into structured entries.
//!
//! | Input | Module | Method | Notes |
//! |-------|--------|--------|-------|
//! | AS CLUB news listing | [`asclub`] | HTML scraping | Anchors to `/noticias/<slug>`, heading as title, nearby `dd/mm/yyyy` as date |
//! | RSS 2.0 / Atom feed | [`feed`] | XML parsing | Input of the news sitemap generator |
//!
//! [`document`] is the typed, document-order view of a parsed HTML page the
//! listing extractor walks over.

pub mod asclub;
pub mod document;
pub mod feed;
