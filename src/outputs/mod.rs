//! XML output generation.
//!
//! # Submodules
//!
//! - [`rss`]: RSS 2.0 feed built from extracted records (`rss.xml`)
//! - [`sitemap`]: Google News sitemap built from a published feed (`news-sitemap.xml`)
//!
//! Both documents are written with `quick-xml`, UTF-8, indented by two spaces.

pub mod rss;
pub mod sitemap;

use crate::error::FeedError;
use crate::utils::sanitize_xml_text;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt::Display;

/// A writer that indents nested elements by two spaces.
pub(crate) fn indented_writer() -> Writer<Vec<u8>> {
    Writer::new_with_indent(Vec::new(), b' ', 2)
}

pub(crate) fn xml_err(e: impl Display) -> FeedError {
    FeedError::Xml(e.to_string())
}

pub(crate) fn write_declaration(w: &mut Writer<Vec<u8>>) -> Result<(), FeedError> {
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)
}

pub(crate) fn start(w: &mut Writer<Vec<u8>>, element: BytesStart<'_>) -> Result<(), FeedError> {
    w.write_event(Event::Start(element)).map_err(xml_err)
}

pub(crate) fn end(w: &mut Writer<Vec<u8>>, name: &str) -> Result<(), FeedError> {
    w.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)
}

/// `<name>text</name>`, escaping the text and dropping characters XML cannot carry.
pub(crate) fn write_text_element(
    w: &mut Writer<Vec<u8>>,
    element: BytesStart<'_>,
    text: &str,
) -> Result<(), FeedError> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    start(w, element)?;
    let text = sanitize_xml_text(text);
    w.write_event(Event::Text(BytesText::new(&text))).map_err(xml_err)?;
    end(w, &name)
}

/// Finish the document with a trailing newline.
pub(crate) fn finish(w: Writer<Vec<u8>>) -> Vec<u8> {
    let mut out = w.into_inner();
    out.push(b'\n');
    out
}
