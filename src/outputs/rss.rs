//! RSS 2.0 feed serialization.
//!
//! # Document Structure
//!
//! ```text
//! <rss version="2.0" xmlns:atom=… xmlns:dc=…>
//!   <channel>
//!     title, link, description, language, lastBuildDate, atom:link rel="self"
//!     <item> title, link, description, pubDate, guid isPermaLink="true", dc:creator </item>
//!     …
//!   </channel>
//! </rss>
//! ```
//!
//! Items appear in the order the records were given.

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::models::Record;
use crate::outputs::{end, finish, indented_writer, start, write_declaration, write_text_element, xml_err};
use crate::utils::{rfc822, write_output};
use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Render the feed document for `records`, stamped with `built_at`.
pub fn render_feed(
    records: &[Record],
    config: &FeedConfig,
    built_at: DateTime<Utc>,
) -> Result<Vec<u8>, FeedError> {
    let mut w = indented_writer();
    write_declaration(&mut w)?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:atom", ATOM_NS));
    rss.push_attribute(("xmlns:dc", DC_NS));
    start(&mut w, rss)?;
    start(&mut w, BytesStart::new("channel"))?;

    write_text_element(&mut w, BytesStart::new("title"), &config.title)?;
    write_text_element(&mut w, BytesStart::new("link"), &config.site_link)?;
    write_text_element(&mut w, BytesStart::new("description"), &config.description)?;
    write_text_element(&mut w, BytesStart::new("language"), &config.language)?;
    write_text_element(&mut w, BytesStart::new("lastBuildDate"), &rfc822(&built_at))?;

    let mut self_link = BytesStart::new("atom:link");
    self_link.push_attribute(("href", config.self_link.as_str()));
    self_link.push_attribute(("rel", "self"));
    self_link.push_attribute(("type", "application/rss+xml"));
    w.write_event(Event::Empty(self_link)).map_err(xml_err)?;

    for record in records {
        write_item(&mut w, record, &config.creator)?;
    }

    end(&mut w, "channel")?;
    end(&mut w, "rss")?;
    Ok(finish(w))
}

fn write_item(w: &mut Writer<Vec<u8>>, record: &Record, creator: &str) -> Result<(), FeedError> {
    start(w, BytesStart::new("item"))?;
    write_text_element(w, BytesStart::new("title"), &record.title)?;
    write_text_element(w, BytesStart::new("link"), &record.link)?;
    write_text_element(w, BytesStart::new("description"), &record.description)?;
    write_text_element(w, BytesStart::new("pubDate"), &rfc822(&record.published_at))?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "true"));
    write_text_element(w, guid, &record.link)?;

    write_text_element(w, BytesStart::new("dc:creator"), creator)?;
    end(w, "item")
}

/// Write the feed to [`FeedConfig::output_path`], overwriting it.
///
/// With no records nothing is written: a warning is logged and `Ok(None)`
/// returned, leaving any previous file untouched.
#[instrument(level = "info", skip_all, fields(path = %config.output_path.display(), count = records.len()))]
pub async fn write_feed(records: &[Record], config: &FeedConfig) -> Result<Option<PathBuf>, FeedError> {
    if records.is_empty() {
        warn!("No articles found; feed not written");
        return Ok(None);
    }

    let xml = render_feed(records, config, Utc::now())?;
    write_output(&config.output_path, &xml).await?;
    info!(items = records.len(), "RSS feed generated");
    Ok(Some(config.output_path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn records() -> Vec<Record> {
        vec![
            Record::new(
                "Mercados & juros".to_string(),
                "https://www.asclub.pt/noticias/mercados".to_string(),
                Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap(),
            ),
            Record::new(
                "Bolsa <fecha> em alta".to_string(),
                "https://www.asclub.pt/noticias/bolsa".to_string(),
                Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap(),
            ),
        ]
    }

    fn temp_config(name: &str) -> FeedConfig {
        FeedConfig {
            output_path: std::env::temp_dir().join(format!("asclub_{name}_{}.xml", std::process::id())),
            ..FeedConfig::default()
        }
    }

    #[test]
    fn test_render_feed_channel_and_items() {
        let config = FeedConfig::default();
        let built_at = Utc.with_ymd_and_hms(2024, 3, 12, 8, 30, 0).unwrap();
        let xml = render_feed(&records(), &config, built_at).unwrap();

        let channel = ::rss::Channel::read_from(&xml[..]).unwrap();
        assert_eq!(channel.title(), "AS CLUB - Notícias");
        assert_eq!(channel.link(), "https://www.asclub.pt");
        assert_eq!(channel.description(), "Últimas notícias de finanças e investimentos do AS Club");
        assert_eq!(channel.language(), Some("pt"));
        assert_eq!(channel.last_build_date(), Some("Tue, 12 Mar 2024 08:30:00 +0000"));

        let items = channel.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), Some("Mercados & juros"));
        assert_eq!(items[0].link(), Some("https://www.asclub.pt/noticias/mercados"));
        assert_eq!(items[0].description(), Some("Mercados & juros"));
        assert_eq!(items[0].pub_date(), Some("Tue, 12 Mar 2024 00:00:00 +0000"));
        let guid = items[0].guid().unwrap();
        assert_eq!(guid.value(), "https://www.asclub.pt/noticias/mercados");
        assert!(guid.is_permalink());
        let creators = items[0].dublin_core_ext().unwrap().creators();
        assert_eq!(creators, ["AS CLUB".to_string()]);

        assert_eq!(items[1].title(), Some("Bolsa <fecha> em alta"));
        assert_eq!(items[1].pub_date(), Some("Mon, 11 Mar 2024 00:00:00 +0000"));
    }

    #[test]
    fn test_render_feed_markup() {
        let built_at = Utc.with_ymd_and_hms(2024, 3, 12, 8, 30, 0).unwrap();
        let xml = render_feed(&records(), &FeedConfig::default(), built_at).unwrap();
        let text = String::from_utf8(xml).unwrap();

        assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(text.contains(
            r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom" xmlns:dc="http://purl.org/dc/elements/1.1/">"#
        ));
        assert!(text.contains(
            r#"<atom:link href="https://axtancap.github.io/asclub-feeds/rss.xml" rel="self" type="application/rss+xml"/>"#
        ));
        assert!(text.contains("\n  <channel>"));
        assert!(text.contains("\n    <title>AS CLUB - Notícias</title>"));
        assert!(text.contains("<title>Bolsa &lt;fecha&gt; em alta</title>"));
        assert!(text.contains(r#"<guid isPermaLink="true">https://www.asclub.pt/noticias/bolsa</guid>"#));
        assert_eq!(text.matches("<item>").count(), 2);
        assert_eq!(text.matches("<dc:creator>AS CLUB</dc:creator>").count(), 2);
    }

    #[test]
    fn test_render_feed_without_items_is_valid() {
        let xml = render_feed(&[], &FeedConfig::default(), Utc::now()).unwrap();
        let channel = ::rss::Channel::read_from(&xml[..]).unwrap();
        assert!(channel.items().is_empty());
    }

    #[tokio::test]
    async fn test_write_feed_writes_file() {
        let config = temp_config("write_feed");
        let written = write_feed(&records(), &config).await.unwrap();
        assert_eq!(written.as_deref(), Some(config.output_path.as_path()));

        let bytes = std::fs::read(&config.output_path).unwrap();
        let channel = ::rss::Channel::read_from(&bytes[..]).unwrap();
        assert_eq!(channel.items().len(), 2);
        std::fs::remove_file(&config.output_path).unwrap();
    }

    #[tokio::test]
    async fn test_write_feed_with_no_records_leaves_file_alone() {
        let config = temp_config("write_feed_empty");
        std::fs::write(&config.output_path, b"previous").unwrap();

        let written = write_feed(&[], &config).await.unwrap();
        assert!(written.is_none());
        assert_eq!(std::fs::read(&config.output_path).unwrap(), b"previous");
        std::fs::remove_file(&config.output_path).unwrap();
    }

    #[tokio::test]
    async fn test_write_feed_with_no_records_creates_nothing() {
        let config = temp_config("write_feed_absent");
        let _ = std::fs::remove_file(&config.output_path);
        assert!(write_feed(&[], &config).await.unwrap().is_none());
        assert!(!config.output_path.exists());
    }
}
