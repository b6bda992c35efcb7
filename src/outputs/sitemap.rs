//! Google News sitemap serialization.
//!
//! ```text
//! <urlset xmlns=sitemap/0.9 xmlns:news=sitemap-news/0.9>
//!   <url>
//!     <loc>…</loc>
//!     <news:news>
//!       <news:publication><news:name/><news:language/></news:publication>
//!       <news:publication_date>2024-03-12T00:00:00.000Z</news:publication_date>
//!       <news:title>…</news:title>
//!     </news:news>
//!   </url>
//! </urlset>
//! ```

use crate::config::SitemapConfig;
use crate::error::FeedError;
use crate::models::NewsEntry;
use crate::outputs::{end, finish, indented_writer, start, write_declaration, write_text_element};
use chrono::SecondsFormat;
use quick_xml::events::BytesStart;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";

/// Render the sitemap for `entries`, in the given order.
pub fn render_sitemap(entries: &[NewsEntry], config: &SitemapConfig) -> Result<Vec<u8>, FeedError> {
    let mut w = indented_writer();
    write_declaration(&mut w)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:news", NEWS_NS));
    start(&mut w, urlset)?;

    for entry in entries {
        start(&mut w, BytesStart::new("url"))?;
        write_text_element(&mut w, BytesStart::new("loc"), &entry.url)?;

        start(&mut w, BytesStart::new("news:news"))?;
        start(&mut w, BytesStart::new("news:publication"))?;
        write_text_element(&mut w, BytesStart::new("news:name"), &config.publication_name)?;
        write_text_element(&mut w, BytesStart::new("news:language"), &config.language)?;
        end(&mut w, "news:publication")?;
        write_text_element(
            &mut w,
            BytesStart::new("news:publication_date"),
            &entry.published_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        write_text_element(&mut w, BytesStart::new("news:title"), &entry.title)?;
        end(&mut w, "news:news")?;

        end(&mut w, "url")?;
    }

    end(&mut w, "urlset")?;
    Ok(finish(w))
}
