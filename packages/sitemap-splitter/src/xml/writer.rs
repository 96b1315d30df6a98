//! Serialization of `urlset` and `sitemapindex` documents.
//!
//! Output starts with the standard XML declaration followed by the
//! document indented with two spaces, one element per line:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/</loc>
//!   </url>
//! </urlset>
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Result, SplitterError};
use crate::types::{SitemapIndex, UrlSet};

/// Indent character and width of emitted documents.
const INDENT_CHAR: u8 = b' ';
const INDENT_SIZE: usize = 2;

/// Event writer that tags encoder failures with the document being written.
struct DocumentWriter {
    writer: Writer<Vec<u8>>,
    document: &'static str,
}

impl DocumentWriter {
    /// Start a document, emitting the XML declaration.
    fn new(document: &'static str) -> Result<Self> {
        let mut this = Self {
            writer: Writer::new_with_indent(Vec::new(), INDENT_CHAR, INDENT_SIZE),
            document,
        };
        this.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(this)
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| SplitterError::Serialization {
                document: self.document,
                message: e.to_string(),
            })
    }

    fn start(&mut self, start: BytesStart<'_>) -> Result<()> {
        self.write(Event::Start(start))
    }

    fn end(&mut self, tag: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(tag)))
    }

    /// Write `<tag>text</tag>` on a single line.
    fn text_element(&mut self, tag: &str, text: &str) -> Result<()> {
        self.start(BytesStart::new(tag))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.end(tag)
    }

    /// Write a text element only when a value is present.
    fn optional_text_element(&mut self, tag: &str, text: Option<&str>) -> Result<()> {
        match text {
            Some(text) => self.text_element(tag, text),
            None => Ok(()),
        }
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

/// Serialize a `urlset` document.
///
/// Absent `lastmod`, `changefreq` and `priority` values are omitted rather
/// than written as empty elements.
///
/// # Examples
/// ```
/// use sitemap_splitter::types::{UrlEntry, UrlSet};
/// use sitemap_splitter::xml::write_urlset;
///
/// let set = UrlSet::new(vec![UrlEntry::new("https://example.com/")]);
/// let xml = String::from_utf8(write_urlset(&set).unwrap()).unwrap();
/// assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
/// assert!(xml.contains("    <loc>https://example.com/</loc>"));
/// ```
pub fn write_urlset(set: &UrlSet) -> Result<Vec<u8>> {
    let mut w = DocumentWriter::new("urlset")?;

    w.start(BytesStart::new("urlset").with_attributes([
        ("xmlns", set.namespace.as_str()),
        ("xmlns:xhtml", set.xhtml_namespace.as_str()),
    ]))?;

    for url in &set.urls {
        w.start(BytesStart::new("url"))?;
        w.text_element("loc", &url.location)?;
        w.optional_text_element("lastmod", url.last_modified.as_deref())?;
        w.optional_text_element("changefreq", url.change_frequency.as_deref())?;
        w.optional_text_element("priority", url.priority.as_deref())?;
        w.end("url")?;
    }

    w.end("urlset")?;
    Ok(w.finish())
}

/// Serialize a `sitemapindex` document.
///
/// Every entry carries both `loc` and `lastmod`.
pub fn write_sitemap_index(index: &SitemapIndex) -> Result<Vec<u8>> {
    let mut w = DocumentWriter::new("sitemapindex")?;

    w.start(BytesStart::new("sitemapindex").with_attributes([("xmlns", index.namespace.as_str())]))?;

    for sitemap in &index.sitemaps {
        w.start(BytesStart::new("sitemap"))?;
        w.text_element("loc", &sitemap.location)?;
        w.text_element("lastmod", &sitemap.last_modified)?;
        w.end("sitemap")?;
    }

    w.end("sitemapindex")?;
    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SitemapRef, UrlEntry};
    use crate::xml::parse_urlset;
    use pretty_assertions::assert_eq;

    fn to_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_write_urlset_layout() {
        let set = UrlSet::new(vec![
            UrlEntry::new("https://example.com/a")
                .with_last_modified("2024-01-15")
                .with_change_frequency("daily")
                .with_priority("0.5"),
            UrlEntry::new("https://example.com/b"),
        ]);
        let xml = to_string(write_urlset(&set).unwrap());

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">
  <url>
    <loc>https://example.com/a</loc>
    <lastmod>2024-01-15</lastmod>
    <changefreq>daily</changefreq>
    <priority>0.5</priority>
  </url>
  <url>
    <loc>https://example.com/b</loc>
  </url>
</urlset>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_write_sitemap_index_layout() {
        let index = SitemapIndex::new(vec![
            SitemapRef {
                location: "https://example.com/sitemap-1.xml".to_string(),
                last_modified: "2024-01-15".to_string(),
            },
            SitemapRef {
                location: "https://example.com/sitemap-2.xml".to_string(),
                last_modified: "2024-02-01".to_string(),
            },
        ]);
        let xml = to_string(write_sitemap_index(&index).unwrap());

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap>
    <loc>https://example.com/sitemap-1.xml</loc>
    <lastmod>2024-01-15</lastmod>
  </sitemap>
  <sitemap>
    <loc>https://example.com/sitemap-2.xml</loc>
    <lastmod>2024-02-01</lastmod>
  </sitemap>
</sitemapindex>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_write_escapes_text() {
        let set = UrlSet::new(vec![UrlEntry::new("https://example.com/?a=1&b=<2>")]);
        let xml = to_string(write_urlset(&set).unwrap());
        assert!(xml.contains("https://example.com/?a=1&amp;b=&lt;2&gt;"));
    }

    #[test]
    fn test_round_trip() {
        let urls = vec![
            UrlEntry::new("https://example.com/a?x=1&y=2")
                .with_last_modified("2024-01-15T10:00:00+01:00")
                .with_priority("1.0"),
            UrlEntry::new("https://example.com/b").with_change_frequency("monthly"),
            UrlEntry::new("https://example.com/c"),
        ];
        let set = UrlSet::new(urls.clone());

        let xml = to_string(write_urlset(&set).unwrap());
        let reparsed = parse_urlset(&xml).unwrap();

        assert_eq!(reparsed.urls, urls);
    }
}
