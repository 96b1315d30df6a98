//! Parsing of `urlset` documents.

use roxmltree::{Document, Node};

use super::utils::{child_text, find_children, get_tag_name};
use crate::error::ParseError;
use crate::types::{UrlEntry, UrlSet};

/// Decode raw sitemap bytes into a `UrlSet`.
///
/// The bytes must be UTF-8, as the sitemap protocol requires.
pub fn parse_urlset_bytes(bytes: Vec<u8>) -> Result<UrlSet, ParseError> {
    let xml = String::from_utf8(bytes)?;
    parse_urlset(&xml)
}

/// Parse a `urlset` document.
///
/// Elements are matched on local name, so both the default namespace and
/// prefixed forms are accepted. Unknown elements and attributes are ignored.
/// The namespace values of the input are not kept; emitted documents always
/// carry the standard ones.
///
/// An empty `<urlset/>` parses successfully; rejecting it is up to the caller.
///
/// # Examples
/// ```
/// use sitemap_splitter::xml::parse_urlset;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url>
///     <loc>https://example.com/page1</loc>
///     <lastmod>2024-01-15</lastmod>
///   </url>
/// </urlset>"#;
///
/// let set = parse_urlset(xml).unwrap();
/// assert_eq!(set.urls.len(), 1);
/// assert_eq!(set.urls[0].location, "https://example.com/page1");
/// ```
pub fn parse_urlset(xml: &str) -> Result<UrlSet, ParseError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let root_name = get_tag_name(root);
    if root_name != "urlset" {
        return Err(ParseError::UnexpectedRoot {
            expected: "urlset",
            found: root_name.to_string(),
        });
    }

    let urls = find_children(root, "url")
        .enumerate()
        .map(|(i, node)| parse_url_entry(node, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(UrlSet::new(urls))
}

/// Parse a single `<url>` element. `ordinal` is 1-based, for error messages.
fn parse_url_entry(node: Node<'_, '_>, ordinal: usize) -> Result<UrlEntry, ParseError> {
    let location = child_text(node, "loc").ok_or_else(|| ParseError::MissingElement {
        element: "loc",
        context: format!("url #{ordinal}"),
    })?;

    Ok(UrlEntry {
        location,
        last_modified: child_text(node, "lastmod"),
        change_frequency: child_text(node, "changefreq"),
        priority: child_text(node, "priority"),
    })
}
