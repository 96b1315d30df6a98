//! Per-chunk metadata: file name, base URL and last-modified stamp.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone};
use url::Url;

use crate::error::{Result, SplitterError};
use crate::types::{SitemapRef, UrlEntry};

/// How a chunk is named and listed in the sitemap index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// File name of the chunk, e.g. `sitemap-1.xml`.
    pub output_name: String,

    /// `<scheme>://<host>/` of the chunk's last entry.
    pub base_url: String,

    /// Last-modified stamp of the chunk's last entry, or the run time.
    pub last_modified: String,

    /// Whether `last_modified` fell back to the run time.
    pub used_fallback: bool,
}

impl ChunkMetadata {
    /// Derive metadata for the chunk at 0-based `position`.
    ///
    /// The **last** entry of the chunk is representative for the whole
    /// chunk: its host becomes the base URL and its `lastmod` the chunk's
    /// `lastmod`. When that entry has no `lastmod`, `now` is used, formatted
    /// as RFC 3339.
    ///
    /// An empty chunk is reported as a URL error on an empty location;
    /// `partition` never produces one.
    pub fn derive<Tz>(
        chunk: &[UrlEntry],
        position: usize,
        base_name: &str,
        now: &DateTime<Tz>,
    ) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let Some(last) = chunk.last() else {
            return Err(SplitterError::UrlParse {
                location: String::new(),
                source: url::ParseError::EmptyHost,
            });
        };

        let (last_modified, used_fallback) = match &last.last_modified {
            Some(value) => (value.clone(), false),
            None => (now.to_rfc3339_opts(SecondsFormat::Secs, true), true),
        };

        Ok(Self {
            output_name: chunk_file_name(base_name, position),
            base_url: base_url(&last.location)?,
            last_modified,
            used_fallback,
        })
    }

    /// Index entry pointing at this chunk.
    #[must_use]
    pub fn to_sitemap_ref(&self) -> SitemapRef {
        SitemapRef {
            location: format!("{}{}", self.base_url, self.output_name),
            last_modified: self.last_modified.clone(),
        }
    }
}

/// File name for the chunk at 0-based `position`; numbering starts at 1.
fn chunk_file_name(base_name: &str, position: usize) -> String {
    format!("{base_name}-{}.xml", position + 1)
}

/// Reduce an absolute URL to `<scheme>://<host>[:<port>]/`.
///
/// Default ports are dropped by the URL parser; explicit other ports are kept.
fn base_url(location: &str) -> Result<String> {
    let url_error = |source| SplitterError::UrlParse {
        location: location.to_string(),
        source,
    };

    let parsed = Url::parse(location).map_err(url_error)?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| url_error(url::ParseError::EmptyHost))?;

    Ok(match parsed.port() {
        Some(port) => format!("{}://{host}:{port}/", parsed.scheme()),
        None => format!("{}://{host}/", parsed.scheme()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn test_derive_uses_last_entry() {
        let chunk = vec![
            UrlEntry::new("https://first.example.com/a").with_last_modified("2024-01-01"),
            UrlEntry::new("https://example.com/b/c?d=e").with_last_modified("2024-06-30"),
        ];
        let meta = ChunkMetadata::derive(&chunk, 2, "sitemap", &fixed_now()).unwrap();

        assert_eq!(meta.output_name, "sitemap-3.xml");
        assert_eq!(meta.base_url, "https://example.com/");
        assert_eq!(meta.last_modified, "2024-06-30");
        assert!(!meta.used_fallback);
    }

    #[test]
    fn test_derive_does_not_take_maximum_last_modified() {
        let chunk = vec![
            UrlEntry::new("https://example.com/new").with_last_modified("2025-12-31"),
            UrlEntry::new("https://example.com/old").with_last_modified("2020-01-01"),
        ];
        let meta = ChunkMetadata::derive(&chunk, 0, "sitemap", &fixed_now()).unwrap();
        assert_eq!(meta.last_modified, "2020-01-01");
    }

    #[test]
    fn test_derive_falls_back_to_now() {
        let chunk = vec![
            UrlEntry::new("https://example.com/a").with_last_modified("2024-01-01"),
            UrlEntry::new("https://example.com/b"),
        ];
        let meta = ChunkMetadata::derive(&chunk, 0, "sitemap", &fixed_now()).unwrap();

        assert_eq!(meta.last_modified, "2026-03-04T05:06:07Z");
        assert!(meta.used_fallback);
    }

    #[test]
    fn test_derive_rejects_invalid_location() {
        let chunk = vec![
            UrlEntry::new("https://example.com/a"),
            UrlEntry::new("not a url"),
        ];
        let err = ChunkMetadata::derive(&chunk, 0, "sitemap", &fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            SplitterError::UrlParse { ref location, .. } if location == "not a url"
        ));
    }

    #[test]
    fn test_derive_ignores_invalid_location_before_last() {
        let chunk = vec![
            UrlEntry::new("not a url"),
            UrlEntry::new("https://example.com/b"),
        ];
        assert!(ChunkMetadata::derive(&chunk, 0, "sitemap", &fixed_now()).is_ok());
    }

    #[test]
    fn test_derive_empty_chunk() {
        assert!(ChunkMetadata::derive(&[], 0, "sitemap", &fixed_now()).is_err());
    }

    #[test]
    fn test_base_url_keeps_explicit_port() {
        assert_eq!(
            base_url("http://localhost:8080/docs/page").unwrap(),
            "http://localhost:8080/"
        );
        assert_eq!(
            base_url("https://example.com:443/page").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_base_url_drops_credentials_path_and_query() {
        assert_eq!(
            base_url("https://user:pw@Example.COM/a/b?c=d#frag").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_base_url_requires_host() {
        assert!(base_url("mailto:someone@example.com").is_err());
        assert!(base_url("/relative/path").is_err());
    }

    #[test]
    fn test_to_sitemap_ref() {
        let meta = ChunkMetadata {
            output_name: "products-2.xml".to_string(),
            base_url: "https://shop.example.com/".to_string(),
            last_modified: "2024-05-01".to_string(),
            used_fallback: false,
        };
        assert_eq!(
            meta.to_sitemap_ref(),
            SitemapRef {
                location: "https://shop.example.com/products-2.xml".to_string(),
                last_modified: "2024-05-01".to_string(),
            }
        );
    }
}
