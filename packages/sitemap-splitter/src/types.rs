//! Core data types for the sitemap splitter.
//!
//! These types mirror the two document shapes of the sitemap protocol:
//! the `urlset` listing pages and the `sitemapindex` listing sitemaps.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{SITEMAP_NAMESPACE, XHTML_NAMESPACE};

/// A single `<url>` entry of a sitemap.
///
/// Only `location` is required. The optional values are opaque strings,
/// passed through unmodified between input and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlEntry {
    /// Absolute URL of the page (`<loc>`).
    pub location: String,

    /// Last modification date/time (`<lastmod>`).
    pub last_modified: Option<String>,

    /// Change frequency hint (`<changefreq>`).
    pub change_frequency: Option<String>,

    /// Relative priority (`<priority>`).
    pub priority: Option<String>,
}

impl UrlEntry {
    /// Create an entry with only a location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
        }
    }

    /// Set the last modification date.
    #[must_use]
    pub fn with_last_modified(mut self, last_modified: impl Into<String>) -> Self {
        self.last_modified = Some(last_modified.into());
        self
    }

    /// Set the change frequency.
    #[must_use]
    pub fn with_change_frequency(mut self, change_frequency: impl Into<String>) -> Self {
        self.change_frequency = Some(change_frequency.into());
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// A `<urlset>` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSet {
    /// Value of the default `xmlns` attribute.
    pub namespace: String,

    /// Value of the `xmlns:xhtml` attribute.
    pub xhtml_namespace: String,

    /// Entries in document order.
    pub urls: Vec<UrlEntry>,
}

impl UrlSet {
    /// Create a document carrying the standard namespaces.
    #[must_use]
    pub fn new(urls: Vec<UrlEntry>) -> Self {
        Self {
            namespace: SITEMAP_NAMESPACE.to_string(),
            xhtml_namespace: XHTML_NAMESPACE.to_string(),
            urls,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// A `<sitemap>` entry of a sitemap index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapRef {
    /// Absolute URL of the referenced sitemap.
    pub location: String,

    /// Last modification date/time of the referenced sitemap.
    pub last_modified: String,
}

/// A `<sitemapindex>` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapIndex {
    /// Value of the default `xmlns` attribute.
    pub namespace: String,

    /// Referenced sitemaps, in generation order.
    pub sitemaps: Vec<SitemapRef>,
}

impl SitemapIndex {
    /// Create an index carrying the standard namespace.
    #[must_use]
    pub fn new(sitemaps: Vec<SitemapRef>) -> Self {
        Self {
            namespace: SITEMAP_NAMESPACE.to_string(),
            sitemaps,
        }
    }
}

/// A chunk file written by a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkFile {
    /// Where the chunk was written.
    pub path: PathBuf,

    /// Number of `<url>` entries in the chunk.
    pub url_count: usize,

    /// How the chunk is listed in the index.
    pub sitemap: SitemapRef,
}

/// Outcome of a successful split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    /// Chunk files, in order.
    pub chunks: Vec<ChunkFile>,

    /// Where the sitemap index was written.
    pub index_path: PathBuf,
}

impl SplitSummary {
    /// Total number of URLs across all chunks.
    #[must_use]
    pub fn total_urls(&self) -> usize {
        self.chunks.iter().map(|c| c.url_count).sum()
    }
}
