//! Sitemap Splitter - Split large XML sitemaps into protocol-compliant chunks.
//!
//! Reads a `urlset` sitemap, cuts its URLs into files of at most `limit`
//! entries each and writes a `sitemap-index.xml` that references them.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_splitter::SitemapSplitter;
//!
//! let splitter = SitemapSplitter::new("public/sitemap.xml", 10_000)?;
//! let summary = splitter.split()?;
//! println!("Wrote {} sitemaps", summary.chunks.len());
//! # Ok::<(), sitemap_splitter::SplitterError>(())
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Protocol constants and configuration validation
//! - [`types`]: Document model (URL entries, URL sets, sitemap index)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Parsing and serialization of sitemap documents
//! - [`splitting`]: Partitioning and per-chunk metadata
//! - [`splitter`]: Main splitter service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod splitter;
pub mod splitting;
pub mod types;
pub mod xml;

// Re-export the main entry point
pub use splitter::SitemapSplitter;

// Re-export commonly used items
pub use config::SplitterConfig;
pub use error::{ParseError, Result, SplitterError};
pub use types::{ChunkFile, SitemapIndex, SitemapRef, SplitSummary, UrlEntry, UrlSet};
