//! Main splitter service that ties all components together.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::{SplitterConfig, INDEX_FILE_NAME};
use crate::error::{Result, SplitterError};
use crate::splitting::{partition, ChunkMetadata};
use crate::types::{ChunkFile, SitemapIndex, SplitSummary, UrlSet};
use crate::xml::{parse_urlset_bytes, write_sitemap_index, write_urlset};

/// Splits one sitemap into chunk files plus a `sitemap-index.xml`.
#[derive(Debug, Clone)]
pub struct SitemapSplitter {
    config: SplitterConfig,
}

impl SitemapSplitter {
    /// Create a splitter for the sitemap at `source_path`.
    ///
    /// # Arguments
    /// * `source_path` - Absolute or relative path to the sitemap file
    /// * `limit` - Maximum number of URLs per chunk file
    pub fn new(source_path: impl Into<PathBuf>, limit: usize) -> Result<Self> {
        Ok(Self::from_config(SplitterConfig::new(source_path, limit)?))
    }

    /// Create a splitter from an already validated configuration.
    #[must_use]
    pub fn from_config(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Configuration this splitter runs with.
    #[must_use]
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Read, split and write the sitemap.
    ///
    /// Chunk files `<base>-1.xml`, `<base>-2.xml`, ... and `sitemap-index.xml`
    /// are written next to the source file. The index lists every chunk by
    /// absolute URL, built from the host of the chunk's last entry.
    ///
    /// The first failure aborts the run. Chunk files written before the
    /// failure are left in place.
    pub fn split(&self) -> Result<SplitSummary> {
        let source = self.config.source_path();
        let _span = tracing::info_span!("split", path = %source.display()).entered();

        let urlset = read_urlset(source)?;
        tracing::info!(urls = urlset.len(), "Parsed sitemap");

        let limit = self.config.limit();
        let chunks = partition(&urlset.urls, limit);
        tracing::info!(chunks = chunks.len(), limit = limit.get(), "Partitioned URLs");

        let output_dir = self.config.output_dir();
        let base_name = self.config.base_name();
        let now = Local::now();

        let mut written = Vec::with_capacity(chunks.len());
        for (position, chunk) in chunks.into_iter().enumerate() {
            let metadata = ChunkMetadata::derive(chunk, position, &base_name, &now)?;
            if metadata.used_fallback {
                tracing::warn!(
                    file = %metadata.output_name,
                    lastmod = %metadata.last_modified,
                    "Last URL in chunk has no lastmod, using current time"
                );
            }

            let xml = write_urlset(&UrlSet::new(chunk.to_vec()))?;
            let path = output_dir.join(&metadata.output_name);
            write_atomic(&path, &xml)?;
            tracing::debug!(path = %path.display(), urls = chunk.len(), "Wrote chunk");

            written.push(ChunkFile {
                path,
                url_count: chunk.len(),
                sitemap: metadata.to_sitemap_ref(),
            });
        }

        let index = SitemapIndex::new(written.iter().map(|c| c.sitemap.clone()).collect());
        let xml = write_sitemap_index(&index)?;
        let index_path = output_dir.join(INDEX_FILE_NAME);
        write_atomic(&index_path, &xml)?;
        tracing::info!(path = %index_path.display(), sitemaps = written.len(), "Wrote sitemap index");

        Ok(SplitSummary {
            chunks: written,
            index_path,
        })
    }
}

/// Read and parse the source sitemap, rejecting one without URLs.
fn read_urlset(path: &Path) -> Result<UrlSet> {
    let bytes = fs::read(path).map_err(|source| SplitterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let urlset = parse_urlset_bytes(bytes).map_err(|source| SplitterError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if urlset.is_empty() {
        return Err(SplitterError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    Ok(urlset)
}

/// Write a file via a temporary sibling, sync, then rename into place.
///
/// A crash mid-write never leaves a truncated file under the final name.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    replace_via_temp(&temp_path, path, contents).map_err(|source| {
        // Best effort; the temp file may never have been created
        let _ = fs::remove_file(&temp_path);
        SplitterError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn replace_via_temp(temp_path: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    {
        let mut file = File::create(temp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_path, path)
}
