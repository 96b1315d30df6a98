//! Configuration constants and validation for the sitemap splitter.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};

/// Namespace of the sitemap protocol, set on every emitted root element.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// XHTML namespace carried on `urlset` documents for alternate-language links.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// File name of the generated sitemap index.
pub const INDEX_FILE_NAME: &str = "sitemap-index.xml";

/// Maximum number of URLs a single sitemap may hold under the protocol.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// Default chunk size used by the CLI.
pub const DEFAULT_LIMIT: usize = MAX_URLS_PER_SITEMAP;

/// Validate the source path.
///
/// # Examples
/// ```
/// use sitemap_splitter::config::validate_source_path;
///
/// assert!(validate_source_path("sitemap.xml").is_ok());
/// assert!(validate_source_path("").is_err());
/// ```
pub fn validate_source_path(path: impl AsRef<Path>) -> Result<()> {
    if path.as_ref().as_os_str().is_empty() {
        return Err(SplitterError::InvalidConfiguration(
            "sitemap path is required".to_string(),
        ));
    }
    Ok(())
}

/// Validate the maximum number of URLs per chunk.
///
/// Limits above [`MAX_URLS_PER_SITEMAP`] are accepted but produce chunks
/// search engines may reject, so a warning is logged.
///
/// # Examples
/// ```
/// use sitemap_splitter::config::validate_limit;
///
/// assert!(validate_limit(10).is_ok());
/// assert!(validate_limit(0).is_err());
/// ```
pub fn validate_limit(limit: usize) -> Result<NonZeroUsize> {
    let Some(limit) = NonZeroUsize::new(limit) else {
        return Err(SplitterError::InvalidConfiguration(
            "limit must be greater than 0".to_string(),
        ));
    };
    if limit.get() > MAX_URLS_PER_SITEMAP {
        tracing::warn!(
            limit = limit.get(),
            max = MAX_URLS_PER_SITEMAP,
            "Limit exceeds the sitemap protocol maximum"
        );
    }
    Ok(limit)
}

/// Validated splitter settings.
///
/// Immutable once constructed; a single value may drive any number of splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterConfig {
    source_path: PathBuf,
    limit: NonZeroUsize,
}

impl SplitterConfig {
    /// Create a configuration, rejecting an empty path or a zero limit.
    ///
    /// Nothing on the filesystem is touched here.
    pub fn new(source_path: impl Into<PathBuf>, limit: usize) -> Result<Self> {
        let source_path = source_path.into();
        validate_source_path(&source_path)?;
        let limit = validate_limit(limit)?;
        Ok(Self { source_path, limit })
    }

    /// Path of the sitemap to split.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Maximum number of URLs per chunk.
    #[must_use]
    pub fn limit(&self) -> NonZeroUsize {
        self.limit
    }

    /// Directory the chunk and index files are written to.
    ///
    /// A bare file name yields an empty path, which resolves against the
    /// working directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        self.source_path.parent().unwrap_or(Path::new(""))
    }

    /// Source file name with its extension stripped, used to name chunks.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.source_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sitemap".to_string())
    }
}
