//! Partitioning of URL entries into fixed-size chunks.

use std::num::NonZeroUsize;

use crate::types::UrlEntry;

/// Split entries into ordered, contiguous chunks of at most `limit` entries.
///
/// Chunk `i` holds the entries at `[i * limit, min((i + 1) * limit, n))`.
/// Only the last chunk may be short and no chunk is ever empty, so an empty
/// input yields no chunks at all.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use sitemap_splitter::splitting::partition;
/// use sitemap_splitter::types::UrlEntry;
///
/// let urls: Vec<_> = (0..5)
///     .map(|i| UrlEntry::new(format!("https://example.com/{i}")))
///     .collect();
/// let limit = NonZeroUsize::new(2).unwrap();
///
/// let sizes: Vec<_> = partition(&urls, limit).iter().map(|c| c.len()).collect();
/// assert_eq!(sizes, vec![2, 2, 1]);
/// ```
#[must_use]
pub fn partition(entries: &[UrlEntry], limit: NonZeroUsize) -> Vec<&[UrlEntry]> {
    entries.chunks(limit.get()).collect()
}

/// Number of chunks `partition` produces for `len` entries: `ceil(len / limit)`.
#[must_use]
pub fn chunk_count(len: usize, limit: NonZeroUsize) -> usize {
    len.div_ceil(limit.get())
}
