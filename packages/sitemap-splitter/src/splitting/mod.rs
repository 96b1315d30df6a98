//! Splitting of a URL list into bounded chunks.
//!
//! [`partition`] cuts the list into contiguous chunks of at most `limit`
//! entries; [`ChunkMetadata`] names each chunk and derives how it is listed
//! in the sitemap index.

mod metadata;
mod partition;

pub use metadata::ChunkMetadata;
pub use partition::{chunk_count, partition};
