//! Sitemap XML reading and writing.

mod parser;
mod utils;
mod writer;

pub use parser::{parse_urlset, parse_urlset_bytes};
pub use utils::{child_text, find_child, find_children, get_tag_name, get_text, has_tag};
pub use writer::{write_sitemap_index, write_urlset};
