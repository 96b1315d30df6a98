//! Error types for the sitemap splitter.
//!
//! Uses the dual-error pattern: `SplitterError` for library consumers
//! with the offending path or value, and `ParseError` for the detailed
//! reason a source document was rejected.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the sitemap splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Constructor arguments were rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The source sitemap could not be read.
    #[error("Failed to read sitemap {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source sitemap is not a well-formed `urlset` document.
    #[error("Failed to parse sitemap {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The source sitemap parsed but holds no `<url>` entries.
    #[error("No URLs found in sitemap {}", .path.display())]
    EmptyDocument { path: PathBuf },

    /// A chunk's representative location is not an absolute URL.
    #[error("Invalid URL '{location}': {source}")]
    UrlParse {
        location: String,
        #[source]
        source: url::ParseError,
    },

    /// The XML encoder failed.
    #[error("Failed to serialize {document}: {message}")]
    Serialization {
        document: &'static str,
        message: String,
    },

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a source document is rejected by the parser.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Source bytes are not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// XML is not well-formed.
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Root element is not the expected one.
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// Missing required XML element.
    #[error("missing required element <{element}> in {context}")]
    MissingElement {
        element: &'static str,
        context: String,
    },
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
