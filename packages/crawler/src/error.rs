//! Error types for the crawler.
//!
//! A single `CrawlerError` covers input resolution, document parsing, tour
//! selection and export. Nothing is recovered locally: every variant bubbles
//! up to the CLI, which reports it and exits.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the crawler library.
#[derive(Debug, Error)]
pub enum CrawlerError {
    /// Network locations are not crawled; only saved pages are supported.
    #[error("Crawler supports only saved HTML files, got URL: \"{0}\"")]
    UnsupportedUrl(String),

    /// Input location does not exist on disk.
    #[error("Path or URL does not exist: {0}")]
    LocationNotFound(String),

    /// Input location is not a valid glob pattern.
    #[error("Invalid input pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// A path matched by the input pattern could not be inspected.
    #[error("Failed to list input files: {0}")]
    Glob(#[from] glob::GlobError),

    /// A located document could not be read as text.
    #[error("Failed to read document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing required HTML element.
    #[error("Missing required HTML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Missing required HTML attribute.
    #[error("Missing required attribute '{attribute}' on {element}")]
    MissingAttribute { attribute: String, element: String },

    /// Requested tour has no ruleset.
    #[error("Unknown tour: '{0}'. Expected one of: 2022, 2023")]
    UnknownTour(String),

    /// A sweater keyword pattern failed to compile.
    #[error("Invalid sweater pattern: {0}")]
    InvalidSweaterPattern(#[from] regex::Error),

    /// Spreadsheet generation failed.
    #[error("Export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, CrawlerError>;
