//! Bookquest Crawler - Collect livelib bookquest entries into a spreadsheet.
//!
//! This crate walks saved bookquest pages, extracts every contest entry,
//! classifies it according to the rules of a yearly tour and exports the
//! result as an XLSX workbook.
//!
//! # Example
//!
//! ```
//! use bookquest_crawler::{Crawler, CrawlerConfig, MemoryPageWalker, TourCrawler, TourVariant};
//!
//! let page = r#"<div id="entries">
//!     <div id="bookrequest1042">
//!         <a class="a-login-black" title="reader">reader</a>
//!         <p class="description">Камикадзе, куратор Wender</p>
//!     </div>
//! </div>"#;
//!
//! let walker = MemoryPageWalker::new([("page.html", page)]);
//! let mut crawler = TourCrawler::new(walker, TourVariant::Tour2022, CrawlerConfig::default())?;
//! let table = crawler.parse()?;
//!
//! assert_eq!(table.rows()[0].app_id, "1042");
//! assert_eq!(table.rows()[0].curator.as_deref(), Some("wender"));
//! # Ok::<(), bookquest_crawler::CrawlerError>(())
//! ```
//!
//! # Architecture
//!
//! The crawler is organized into several modules:
//!
//! - [`config`]: Configuration constants, location validation and crawl settings
//! - [`types`]: Core data types (EntryRecord, Table, Column, TourVariant)
//! - [`error`]: Error types and Result alias
//! - [`source`]: Page walkers over saved documents
//! - [`html`]: HTML utilities
//! - [`entry`]: Raw entry extraction
//! - [`rules`]: Per-tour columns and entry classifiers
//! - [`xlsx`]: XLSX output generation
//! - [`cli`]: Command-line interface
//! - [`crawler`]: Main crawl engine

pub mod cli;
pub mod config;
pub mod crawler;
pub mod entry;
pub mod error;
pub mod html;
pub mod rules;
pub mod source;
pub mod types;
pub mod xlsx;

// Re-export the crawl engine
pub use crawler::{Crawler, TourCrawler};

// Re-export commonly used items
pub use config::{validate_location, CrawlerConfig};
pub use error::{CrawlerError, Result};
pub use source::{FilePageWalker, MemoryPageWalker, Page, PageWalker};
pub use types::{Column, EntryRecord, Table, TourVariant};
pub use xlsx::{generate_xlsx, save_xlsx};
