//! Spreadsheet output for crawl results.

mod writer;

pub use writer::{generate_xlsx, save_xlsx, DEFAULT_SHEET_NAME};
