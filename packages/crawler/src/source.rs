//! Document sources: where saved tour pages come from.
//!
//! A source hands out parsed pages one at a time through the [`PageWalker`]
//! trait. Walkers hold a cursor and are not restartable.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Html;

use crate::config::{is_pattern, DOCUMENT_EXTENSION};
use crate::error::{CrawlerError, Result};

/// A parsed page together with where it came from.
pub struct Page {
    /// File path or in-memory name of the page.
    pub source: PathBuf,

    /// Parsed document.
    pub document: Html,
}

impl Page {
    /// Parse a page from its HTML text.
    #[must_use]
    pub fn parse(source: impl Into<PathBuf>, html: &str) -> Self {
        Self {
            source: source.into(),
            document: Html::parse_document(html),
        }
    }
}

/// Lazy, forward-only sequence of parsed pages.
pub trait PageWalker {
    /// Parse and return the next page, or `None` once the source is exhausted.
    fn next_page(&mut self) -> Result<Option<Page>>;
}

/// Turn an input location into a glob pattern.
///
/// A location that is neither a pattern nor an `.html` file is treated as a
/// directory and expanded to every `.html` file directly inside it.
///
/// # Examples
/// ```
/// use bookquest_crawler::source::resolve_pattern;
///
/// assert_eq!(resolve_pattern("pages"), "pages/*.html");
/// assert_eq!(resolve_pattern("pages/*.htm*"), "pages/*.htm*");
/// assert_eq!(resolve_pattern("pages/tour.html"), "pages/tour.html");
/// ```
pub fn resolve_pattern(location: &str) -> String {
    if !location.is_empty() && !is_pattern(location) && !location.ends_with(DOCUMENT_EXTENSION) {
        let dir = glob::Pattern::escape(location.trim_end_matches(['/', '\\']));
        format!("{dir}/*.{DOCUMENT_EXTENSION}")
    } else {
        location.to_string()
    }
}

/// Page walker over saved HTML files.
pub struct FilePageWalker {
    pages: Vec<PathBuf>,
    cursor: usize,
}

impl FilePageWalker {
    /// Resolve a location (directory, file or glob pattern) to a list of pages.
    ///
    /// Files are not read until they are walked.
    pub fn new(location: &str) -> Result<Self> {
        let pattern = resolve_pattern(location);
        let pages = glob::glob(&pattern)?.collect::<std::result::Result<Vec<_>, _>>()?;

        if pages.is_empty() {
            tracing::warn!(pattern = %pattern, "No documents matched");
        } else {
            tracing::debug!(pattern = %pattern, count = pages.len(), "Resolved documents");
        }

        Ok(Self { pages, cursor: 0 })
    }

    /// Create a walker over an explicit list of files, in the given order.
    #[must_use]
    pub fn from_paths(pages: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// All resolved page paths.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.pages
    }

    /// Number of resolved pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages not walked yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pages.len() - self.cursor
    }
}

fn read_page(path: &Path) -> Result<Page> {
    let html = fs::read_to_string(path).map_err(|source| CrawlerError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Page::parse(path, &html))
}

impl PageWalker for FilePageWalker {
    fn next_page(&mut self) -> Result<Option<Page>> {
        let Some(path) = self.pages.get(self.cursor) else {
            return Ok(None);
        };
        let page = read_page(path)?;
        self.cursor += 1;
        Ok(Some(page))
    }
}

impl Iterator for FilePageWalker {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_page().transpose()
    }
}

/// Page walker over HTML held in memory.
pub struct MemoryPageWalker {
    pages: std::vec::IntoIter<(PathBuf, String)>,
}

impl MemoryPageWalker {
    /// Create a walker over `(name, html)` pairs.
    pub fn new(
        pages: impl IntoIterator<Item = (impl Into<PathBuf>, impl Into<String>)>,
    ) -> Self {
        let pages: Vec<_> = pages
            .into_iter()
            .map(|(name, html)| (name.into(), html.into()))
            .collect();
        Self {
            pages: pages.into_iter(),
        }
    }
}

impl PageWalker for MemoryPageWalker {
    fn next_page(&mut self) -> Result<Option<Page>> {
        Ok(self.pages.next().map(|(name, html)| Page::parse(name, &html)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::find_by_id;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_resolve_pattern_directory() {
        assert_eq!(resolve_pattern("saved/"), "saved/*.html");
        assert_eq!(resolve_pattern("tour [2022]"), "tour [[]2022[]]/*.html");
    }

    #[test]
    fn test_resolve_pattern_empty() {
        assert_eq!(resolve_pattern(""), "");
    }

    #[test]
    fn test_file_walker_directory() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b.html", r#"<div id="page-b"></div>"#);
        write(dir.path(), "a.html", r#"<div id="page-a"></div>"#);
        write(dir.path(), "notes.txt", "not a page");
        fs::create_dir(dir.path().join("nested")).unwrap();
        write(&dir.path().join("nested"), "c.html", "<p></p>");

        let mut walker = FilePageWalker::new(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(walker.len(), 2);

        let first = walker.next_page().unwrap().unwrap();
        assert!(first.source.ends_with("a.html"));
        assert!(find_by_id(first.document.root_element(), "page-a").is_some());
        assert_eq!(walker.remaining(), 1);

        let second = walker.next_page().unwrap().unwrap();
        assert!(second.source.ends_with("b.html"));

        assert!(walker.next_page().unwrap().is_none());
        assert!(walker.next_page().unwrap().is_none());
    }

    #[test]
    fn test_file_walker_single_file() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "only.html", "<p>x</p>");
        write(dir.path(), "other.html", "<p>y</p>");

        let walker = FilePageWalker::new(path.to_str().unwrap()).unwrap();
        assert_eq!(walker.paths(), [path]);
    }

    #[test]
    fn test_file_walker_no_matches() {
        let dir = tempdir().unwrap();
        let walker = FilePageWalker::new(dir.path().to_str().unwrap()).unwrap();
        assert!(walker.is_empty());
    }

    #[test]
    fn test_file_walker_invalid_pattern() {
        assert!(matches!(
            FilePageWalker::new("pages/***.html"),
            Err(CrawlerError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_file_walker_unreadable_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.html");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let mut walker = FilePageWalker::from_paths([&path]);
        let err = walker.next_page().err().unwrap();
        assert!(matches!(err, CrawlerError::DocumentRead { .. }));
        assert_eq!(walker.remaining(), 1);
    }

    #[test]
    fn test_file_walker_iterator() {
        let dir = tempdir().unwrap();
        write(dir.path(), "1.html", "<p></p>");
        write(dir.path(), "2.html", "<p></p>");

        let walker = FilePageWalker::new(dir.path().to_str().unwrap()).unwrap();
        let pages: Vec<_> = walker.collect::<Result<_>>().unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_memory_walker() {
        let mut walker = MemoryPageWalker::new([("one", "<p id=\"x\"></p>")]);
        let page = walker.next_page().unwrap().unwrap();
        assert_eq!(page.source, PathBuf::from("one"));
        assert!(find_by_id(page.document.root_element(), "x").is_some());
        assert!(walker.next_page().unwrap().is_none());
    }
}
