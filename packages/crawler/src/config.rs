//! Configuration constants and validation functions for the crawler.

use std::path::Path;

use crate::error::{CrawlerError, Result};

/// Base URL of a single bookquest entry page.
pub const BOOKREQUEST_URL: &str = "https://www.livelib.ru/game/bookquest/entry/";

/// Prefix of the entry element id; the rest of the id is the application id.
pub const ENTRY_ID_PREFIX: &str = "bookrequest";

/// Id of the element holding all entries of a page.
pub const ENTRIES_CONTAINER_ID: &str = "entries";

/// Class of the link carrying the player's login in its `title`.
pub const LOGIN_CLASS: &str = "a-login-black";

/// Class of the entry description block.
pub const DESCRIPTION_CLASS: &str = "description";

/// Keyword a player writes to declare kamikaze participation.
pub const KAMIKAZE_KEYWORD: &str = "камикадзе";

/// Display text of the exported entry hyperlink.
pub const HYPERLINK_TEXT: &str = "заявка";

/// Extension of saved pages picked up from a directory.
pub const DOCUMENT_EXTENSION: &str = "html";

/// Environment variable holding a comma-separated curator list.
pub const CURATORS_ENV_VAR: &str = "BOOKQUEST_CURATORS";

/// Curators used when none are supplied.
pub const DEFAULT_CURATORS: [&str; 10] = [
    "Meredith",
    "T_Solovey",
    "Wender",
    "Aleni11",
    "deranged",
    "Mar_sianka",
    "num",
    "devga",
    "3oate",
    "Sotofa",
];

/// Check whether a location is a glob pattern rather than a plain path.
///
/// Only `*` marks a pattern. Other glob metacharacters in a location are
/// taken literally, so `tour[1]` names a directory.
///
/// # Examples
/// ```
/// use bookquest_crawler::config::is_pattern;
///
/// assert!(is_pattern("pages/*.html"));
/// assert!(!is_pattern("pages"));
/// assert!(!is_pattern("tour[1]"));
/// ```
pub fn is_pattern(location: &str) -> bool {
    location.contains('*')
}

/// Validate an input location before crawling.
///
/// Network addresses are rejected outright. Plain paths must exist;
/// glob patterns are accepted as-is and may match nothing.
///
/// # Errors
/// * `CrawlerError::UnsupportedUrl` for `http://` and `https://` locations
/// * `CrawlerError::LocationNotFound` for missing plain paths
pub fn validate_location(location: &str) -> Result<()> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Err(CrawlerError::UnsupportedUrl(location.to_string()));
    }

    if is_pattern(location) || Path::new(location).exists() {
        Ok(())
    } else {
        Err(CrawlerError::LocationNotFound(location.to_string()))
    }
}

/// Build the public URL of an entry.
pub fn entry_url(app_id: &str) -> String {
    format!("{BOOKREQUEST_URL}{app_id}")
}

/// Build the spreadsheet hyperlink formula pointing to an entry.
///
/// # Examples
/// ```
/// use bookquest_crawler::config::hyperlink_formula;
///
/// assert_eq!(
///     hyperlink_formula("1042"),
///     r#"=HYPERLINK("https://www.livelib.ru/game/bookquest/entry/1042", "заявка")"#
/// );
/// ```
pub fn hyperlink_formula(app_id: &str) -> String {
    format!(
        "=HYPERLINK(\"{}\", \"{HYPERLINK_TEXT}\")",
        entry_url(app_id).replace('"', "\"\"")
    )
}

/// Settings copied into a crawler at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    curators: Vec<String>,
    ignore_duplicates: bool,
    verbose: bool,
}

impl CrawlerConfig {
    /// Create a config with the given curators, in priority order.
    pub fn new(curators: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            curators: curators.into_iter().map(Into::into).collect(),
            ignore_duplicates: true,
            verbose: false,
        }
    }

    /// Log every processed page at `info` level.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the duplicate handling flag.
    ///
    /// No extraction step consults it: duplicate application ids are always
    /// kept in the table.
    #[must_use]
    pub fn with_ignore_duplicates(mut self, ignore_duplicates: bool) -> Self {
        self.ignore_duplicates = ignore_duplicates;
        self
    }

    /// Curators as supplied, in priority order.
    #[must_use]
    pub fn curators(&self) -> &[String] {
        &self.curators
    }

    #[must_use]
    pub fn ignore_duplicates(&self) -> bool {
        self.ignore_duplicates
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CURATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_prefix_length() {
        assert_eq!(ENTRY_ID_PREFIX.chars().count(), 11);
    }

    #[test]
    fn test_validate_location_rejects_urls() {
        assert!(matches!(
            validate_location("https://www.livelib.ru/game/bookquest"),
            Err(CrawlerError::UnsupportedUrl(_))
        ));
        assert!(matches!(
            validate_location("http://example.com/page.html"),
            Err(CrawlerError::UnsupportedUrl(_))
        ));
    }

    #[test]
    fn test_validate_location_missing_path() {
        assert!(matches!(
            validate_location("/definitely/not/here"),
            Err(CrawlerError::LocationNotFound(_))
        ));
    }

    #[test]
    fn test_validate_location_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_location(dir.path().to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_validate_location_missing_path_with_glob_chars() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["missing?dir", "tour[1]"] {
            let location = dir.path().join(name);
            assert!(matches!(
                validate_location(location.to_str().unwrap()),
                Err(CrawlerError::LocationNotFound(_))
            ));
        }
    }

    #[test]
    fn test_validate_location_existing_dir_with_glob_chars() {
        let dir = tempfile::tempdir().unwrap();
        let location = dir.path().join("tour[1]");
        std::fs::create_dir(&location).unwrap();
        assert!(validate_location(location.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_validate_location_pattern() {
        assert!(validate_location("/nowhere/*.html").is_ok());
    }

    #[test]
    fn test_entry_url() {
        assert_eq!(
            entry_url("1042"),
            "https://www.livelib.ru/game/bookquest/entry/1042"
        );
    }

    #[test]
    fn test_hyperlink_formula_escapes_quotes() {
        assert_eq!(
            hyperlink_formula("1\"2"),
            "=HYPERLINK(\"https://www.livelib.ru/game/bookquest/entry/1\"\"2\", \"заявка\")"
        );
    }

    #[test]
    fn test_default_config() {
        let config = CrawlerConfig::default();
        assert_eq!(config.curators().len(), 10);
        assert_eq!(config.curators()[0], "Meredith");
        assert!(config.ignore_duplicates());
        assert!(!config.verbose());
    }

    #[test]
    fn test_config_is_copied() {
        let mut names = vec!["Wender".to_string()];
        let config = CrawlerConfig::new(names.clone()).with_verbose(true);
        names.push("num".to_string());

        assert_eq!(config.curators(), ["Wender".to_string()]);
        assert!(config.verbose());
    }
}
