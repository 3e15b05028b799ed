//! Entry extraction from a parsed tour page.
//!
//! A page lists entries as direct children of the `#entries` container.
//! Every entry carries its application id in its own `id` attribute, the
//! player's login in the `title` of an `a-login-black` link, and the free
//! text the player wrote in a `description` block.

use scraper::{ElementRef, Html};

use crate::config::{DESCRIPTION_CLASS, ENTRIES_CONTAINER_ID, ENTRY_ID_PREFIX, LOGIN_CLASS};
use crate::error::{CrawlerError, Result};
use crate::html::{describe, element_children, find_by_id, find_first_by_class, get_attribute, text_content};

/// Fields read straight from an entry element, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub app_id: String,
    pub player_name: String,
    /// Lowercased description text.
    pub description: String,
}

/// Find the entries container of a page.
///
/// # Errors
/// Returns `MissingElement` if the page has no `#entries` element.
pub fn find_entries_container<'a>(document: &'a Html, context: &str) -> Result<ElementRef<'a>> {
    find_by_id(document.root_element(), ENTRIES_CONTAINER_ID).ok_or_else(|| {
        CrawlerError::MissingElement {
            element: format!("#{ENTRIES_CONTAINER_ID}"),
            context: context.to_string(),
        }
    })
}

/// Strip the fixed id prefix from an entry element id.
///
/// The prefix is removed by length: an id with a different prefix yields a
/// malformed application id rather than an error.
///
/// # Examples
/// ```
/// use bookquest_crawler::entry::strip_entry_prefix;
///
/// assert_eq!(strip_entry_prefix("bookrequest1042"), "1042");
/// ```
pub fn strip_entry_prefix(element_id: &str) -> String {
    if !element_id.starts_with(ENTRY_ID_PREFIX) {
        tracing::warn!(id = %element_id, prefix = ENTRY_ID_PREFIX, "Entry id has unexpected prefix");
    }
    element_id.chars().skip(ENTRY_ID_PREFIX.chars().count()).collect()
}

/// Read the raw fields of a single entry element.
///
/// # Errors
/// Returns `MissingAttribute` or `MissingElement` when the entry lacks its
/// id, login link or description.
pub fn read_entry(entry: ElementRef<'_>) -> Result<RawEntry> {
    let element_id = get_attribute(entry, "id").ok_or_else(|| CrawlerError::MissingAttribute {
        attribute: "id".to_string(),
        element: describe(entry),
    })?;
    let app_id = strip_entry_prefix(element_id);

    let login = find_first_by_class(entry, LOGIN_CLASS).ok_or_else(|| {
        CrawlerError::MissingElement {
            element: format!(".{LOGIN_CLASS}"),
            context: describe(entry),
        }
    })?;
    let player_name = get_attribute(login, "title")
        .ok_or_else(|| CrawlerError::MissingAttribute {
            attribute: "title".to_string(),
            element: format!(".{LOGIN_CLASS} in {}", describe(entry)),
        })?
        .to_string();

    let description = find_first_by_class(entry, DESCRIPTION_CLASS)
        .map(|d| text_content(d).to_lowercase())
        .ok_or_else(|| CrawlerError::MissingElement {
            element: format!(".{DESCRIPTION_CLASS}"),
            context: describe(entry),
        })?;

    Ok(RawEntry {
        app_id,
        player_name,
        description,
    })
}

/// Read every entry on a page, in document order.
///
/// Stops at the first malformed entry.
pub fn extract_entries(document: &Html, context: &str) -> Result<Vec<RawEntry>> {
    let container = find_entries_container(document, context)?;
    element_children(container).map(read_entry).collect()
}
