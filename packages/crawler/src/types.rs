//! Core data types for the crawler.
//!
//! These types represent bookquest entries and the table they are
//! collected into.

use std::fmt;
use std::str::FromStr;

use crate::error::CrawlerError;

/// Which yearly tour ruleset applies to a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourVariant {
    /// Base ruleset: kamikaze flag and curator attribution.
    #[default]
    Tour2022,

    /// Extended ruleset: adds sweater classification.
    Tour2023,
}

impl TourVariant {
    /// Get the selector string of this tour.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tour2022 => "2022",
            Self::Tour2023 => "2023",
        }
    }
}

impl fmt::Display for TourVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TourVariant {
    type Err = CrawlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2022" => Ok(Self::Tour2022),
            "2023" => Ok(Self::Tour2023),
            other => Err(CrawlerError::UnknownTour(other.to_string())),
        }
    }
}

/// A single contest entry found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryRecord {
    /// Application id (entry element id without its prefix).
    pub app_id: String,

    /// Login of the player who submitted the entry.
    pub player_name: String,

    /// Whether the player declared kamikaze participation.
    pub is_kamikaze: bool,

    /// Case-folded name of the attributed curator.
    pub curator: Option<String>,

    /// Sweater category; `"?"` when ambiguous, empty when unrecognized.
    pub sweater: String,

    /// Newline-separated diagnostics.
    pub comment: String,

    /// Hyperlink formula pointing to the entry page.
    pub link: String,
}

impl EntryRecord {
    /// Create a record with no classification applied yet.
    #[must_use]
    pub fn new(app_id: impl Into<String>, player_name: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Append a diagnostic line to the comment.
    pub fn add_comment(&mut self, line: impl AsRef<str>) {
        if !self.comment.is_empty() {
            self.comment.push('\n');
        }
        self.comment.push_str(line.as_ref());
    }
}

/// Exported table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    AppId,
    Player,
    Kamikaze,
    Curator,
    Sweater,
    Link,
    Comment,
}

/// Rendered value of a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<'a> {
    /// Plain text.
    Text(&'a str),
    /// Spreadsheet formula, including the leading `=`.
    Formula(&'a str),
}

impl Column {
    /// Header label of the column.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AppId => "Заявка",
            Self::Player => "Игрок",
            Self::Kamikaze => "Камикадзе",
            Self::Curator => "Куратор",
            Self::Sweater => "Свитер",
            Self::Link => "Ссылка",
            Self::Comment => "Комментарий",
        }
    }

    /// Render the column's value for a record.
    #[must_use]
    pub fn cell<'a>(&self, record: &'a EntryRecord) -> Cell<'a> {
        match self {
            Self::AppId => Cell::Text(&record.app_id),
            Self::Player => Cell::Text(&record.player_name),
            Self::Kamikaze => Cell::Text(if record.is_kamikaze { "Да" } else { "Нет" }),
            Self::Curator => Cell::Text(record.curator.as_deref().unwrap_or_default()),
            Self::Sweater => Cell::Text(&record.sweater),
            Self::Link => Cell::Formula(&record.link),
            Self::Comment => Cell::Text(&record.comment),
        }
    }
}

/// Entries collected during a crawl, with a fixed column layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<EntryRecord>,
}

impl Table {
    /// Create an empty table with the given columns.
    #[must_use]
    pub fn new(columns: impl Into<Vec<Column>>) -> Self {
        Self {
            title: String::new(),
            columns: columns.into(),
            rows: Vec::new(),
        }
    }

    /// Set the title used as the exported worksheet name.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a row.
    pub fn push(&mut self, record: EntryRecord) {
        self.rows.push(record);
    }

    /// Sort rows by application id. The sort is stable.
    pub fn sort_by_app_id(&mut self) {
        self.rows.sort_by(|a, b| a.app_id.cmp(&b.app_id));
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[EntryRecord] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header labels in column order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_variant_from_str() {
        assert_eq!("2022".parse::<TourVariant>().unwrap(), TourVariant::Tour2022);
        assert_eq!("2023".parse::<TourVariant>().unwrap(), TourVariant::Tour2023);
        assert!(matches!(
            "2024".parse::<TourVariant>(),
            Err(CrawlerError::UnknownTour(t)) if t == "2024"
        ));
    }

    #[test]
    fn test_tour_variant_default_and_display() {
        assert_eq!(TourVariant::default(), TourVariant::Tour2022);
        assert_eq!(TourVariant::Tour2023.to_string(), "2023");
    }

    #[test]
    fn test_add_comment_joins_lines() {
        let mut record = EntryRecord::new("1", "reader");
        record.add_comment("first");
        record.add_comment("second");
        assert_eq!(record.comment, "first\nsecond");
    }

    #[test]
    fn test_column_cells() {
        let mut record = EntryRecord::new("1042", "reader");
        record.is_kamikaze = true;
        record.link = "=HYPERLINK(\"x\", \"y\")".to_string();

        assert_eq!(Column::AppId.cell(&record), Cell::Text("1042"));
        assert_eq!(Column::Kamikaze.cell(&record), Cell::Text("Да"));
        assert_eq!(Column::Curator.cell(&record), Cell::Text(""));
        assert_eq!(Column::Link.cell(&record), Cell::Formula("=HYPERLINK(\"x\", \"y\")"));
    }

    #[test]
    fn test_sort_by_app_id_is_stable() {
        let mut table = Table::new([Column::AppId, Column::Player]);
        table.push(EntryRecord::new("2", "b"));
        table.push(EntryRecord::new("1", "first"));
        table.push(EntryRecord::new("1", "second"));
        table.sort_by_app_id();

        let players: Vec<_> = table.rows().iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(players, vec!["first", "second", "b"]);
    }

    #[test]
    fn test_labels() {
        let table = Table::new([Column::AppId, Column::Link]);
        assert_eq!(table.labels(), vec!["Заявка", "Ссылка"]);
        assert!(table.is_empty());
    }
}
