//! Types for the tour rule system.

use regex::{Regex, RegexBuilder};

use super::classifier::EntryClassifier;
use crate::config::hyperlink_formula;
use crate::entry::RawEntry;
use crate::error::Result;
use crate::types::{Column, EntryRecord, Table, TourVariant};

/// A sweater category and the keyword patterns that select it.
#[derive(Debug, Clone)]
pub struct SweaterRule {
    /// Category name written to the sweater column.
    pub category: String,

    /// Alternatives combined into one case-insensitive pattern.
    pattern: Regex,
}

impl SweaterRule {
    /// Create a rule matching any of the given regex alternatives.
    ///
    /// # Errors
    /// Returns `InvalidSweaterPattern` if an alternative is not a valid regex.
    pub fn new(
        category: impl Into<String>,
        alternatives: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self> {
        let combined = alternatives
            .into_iter()
            .map(|a| format!("(?:{})", a.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&combined).case_insensitive(true).build()?;

        Ok(Self {
            category: category.into(),
            pattern,
        })
    }

    /// Check whether a description asks for this sweater.
    #[must_use]
    pub fn is_match(&self, description: &str) -> bool {
        self.pattern.is_match(description)
    }

    /// The combined pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Everything that differs between tours: exported columns and the
/// classifiers applied to each entry, both in order.
pub struct TourRuleset {
    variant: TourVariant,
    columns: Vec<Column>,
    classifiers: Vec<Box<dyn EntryClassifier>>,
}

impl TourRuleset {
    /// Create a ruleset with columns and no classifiers.
    #[must_use]
    pub fn new(variant: TourVariant, columns: impl Into<Vec<Column>>) -> Self {
        Self {
            variant,
            columns: columns.into(),
            classifiers: Vec::new(),
        }
    }

    /// Append a classifier; classifiers run in registration order.
    pub fn register(&mut self, classifier: impl EntryClassifier + 'static) {
        self.classifiers.push(Box::new(classifier));
    }

    #[must_use]
    pub fn variant(&self) -> TourVariant {
        self.variant
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Names of the registered classifiers, in order.
    #[must_use]
    pub fn classifier_names(&self) -> Vec<&'static str> {
        self.classifiers.iter().map(|c| c.name()).collect()
    }

    /// Create an empty table with this tour's columns, titled after the tour.
    #[must_use]
    pub fn new_table(&self) -> Table {
        Table::new(self.columns.clone()).with_title(self.variant.as_str())
    }

    /// Turn a raw entry into a fully classified record.
    #[must_use]
    pub fn build_record(&self, raw: RawEntry) -> EntryRecord {
        let RawEntry {
            app_id,
            player_name,
            description,
        } = raw;

        let mut record = EntryRecord::new(app_id, player_name);
        for classifier in &self.classifiers {
            classifier.classify(&description, &mut record);
        }
        record.link = hyperlink_formula(&record.app_id);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classifiers::KamikazeClassifier;

    #[test]
    fn test_sweater_rule_alternatives() {
        let rule = SweaterRule::new("Радуга", ["радуг", "бл[её]ст"]).unwrap();
        assert_eq!(rule.pattern(), "(?:радуг)|(?:бл[её]ст)");
        assert!(rule.is_match("радуга"));
        assert!(rule.is_match("блестки"));
        assert!(rule.is_match("БЛЁСТКИ"));
        assert!(!rule.is_match("пингвин"));
    }

    #[test]
    fn test_sweater_rule_invalid_pattern() {
        assert!(SweaterRule::new("broken", ["("]).is_err());
    }

    #[test]
    fn test_build_record() {
        let mut ruleset = TourRuleset::new(TourVariant::Tour2022, [Column::AppId]);
        ruleset.register(KamikazeClassifier);

        let record = ruleset.build_record(RawEntry {
            app_id: "1042".to_string(),
            player_name: "reader".to_string(),
            description: "я камикадзе".to_string(),
        });

        assert_eq!(record.app_id, "1042");
        assert!(record.is_kamikaze);
        assert!(record.link.contains("bookquest/entry/1042"));
        assert_eq!(ruleset.classifier_names(), vec!["kamikaze"]);
    }

    #[test]
    fn test_new_table_uses_columns() {
        let ruleset = TourRuleset::new(TourVariant::Tour2023, [Column::AppId, Column::Sweater]);
        let table = ruleset.new_table();
        assert_eq!(table.columns(), [Column::AppId, Column::Sweater]);
        assert_eq!(table.title(), "2023");
    }
}
