//! Sweater (costume) classification for the 2023 tour.

use crate::rules::classifier::EntryClassifier;
use crate::rules::types::SweaterRule;
use crate::types::EntryRecord;

/// Category value for entries matching more than one sweater.
pub const AMBIGUOUS_SWEATER: &str = "?";

/// Comment line for entries matching more than one sweater.
pub const MULTIPLE_SWEATERS_COMMENT: &str = "Error: multiple sweater entries";

/// Comment line for entries matching no sweater.
pub const NO_SWEATER_COMMENT: &str = "Warning: no sweater was recognized";

/// Classifies the sweater an entry asks for.
///
/// Rules are evaluated in priority order. The first match sets the category;
/// a second match marks the entry ambiguous and stops evaluation, so rules
/// after the conflicting one are never tested.
pub struct SweaterClassifier {
    rules: Vec<SweaterRule>,
}

impl SweaterClassifier {
    /// Create a classifier over rules in priority order.
    #[must_use]
    pub fn new(rules: Vec<SweaterRule>) -> Self {
        Self { rules }
    }
}

impl EntryClassifier for SweaterClassifier {
    fn name(&self) -> &'static str {
        "sweater"
    }

    fn classify(&self, description: &str, record: &mut EntryRecord) {
        let mut matched: Option<&str> = None;

        for rule in &self.rules {
            if !rule.is_match(description) {
                continue;
            }

            if let Some(first) = matched {
                tracing::debug!(
                    app_id = %record.app_id,
                    first = %first,
                    second = %rule.category,
                    "Multiple sweaters matched"
                );
                record.sweater = AMBIGUOUS_SWEATER.to_string();
                record.add_comment(MULTIPLE_SWEATERS_COMMENT);
                return;
            }

            matched = Some(&rule.category);
            record.sweater = rule.category.clone();
        }

        if matched.is_none() {
            record.add_comment(NO_SWEATER_COMMENT);
        }
    }
}
