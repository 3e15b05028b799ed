//! Entry classifier trait definition.

use crate::types::EntryRecord;

/// Trait for entry classifiers.
///
/// A classifier reads the lowercased description of an entry and fills in
/// one or more fields of its record, appending diagnostics to the comment
/// when the description is ambiguous. Classifiers run once per record,
/// right after the record is created.
pub trait EntryClassifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Annotate the record from the entry description.
    fn classify(&self, description: &str, record: &mut EntryRecord);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestClassifier;

    impl EntryClassifier for TestClassifier {
        fn name(&self) -> &'static str {
            "test"
        }

        fn classify(&self, description: &str, record: &mut EntryRecord) {
            record.add_comment(description);
        }
    }

    #[test]
    fn test_classifier_trait() {
        let classifier = TestClassifier;
        assert_eq!(classifier.name(), "test");

        let mut record = EntryRecord::new("1", "reader");
        classifier.classify("seen", &mut record);
        assert_eq!(record.comment, "seen");
    }
}
