//! Kamikaze participation flag.

use crate::config::KAMIKAZE_KEYWORD;
use crate::rules::classifier::EntryClassifier;
use crate::types::EntryRecord;

/// Flags entries whose description contains the kamikaze keyword.
pub struct KamikazeClassifier;

impl EntryClassifier for KamikazeClassifier {
    fn name(&self) -> &'static str {
        "kamikaze"
    }

    fn classify(&self, description: &str, record: &mut EntryRecord) {
        record.is_kamikaze = description.contains(KAMIKAZE_KEYWORD);
    }
}
