//! Curator attribution.

use crate::rules::classifier::EntryClassifier;
use crate::types::EntryRecord;

/// Attributes an entry to the first configured curator named in its description.
///
/// Curators are tried in configured order, not in the order they appear in
/// the text. Each further curator found adds a warning to the comment and
/// leaves the attribution unchanged.
pub struct CuratorClassifier {
    curators: Vec<String>,
}

impl CuratorClassifier {
    /// Create a classifier over curator names, in priority order.
    ///
    /// Names are case-folded; empty names are dropped since they would
    /// match every description.
    pub fn new(curators: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let curators = curators
            .into_iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        Self { curators }
    }

    /// Case-folded curator names, in priority order.
    #[must_use]
    pub fn curators(&self) -> &[String] {
        &self.curators
    }
}

/// Comment line added for each curator after the first one found.
pub fn extra_curator_warning(curator: &str) -> String {
    format!("Warning: more than one curator is mentioned: \"{curator}\"")
}

impl EntryClassifier for CuratorClassifier {
    fn name(&self) -> &'static str {
        "curator"
    }

    fn classify(&self, description: &str, record: &mut EntryRecord) {
        for curator in self.curators.iter().filter(|c| description.contains(c.as_str())) {
            if record.curator.is_none() {
                record.curator = Some(curator.clone());
            } else {
                tracing::debug!(app_id = %record.app_id, curator = %curator, "Extra curator mentioned");
                record.add_comment(extra_curator_warning(curator));
            }
        }
    }
}
