//! Ruleset configuration for each tour.

use super::classifiers::{CuratorClassifier, KamikazeClassifier, SweaterClassifier};
use super::types::{SweaterRule, TourRuleset};
use crate::config::CrawlerConfig;
use crate::error::Result;
use crate::types::{Column, TourVariant};

/// Columns exported for the 2022 tour.
pub const TOUR_2022_COLUMNS: [Column; 6] = [
    Column::AppId,
    Column::Player,
    Column::Kamikaze,
    Column::Curator,
    Column::Link,
    Column::Comment,
];

/// Columns exported for the 2023 tour.
pub const TOUR_2023_COLUMNS: [Column; 7] = [
    Column::AppId,
    Column::Player,
    Column::Kamikaze,
    Column::Curator,
    Column::Sweater,
    Column::Link,
    Column::Comment,
];

/// Create the 2023 sweater rules, highest priority first.
pub fn create_sweater_rules() -> Result<Vec<SweaterRule>> {
    Ok(vec![
        SweaterRule::new("Плюшевый пингвин", ["пингвин", "penguin"])?,
        SweaterRule::new("Бутерброд с колбасой", ["бутерброд", "колбас"])?,
        SweaterRule::new("Радуга с блёстками", ["радуг", "бл[её]ст"])?,
    ])
}

/// Create the ruleset for a tour.
///
/// Curators are copied out of the config, so later changes to the caller's
/// list never reach a running crawl.
pub fn create_tour_ruleset(variant: TourVariant, config: &CrawlerConfig) -> Result<TourRuleset> {
    let ruleset = match variant {
        TourVariant::Tour2022 => {
            let mut ruleset = TourRuleset::new(variant, TOUR_2022_COLUMNS);
            ruleset.register(KamikazeClassifier);
            ruleset.register(CuratorClassifier::new(config.curators()));
            ruleset
        }
        TourVariant::Tour2023 => {
            let mut ruleset = TourRuleset::new(variant, TOUR_2023_COLUMNS);
            ruleset.register(KamikazeClassifier);
            ruleset.register(CuratorClassifier::new(config.curators()));
            ruleset.register(SweaterClassifier::new(create_sweater_rules()?));
            ruleset
        }
    };

    tracing::debug!(
        tour = %variant,
        classifiers = ?ruleset.classifier_names(),
        "Created tour ruleset"
    );
    Ok(ruleset)
}
