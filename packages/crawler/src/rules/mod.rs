//! Tour rule system for classifying entries.
//!
//! Each tour is described by a [`TourRuleset`]: the ordered columns it
//! exports and the ordered classifiers applied to every entry. Classifiers
//! implement [`EntryClassifier`], so a new tour is a new ruleset rather than
//! a new crawler.

mod classifier;
pub mod classifiers;
mod config;
mod types;

pub use classifier::EntryClassifier;
pub use config::{create_sweater_rules, create_tour_ruleset, TOUR_2022_COLUMNS, TOUR_2023_COLUMNS};
pub use types::{SweaterRule, TourRuleset};
