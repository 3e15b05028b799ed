//! Entry classifier implementations.

mod curator;
mod kamikaze;
mod sweater;

pub use curator::{extra_curator_warning, CuratorClassifier};
pub use kamikaze::KamikazeClassifier;
pub use sweater::{
    SweaterClassifier, AMBIGUOUS_SWEATER, MULTIPLE_SWEATERS_COMMENT, NO_SWEATER_COMMENT,
};
