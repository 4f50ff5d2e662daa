//! Harmony generation: similar, contrast and monochrome suggestions.

mod generator;
mod ranking;

pub use generator::{generate_harmony, monochrome, SuggestionSet, CONTRAST_OFFSETS, SIMILAR_OFFSETS};
pub use ranking::{generate_catalog_harmony, rank_catalog_matches, SuggestionKind};
