//! Catalog-aware harmony: rank real catalog entries against a base color.

use crate::catalog::CatalogEntry;
use crate::color::{Color, Hsl};
use crate::config::angle::circular_distance;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::generator::{SuggestionSet, CONTRAST_OFFSETS};

/// Which relation to the base color an entry is scored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Similar,
    Contrast,
}

impl SuggestionKind {
    /// Weights of the saturation and lightness differences.
    fn weights(self) -> (f64, f64) {
        match self {
            SuggestionKind::Similar => (0.6, 0.6),
            SuggestionKind::Contrast => (0.2, 0.2),
        }
    }

    /// Hue the entries are measured against.
    ///
    /// Contrast cycles through the complement and split-complements by
    /// `round`, so repeated requests vary without randomness.
    fn target_hue(self, base: Hsl, round: usize) -> f64 {
        match self {
            SuggestionKind::Similar => base.h,
            SuggestionKind::Contrast => {
                base.h + CONTRAST_OFFSETS[round % CONTRAST_OFFSETS.len()]
            }
        }
    }
}

fn score(entry: Hsl, base: Hsl, target_hue: f64, kind: SuggestionKind) -> f64 {
    let (ws, wl) = kind.weights();
    circular_distance(entry.h, target_hue)
        + ws * (entry.s - base.s).abs()
        + wl * (entry.l - base.l).abs()
}

/// Rank catalog entries for `base`; lower score first, catalog order on ties.
///
/// The base color and repeated hex values are left out. At most `limit`
/// entries are returned; an empty catalog yields an empty list.
pub fn rank_catalog_matches(
    base: Color,
    entries: &[CatalogEntry],
    kind: SuggestionKind,
    round: usize,
    limit: usize,
) -> Vec<CatalogEntry> {
    let base_hsl = Hsl::from(base);
    let target = kind.target_hue(base_hsl, round);

    let mut scored: Vec<(f64, &CatalogEntry)> = entries
        .iter()
        .map(|entry| (score(Hsl::from(entry.hex), base_hsl, target, kind), entry))
        .collect();
    // Stable sort keeps catalog order for equal scores
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut seen = HashSet::from([base]);
    scored
        .into_iter()
        .filter(|(_, entry)| seen.insert(entry.hex))
        .take(limit)
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Similar and contrast suggestions drawn from catalog entries.
pub fn generate_catalog_harmony(
    base: Color,
    entries: &[CatalogEntry],
    round: usize,
    limit: usize,
) -> SuggestionSet {
    let pick = |kind| {
        rank_catalog_matches(base, entries, kind, round, limit)
            .into_iter()
            .map(|entry| entry.hex)
            .collect()
    };
    SuggestionSet {
        similar: pick(SuggestionKind::Similar),
        contrast: pick(SuggestionKind::Contrast),
        monochrome: None,
    }
}
