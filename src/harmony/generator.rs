//! Synthetic harmony: hue-shifted variants of a base color.

use crate::color::{hsl_to_hex, Color, Hsl};
use crate::config::{MONOCHROME_MAX_LIGHTNESS, MONOCHROME_MIN_LIGHTNESS};
use serde::{Deserialize, Serialize};

/// Hue offsets of the similar set, most negative first.
pub const SIMILAR_OFFSETS: [f64; 4] = [-20.0, -10.0, 10.0, 20.0];

/// Hue offsets of the contrast set: complement, then split-complements.
pub const CONTRAST_OFFSETS: [f64; 3] = [180.0, 150.0, 210.0];

/// Suggestions derived from one base color. Replaced wholesale on each request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    pub similar: Vec<Color>,
    pub contrast: Vec<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monochrome: Option<Vec<Color>>,
}

impl SuggestionSet {
    pub fn is_empty(&self) -> bool {
        self.similar.is_empty()
            && self.contrast.is_empty()
            && self.monochrome.as_ref().map_or(true, Vec::is_empty)
    }
}

/// Generate similar, contrast and monochrome suggestions for `base`.
pub fn generate_harmony(base: Color) -> SuggestionSet {
    let hsl = Hsl::from(base);
    SuggestionSet {
        similar: similar(hsl),
        contrast: contrast(hsl),
        monochrome: Some(monochrome(hsl)),
    }
}

fn similar(base: Hsl) -> Vec<Color> {
    let Hsl { h, s, l } = base;
    let [far_left, left, right, far_right] = SIMILAR_OFFSETS;
    vec![
        // Ends are nudged so they don't collapse onto the inner pair
        hsl_to_hex(h + far_left, (s + 5.0).min(100.0), (l + 4.0).min(90.0)),
        hsl_to_hex(h + left, s, l),
        hsl_to_hex(h + right, s, l),
        hsl_to_hex(h + far_right, (s - 5.0).max(0.0), (l - 4.0).max(10.0)),
    ]
}

fn contrast(base: Hsl) -> Vec<Color> {
    let Hsl { h, s, l } = base;
    let [complement, split_low, split_high] = CONTRAST_OFFSETS;
    vec![
        hsl_to_hex(h + complement, s, l),
        hsl_to_hex(h + split_low, (s + 10.0).min(100.0), l),
        hsl_to_hex(h + split_high, (s - 10.0).max(0.0), l),
    ]
}

/// Same hue and saturation at four lightness steps, lightest first.
pub fn monochrome(base: Hsl) -> Vec<Color> {
    [20.0, 10.0, -10.0, -20.0]
        .iter()
        .map(|step| {
            let l = (base.l + step).clamp(MONOCHROME_MIN_LIGHTNESS, MONOCHROME_MAX_LIGHTNESS);
            hsl_to_hex(base.h, base.s, l)
        })
        .collect()
}
