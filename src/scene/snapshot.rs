//! Render-ready view of a scene.

use crate::color::Color;
use crate::harmony::SuggestionSet;
use serde::Serialize;

use super::lighting::{Lighting, LightingMode};
use super::state::SceneState;

/// One equal-width band of the wall gradient, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: Color,
    pub start: f64,
    pub end: f64,
}

/// Lighting values a renderer needs without doing color math.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingSummary {
    pub on: bool,
    pub temperature: u8,
    pub brightness: u8,
    pub mode: LightingMode,
    pub warm_alpha: f64,
    pub cold_alpha: f64,
    pub brightness_factor: f64,
}

impl From<&Lighting> for LightingSummary {
    fn from(lighting: &Lighting) -> Self {
        let (warm_alpha, cold_alpha) = lighting.overlay_alphas();
        Self {
            on: lighting.on,
            temperature: lighting.temperature,
            brightness: lighting.brightness,
            mode: lighting.mode(),
            warm_alpha,
            cold_alpha,
            brightness_factor: lighting.brightness_factor(),
        }
    }
}

/// Fully resolved scene, produced after every operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub section_count: usize,
    pub active_section: usize,
    pub walls: Vec<Color>,
    pub furniture: Color,
    pub lit_walls: Vec<Color>,
    pub lit_furniture: Color,
    pub gradient: Vec<GradientStop>,
    pub lighting: LightingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<SuggestionSet>,
}

impl SceneSnapshot {
    pub fn capture(scene: &SceneState) -> Self {
        let walls = scene.walls().to_vec();
        let lighting = &scene.lighting;
        Self {
            section_count: scene.section_count(),
            active_section: scene.active_section(),
            lit_walls: walls.iter().map(|c| lighting.tint(*c)).collect(),
            lit_furniture: lighting.tint(scene.furniture()),
            gradient: gradient_stops(&walls),
            walls,
            furniture: scene.furniture(),
            lighting: LightingSummary::from(lighting),
            suggestions: scene.suggestions().cloned(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hard-edged bands of equal width across the wall.
pub(crate) fn gradient_stops(walls: &[Color]) -> Vec<GradientStop> {
    let step = 100.0 / walls.len().max(1) as f64;
    walls
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            color: *color,
            start: round2(i as f64 * step),
            end: round2((i + 1) as f64 * step),
        })
        .collect()
}
