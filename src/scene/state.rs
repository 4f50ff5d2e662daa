//! The scene: wall sections, furniture, lighting and current suggestions.

use crate::color::Color;
use crate::config::{MAX_WALL_SECTIONS, MIN_WALL_SECTIONS};
use crate::harmony::{generate_harmony, SuggestionSet};
use crate::template::SectionAssignment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use super::lighting::Lighting;

/// What a color is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Wall,
    Furniture,
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wall" => Ok(Target::Wall),
            "furniture" => Ok(Target::Furniture),
            other => Err(format!("unknown target '{}'", other)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Wall => write!(f, "wall"),
            Target::Furniture => write!(f, "furniture"),
        }
    }
}

/// Colors of the simulated room.
///
/// Only validated [`Color`]s are stored, the section count stays within
/// 1..=4 and the active section always points at a visible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneState {
    section_count: usize,
    active_section: usize,
    wall_colors: [Color; MAX_WALL_SECTIONS],
    furniture_color: Color,
    pub lighting: Lighting,
    suggestions: Option<SuggestionSet>,
}

impl SceneState {
    /// A single-section scene with every slot at the default colors.
    pub fn new(default_wall: Color, default_furniture: Color) -> Self {
        Self {
            section_count: MIN_WALL_SECTIONS,
            active_section: 0,
            wall_colors: [default_wall; MAX_WALL_SECTIONS],
            furniture_color: default_furniture,
            lighting: Lighting::default(),
            suggestions: None,
        }
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn active_section(&self) -> usize {
        self.active_section
    }

    /// Colors of the visible sections.
    pub fn walls(&self) -> &[Color] {
        &self.wall_colors[..self.section_count]
    }

    /// All four slots, including hidden ones.
    pub fn wall_slots(&self) -> &[Color; MAX_WALL_SECTIONS] {
        &self.wall_colors
    }

    pub fn furniture(&self) -> Color {
        self.furniture_color
    }

    pub fn active_color(&self) -> Color {
        self.wall_colors[self.active_section]
    }

    pub fn suggestions(&self) -> Option<&SuggestionSet> {
        self.suggestions.as_ref()
    }

    fn clamp_section(&self, index: usize) -> usize {
        index.min(self.section_count - 1)
    }

    /// Apply a color to the furniture or a wall section.
    ///
    /// Wall colors go to `section` (default: the active section), clamped to
    /// the visible sections, and that section becomes active.
    pub fn apply_color(&mut self, target: Target, color: Color, section: Option<usize>) {
        match target {
            Target::Furniture => self.furniture_color = color,
            Target::Wall => {
                let index = self.clamp_section(section.unwrap_or(self.active_section));
                self.wall_colors[index] = color;
                self.active_section = index;
            }
        }
        info!("Applied {} to {} (section {})", color, target, self.active_section);
    }

    /// Set the number of visible sections, clamped to 1..=4.
    pub fn set_section_count(&mut self, count: i64) {
        let count = count.clamp(MIN_WALL_SECTIONS as i64, MAX_WALL_SECTIONS as i64) as usize;
        self.section_count = count;
        if self.active_section >= count {
            self.active_section = count - 1;
        }
    }

    /// Make a section active, clamped to the visible sections.
    pub fn select_section(&mut self, index: usize) {
        self.active_section = self.clamp_section(index);
    }

    /// Write a template assignment; the active section resets to 0.
    pub fn apply_assignment(&mut self, assignment: &SectionAssignment) {
        let walls = &assignment.walls[..assignment.walls.len().min(MAX_WALL_SECTIONS)];
        if walls.is_empty() {
            return;
        }
        self.wall_colors[..walls.len()].copy_from_slice(walls);
        self.section_count = walls.len();
        if let Some(furniture) = assignment.furniture {
            self.furniture_color = furniture;
        }
        self.active_section = 0;
    }

    /// Regenerate suggestions from the active wall color.
    pub fn generate_harmony(&mut self, include_monochrome: bool) -> &SuggestionSet {
        let mut set = generate_harmony(self.active_color());
        if !include_monochrome {
            set.monochrome = None;
        }
        self.suggestions.insert(set)
    }

    /// Replace the current suggestions.
    pub fn set_suggestions(&mut self, set: SuggestionSet) -> &SuggestionSet {
        self.suggestions.insert(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::normalize_hex;
    use pretty_assertions::assert_eq;

    fn color(hex: &str) -> Color {
        normalize_hex(hex).unwrap()
    }

    fn scene() -> SceneState {
        SceneState::new(color("#D9D9D9"), color("#8C8C8C"))
    }

    #[test]
    fn test_defaults() {
        let scene = scene();
        assert_eq!(scene.section_count(), 1);
        assert_eq!(scene.active_section(), 0);
        assert_eq!(scene.walls(), &[color("#D9D9D9")]);
        assert!(scene.wall_slots().iter().all(|c| *c == color("#D9D9D9")));
        assert_eq!(scene.furniture(), color("#8C8C8C"));
        assert!(scene.suggestions().is_none());
    }

    // ==================== section count tests ====================

    #[test]
    fn test_section_count_clamped() {
        let mut scene = scene();
        scene.set_section_count(0);
        assert_eq!(scene.section_count(), 1);
        scene.set_section_count(10);
        assert_eq!(scene.section_count(), 4);
        scene.set_section_count(-3);
        assert_eq!(scene.section_count(), 1);
    }

    #[test]
    fn test_shrink_clamps_active_section() {
        let mut scene = scene();
        scene.set_section_count(4);
        scene.select_section(3);
        assert_eq!(scene.active_section(), 3);
        scene.set_section_count(2);
        assert_eq!(scene.active_section(), 1);
    }

    #[test]
    fn test_hidden_colors_survive_shrink() {
        let mut scene = scene();
        scene.set_section_count(3);
        scene.apply_color(Target::Wall, color("#123456"), Some(2));
        scene.set_section_count(1);
        scene.set_section_count(3);
        assert_eq!(scene.walls()[2], color("#123456"));
    }

    // ==================== apply_color tests ====================

    #[test]
    fn test_apply_wall_color_sets_active() {
        let mut scene = scene();
        scene.set_section_count(3);
        scene.apply_color(Target::Wall, color("#355070"), Some(2));
        assert_eq!(scene.active_section(), 2);
        assert_eq!(scene.active_color(), color("#355070"));
    }

    #[test]
    fn test_apply_wall_color_clamps_section() {
        let mut scene = scene();
        scene.set_section_count(2);
        scene.apply_color(Target::Wall, color("#355070"), Some(9));
        assert_eq!(scene.active_section(), 1);
        assert_eq!(scene.walls()[1], color("#355070"));
    }

    #[test]
    fn test_apply_furniture_keeps_walls() {
        let mut scene = scene();
        scene.apply_color(Target::Furniture, color("#2D4A3E"), Some(3));
        assert_eq!(scene.furniture(), color("#2D4A3E"));
        assert_eq!(scene.walls(), &[color("#D9D9D9")]);
    }

    // ==================== assignment and harmony tests ====================

    #[test]
    fn test_apply_assignment_resets_active() {
        let mut scene = scene();
        scene.set_section_count(4);
        scene.select_section(3);
        scene.apply_assignment(&SectionAssignment {
            walls: vec![color("#111111"), color("#111111"), color("#222222")],
            furniture: Some(color("#333333")),
        });
        assert_eq!(scene.section_count(), 3);
        assert_eq!(scene.active_section(), 0);
        assert_eq!(scene.furniture(), color("#333333"));
    }

    #[test]
    fn test_generate_harmony_replaces_suggestions() {
        let mut scene = scene();
        scene.apply_color(Target::Wall, color("#FF0000"), None);
        let first = scene.generate_harmony(true).clone();
        assert!(first.monochrome.is_some());

        scene.apply_color(Target::Wall, color("#0000FF"), None);
        let second = scene.generate_harmony(false).clone();
        assert_ne!(first, second);
        assert_eq!(second.monochrome, None);
        assert_eq!(scene.suggestions(), Some(&second));
    }

    #[test]
    fn test_target_parse() {
        assert_eq!("Wall".parse::<Target>(), Ok(Target::Wall));
        assert_eq!("furniture".parse::<Target>(), Ok(Target::Furniture));
        assert!("ceiling".parse::<Target>().is_err());
    }
}
