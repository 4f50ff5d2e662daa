//! Mapping a template onto wall sections and furniture.

use crate::color::{normalize_hex, Color};
use crate::config::{MAX_WALL_SECTIONS, MIN_WALL_SECTIONS};
use crate::error::{PaletteError, Result};
use serde::Serialize;

use super::set::{AccentTarget, Template};

/// Colors a template assigns, wall sections in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionAssignment {
    pub walls: Vec<Color>,
    pub furniture: Option<Color>,
}

/// Section counts for each template role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioCounts {
    pub main: usize,
    pub secondary: usize,
    pub accent: usize,
}

impl RatioCounts {
    pub fn total(&self) -> usize {
        self.main + self.secondary + self.accent
    }
}

/// Split `total` sections by the given main/secondary fractions.
///
/// Every role gets at least one slot and the rounding surplus goes to the
/// accent. When that overflows `total`, main gives up slots first (down to
/// one), then the accent, then the secondary.
pub fn ratio_counts(total: usize, main_share: f64, secondary_share: f64) -> RatioCounts {
    let total_f = total as f64;
    let main = ((total_f * main_share).round() as usize).max(1);
    let secondary = ((total_f * secondary_share).round() as usize).max(1);
    let accent = total.saturating_sub(main + secondary).max(1);

    let mut counts = RatioCounts {
        main,
        secondary,
        accent,
    };
    while counts.total() > total.max(1) {
        if counts.main > 1 {
            counts.main -= 1;
        } else if counts.accent > 0 {
            counts.accent -= 1;
        } else {
            counts.secondary -= 1;
        }
    }
    counts
}

fn template_color(key: &str, field: &str, value: &str) -> Result<Color> {
    normalize_hex(value).ok_or_else(|| PaletteError::InvalidTemplate {
        key: key.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Assign template colors to at most `available_sections` wall sections.
///
/// With room for the full scheme the layout is fixed: `[main, main,
/// secondary]` plus furniture accent, or `[main, main, secondary, accent]`
/// for a wall accent. Fewer sections fall back to the proportional split.
pub fn apply_template(template: &Template, available_sections: usize) -> Result<SectionAssignment> {
    let main = template_color(&template.name, "main", &template.main)?;
    let secondary = template_color(&template.name, "secondary", &template.secondary)?;
    let accent = template_color(&template.name, "accent", &template.accent)?;

    let available = available_sections.clamp(MIN_WALL_SECTIONS, MAX_WALL_SECTIONS);
    let accent_on_wall = template.accent_target == AccentTarget::Wall;
    let scheme_len = if accent_on_wall { 4 } else { 3 };

    let counts = if available >= scheme_len {
        RatioCounts {
            main: 2,
            secondary: 1,
            accent: usize::from(accent_on_wall),
        }
    } else {
        let (main_share, secondary_share) = template.ratio.fractions();
        let mut counts = ratio_counts(available, main_share, secondary_share);
        if !accent_on_wall {
            // Accent lives on the furniture; its wall slots go to main
            counts.main += counts.accent;
            counts.accent = 0;
        }
        counts
    };

    let mut walls = Vec::with_capacity(counts.total());
    walls.extend(std::iter::repeat(main).take(counts.main));
    walls.extend(std::iter::repeat(secondary).take(counts.secondary));
    walls.extend(std::iter::repeat(accent).take(counts.accent));

    Ok(SectionAssignment {
        walls,
        furniture: (!accent_on_wall).then_some(accent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template(target: AccentTarget) -> Template {
        Template::new("test", "#112233", "#445566", "#778899", target)
    }

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    // ==================== fixed scheme tests ====================

    #[test]
    fn test_accent_to_furniture() {
        let assignment = apply_template(&template(AccentTarget::Furniture), 4).unwrap();
        assert_eq!(hexes(&assignment.walls), vec!["#112233", "#112233", "#445566"]);
        assert_eq!(assignment.furniture.unwrap().to_string(), "#778899");
    }

    #[test]
    fn test_accent_to_wall() {
        let assignment = apply_template(&template(AccentTarget::Wall), 4).unwrap();
        assert_eq!(
            hexes(&assignment.walls),
            vec!["#112233", "#112233", "#445566", "#778899"]
        );
        assert_eq!(assignment.furniture, None);
    }

    #[test]
    fn test_out_of_range_sections_clamped() {
        let assignment = apply_template(&template(AccentTarget::Wall), 12).unwrap();
        assert_eq!(assignment.walls.len(), 4);
        let assignment = apply_template(&template(AccentTarget::Furniture), 0).unwrap();
        assert_eq!(hexes(&assignment.walls), vec!["#112233"]);
    }

    // ==================== proportional split tests ====================

    #[test]
    fn test_wall_accent_with_three_sections() {
        let assignment = apply_template(&template(AccentTarget::Wall), 3).unwrap();
        assert_eq!(hexes(&assignment.walls), vec!["#112233", "#445566", "#778899"]);
    }

    #[test]
    fn test_furniture_accent_with_two_sections() {
        let assignment = apply_template(&template(AccentTarget::Furniture), 2).unwrap();
        assert_eq!(hexes(&assignment.walls), vec!["#112233", "#445566"]);
        assert!(assignment.furniture.is_some());
    }

    #[test]
    fn test_ratio_counts() {
        assert_eq!(
            ratio_counts(10, 0.6, 0.3),
            RatioCounts { main: 6, secondary: 3, accent: 1 }
        );
        assert_eq!(
            ratio_counts(4, 0.6, 0.3),
            RatioCounts { main: 2, secondary: 1, accent: 1 }
        );
        assert_eq!(
            ratio_counts(3, 0.6, 0.3),
            RatioCounts { main: 1, secondary: 1, accent: 1 }
        );
        assert_eq!(
            ratio_counts(2, 0.6, 0.3),
            RatioCounts { main: 1, secondary: 1, accent: 0 }
        );
        assert_eq!(ratio_counts(1, 0.6, 0.3).total(), 1);
    }

    #[test]
    fn test_rounding_surplus_goes_to_accent() {
        // 7 * 0.6 = 4.2 -> 4, 7 * 0.3 = 2.1 -> 2, accent absorbs the rest
        assert_eq!(
            ratio_counts(7, 0.6, 0.3),
            RatioCounts { main: 4, secondary: 2, accent: 1 }
        );
        assert_eq!(
            ratio_counts(8, 0.5, 0.2),
            RatioCounts { main: 4, secondary: 2, accent: 2 }
        );
    }

    // ==================== validation tests ====================

    #[test]
    fn test_invalid_color_fails() {
        let mut bad = template(AccentTarget::Furniture);
        bad.secondary = "teal".to_string();
        match apply_template(&bad, 4) {
            Err(PaletteError::InvalidTemplate { field, value, .. }) => {
                assert_eq!(field, "secondary");
                assert_eq!(value, "teal");
            }
            other => panic!("Expected InvalidTemplate, got {:?}", other),
        }
    }
}
