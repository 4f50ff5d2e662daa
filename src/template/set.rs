//! Template definitions and the template set loaded from JSON.

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Where the accent color of a template goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentTarget {
    #[default]
    Furniture,
    Wall,
}

/// Area percentages for main, secondary and accent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioHint {
    pub main: f64,
    pub secondary: f64,
    pub accent: f64,
}

impl Default for RatioHint {
    fn default() -> Self {
        Self {
            main: 60.0,
            secondary: 30.0,
            accent: 10.0,
        }
    }
}

impl RatioHint {
    /// Main and secondary shares as fractions of the total.
    pub fn fractions(&self) -> (f64, f64) {
        let total = self.main + self.secondary + self.accent;
        if !(total > 0.0) || self.main < 0.0 || self.secondary < 0.0 || self.accent < 0.0 {
            return (0.6, 0.3);
        }
        (self.main / total, self.secondary / total)
    }
}

/// A designer-curated three-color scheme.
///
/// Colors are kept as supplied and validated when the template is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "primary", alias = "base")]
    pub main: String,
    #[serde(alias = "second")]
    pub secondary: String,
    pub accent: String,
    #[serde(default)]
    pub accent_target: AccentTarget,
    #[serde(default)]
    pub ratio: RatioHint,
}

impl Template {
    pub fn new(name: &str, main: &str, secondary: &str, accent: &str, target: AccentTarget) -> Self {
        Self {
            name: name.to_string(),
            main: main.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            accent_target: target,
            ratio: RatioHint::default(),
        }
    }
}

/// Templates keyed by id, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateSet {
    templates: Vec<(String, Template)>,
}

impl TemplateSet {
    /// The presets shipped with the widget.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                (
                    "scandi_light".to_string(),
                    Template::new("Scandi Light", "#E8E3DA", "#BFC9D9", "#355070", AccentTarget::Furniture),
                ),
                (
                    "urban_green".to_string(),
                    Template::new("Urban Green", "#CBD5C0", "#8FA99A", "#2D4A3E", AccentTarget::Wall),
                ),
                (
                    "warm_gallery".to_string(),
                    Template::new("Warm Gallery", "#F2D8C2", "#C9A27E", "#8B3A3A", AccentTarget::Furniture),
                ),
            ],
        }
    }

    /// Build a set from a JSON value, optionally wrapped in `"templates"`.
    ///
    /// Entries that don't describe a template are skipped.
    pub fn from_value(raw: &Value) -> Self {
        let root = match raw.get("templates") {
            Some(inner @ Value::Object(_)) => inner,
            _ => raw,
        };
        let Some(object) = root.as_object() else {
            warn!("Template set is not an object, ignoring");
            return Self::default();
        };

        let templates = object
            .iter()
            .filter_map(|(key, value)| match Template::deserialize(value) {
                Ok(mut template) => {
                    if template.name.is_empty() {
                        template.name = key.clone();
                    }
                    Some((key.clone(), template))
                }
                Err(e) => {
                    warn!("Skipping template '{}': {}", key, e);
                    None
                }
            })
            .collect();

        Self { templates }
    }

    /// Load a template set from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PaletteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let raw: Value = serde_json::from_str(&content)?;
        Ok(Self::from_value(&raw))
    }

    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, t)| t)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
