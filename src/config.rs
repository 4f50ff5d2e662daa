//! Configuration constants and settings for the palette core.

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default wall section color.
pub const DEFAULT_WALL_COLOR: &str = "#D9D9D9";

/// Default furniture color.
pub const DEFAULT_FURNITURE_COLOR: &str = "#8C8C8C";

/// Minimum number of wall sections.
pub const MIN_WALL_SECTIONS: usize = 1;

/// Maximum number of wall sections.
pub const MAX_WALL_SECTIONS: usize = 4;

/// Number of catalog entries returned by catalog-aware ranking.
pub const SUGGESTION_LIMIT: usize = 5;

/// Lightness bounds for monochrome steps.
pub const MONOCHROME_MIN_LIGHTNESS: f64 = 5.0;
pub const MONOCHROME_MAX_LIGHTNESS: f64 = 95.0;

/// Catalog tag attached to colors entered as raw hex.
pub const MANUAL_CATALOG: &str = "manual";

/// Allowed catalogs, in lookup priority order.
pub const ALLOWED_CATALOGS: &[&str] = &["ral", "ncs", "dulux", "tikkurila", "iceparade", "pantone"];

/// Alternate spellings mapped to a canonical catalog key (after separator/case folding).
pub const CATALOG_ALIASES: &[(&str, &str)] = &[
    ("ralclassic", "ral"),
    ("naturalcolorsystem", "ncs"),
    ("ncsindex", "ncs"),
    ("duluxtrade", "dulux"),
    ("tikkurilasymphony", "tikkurila"),
    ("ip", "iceparade"),
    ("pantonetcx", "pantone"),
];

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioConfig {
    /// Initial color of every wall section.
    pub default_wall_color: String,
    /// Initial furniture color.
    pub default_furniture_color: String,
    /// Catalogs accepted from the database, in priority order.
    pub allowed_catalogs: Vec<String>,
    /// Maximum catalog entries per ranked suggestion list.
    pub suggestion_limit: usize,
    /// Whether synthetic harmony includes the monochrome set.
    pub include_monochrome: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_wall_color: DEFAULT_WALL_COLOR.to_string(),
            default_furniture_color: DEFAULT_FURNITURE_COLOR.to_string(),
            allowed_catalogs: ALLOWED_CATALOGS.iter().map(|s| s.to_string()).collect(),
            suggestion_limit: SUGGESTION_LIMIT,
            include_monochrome: true,
        }
    }
}

impl StudioConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PaletteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: StudioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Allowed catalog keys as string slices.
    pub fn allowed(&self) -> Vec<&str> {
        self.allowed_catalogs.iter().map(|s| s.as_str()).collect()
    }
}

/// Utility functions for hue angle operations.
pub mod angle {
    /// Normalize angle to 0-360 range (exclusive of 360).
    #[inline]
    pub fn normalize_degrees(angle: f64) -> f64 {
        let a = angle.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negatives
        if a >= 360.0 {
            0.0
        } else {
            a
        }
    }

    /// Shortest distance between two hues on the color wheel.
    #[inline]
    pub fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (normalize_degrees(a) - normalize_degrees(b)).abs();
        d.min(360.0 - d)
    }
}
