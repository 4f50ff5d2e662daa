//! roomtint - Color harmony and catalog resolution for room visualization.
//!
//! This library provides the color core behind a room preview: hex/HSL
//! conversions, catalog code lookup, harmony suggestions, 60/30/10 designer
//! templates, and a scene session that front ends drive.
//!
//! # Example
//!
//! ```no_run
//! use roomtint::{CatalogMap, Studio, StudioConfig, Target, TemplateSet};
//! use std::path::Path;
//!
//! let config = StudioConfig::default();
//! let catalogs = CatalogMap::from_file(Path::new("catalogs.json"), &config.allowed()).unwrap();
//! let mut studio = Studio::new(config, catalogs, TemplateSet::builtin()).unwrap();
//! studio.apply_color(Target::Wall, "RAL:9010", Some(0)).unwrap();
//! let snapshot = studio.generate_harmony();
//! println!("{:?}", snapshot.suggestions);
//! ```

pub mod catalog;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod harmony;
pub mod scene;
pub mod template;

// Re-exports for convenience
pub use catalog::{get_catalog_map, CatalogEntry, CatalogMap, ResolvedColor};
pub use color::{hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, normalize_hex, rgb_to_hex, rgb_to_hsl, Color, Hsl};
pub use command::{parse_script, Command};
pub use config::StudioConfig;
pub use error::{ErrorCode, PaletteError, Result};
pub use harmony::{generate_catalog_harmony, generate_harmony, rank_catalog_matches, SuggestionKind, SuggestionSet};
pub use scene::{Lighting, SceneSnapshot, SceneState, Studio, Target};
pub use template::{apply_template, AccentTarget, SectionAssignment, Template, TemplateSet};

use std::path::Path;

/// Build a session from optional catalog, template and config files.
///
/// Missing catalogs give an empty catalog map; missing templates fall back
/// to the builtin presets.
pub fn open_studio(
    catalogs: Option<&Path>,
    templates: Option<&Path>,
    config: Option<&Path>,
) -> Result<Studio> {
    let config = match config {
        Some(path) => StudioConfig::from_file(path)?,
        None => StudioConfig::default(),
    };

    let allowed = config.allowed();
    let catalog_map = match catalogs {
        Some(path) => CatalogMap::from_file(path, &allowed)?,
        None => CatalogMap::empty(&allowed),
    };
    let template_set = match templates {
        Some(path) => TemplateSet::from_file(path)?,
        None => TemplateSet::builtin(),
    };

    tracing::debug!(
        "Loaded {} catalog(s), {} template(s)",
        catalog_map.names().len(),
        template_set.len()
    );

    Studio::new(config, catalog_map, template_set)
}
