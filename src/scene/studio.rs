//! A session: one scene plus the read-only catalog and template data.

use crate::catalog::{CatalogMap, ResolvedColor};
use crate::color::{normalize_hex, Color};
use crate::config::{StudioConfig, MAX_WALL_SECTIONS};
use crate::error::{PaletteError, Result};
use crate::harmony::{generate_catalog_harmony, generate_harmony, SuggestionSet};
use crate::template::{apply_template, TemplateSet};
use tracing::{debug, info};

use super::snapshot::SceneSnapshot;
use super::state::{SceneState, Target};

/// Entry point for front ends.
///
/// Every operation either succeeds and returns the new snapshot, or fails
/// and leaves the scene untouched.
#[derive(Debug, Clone)]
pub struct Studio {
    config: StudioConfig,
    catalogs: CatalogMap,
    templates: TemplateSet,
    scene: SceneState,
    harmony_round: usize,
}

impl Studio {
    /// Create a session. Invalid default colors in `config` are rejected.
    pub fn new(config: StudioConfig, catalogs: CatalogMap, templates: TemplateSet) -> Result<Self> {
        let wall = normalize_hex(&config.default_wall_color)
            .ok_or_else(|| PaletteError::invalid_color(&config.default_wall_color))?;
        let furniture = normalize_hex(&config.default_furniture_color)
            .ok_or_else(|| PaletteError::invalid_color(&config.default_furniture_color))?;

        Ok(Self {
            scene: SceneState::new(wall, furniture),
            config,
            catalogs,
            templates,
            harmony_round: 0,
        })
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn catalogs(&self) -> &CatalogMap {
        &self.catalogs
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(&self.scene)
    }

    /// Resolve hex or catalog input to a color.
    pub fn resolve(&self, input: &str, preferred: Option<&str>) -> Result<ResolvedColor> {
        self.catalogs
            .resolve_color_by_code(input, preferred)
            .ok_or_else(|| PaletteError::invalid_color(input))
    }

    /// Apply a hex value or catalog code to the furniture or a wall section.
    pub fn apply_color(
        &mut self,
        target: Target,
        color_or_code: &str,
        section: Option<usize>,
    ) -> Result<SceneSnapshot> {
        let resolved = self.resolve(color_or_code, None)?;
        debug!("Resolved '{}' via {} to {}", color_or_code, resolved.catalog, resolved.hex);
        self.scene.apply_color(target, resolved.hex, section);
        Ok(self.snapshot())
    }

    pub fn set_section_count(&mut self, count: i64) -> SceneSnapshot {
        self.scene.set_section_count(count);
        self.snapshot()
    }

    pub fn select_section(&mut self, index: usize) -> SceneSnapshot {
        self.scene.select_section(index);
        self.snapshot()
    }

    /// Apply a template by key.
    pub fn apply_template(&mut self, key: &str) -> Result<SceneSnapshot> {
        let template = self
            .templates
            .get(key)
            .ok_or_else(|| PaletteError::UnknownTemplate {
                key: key.to_string(),
            })?;
        let assignment = apply_template(template, MAX_WALL_SECTIONS)?;
        self.scene.apply_assignment(&assignment);
        info!("Applied template '{}' ({} sections)", template.name, assignment.walls.len());
        Ok(self.snapshot())
    }

    /// Regenerate synthetic suggestions for the active wall color.
    pub fn generate_harmony(&mut self) -> SceneSnapshot {
        let include_monochrome = self.config.include_monochrome;
        self.scene.generate_harmony(include_monochrome);
        self.snapshot()
    }

    /// Suggestions for an arbitrary base color, without touching the scene.
    ///
    /// With a catalog the entries are ranked for `round`; otherwise the
    /// synthetic set is generated, honoring `include_monochrome`.
    pub fn suggest(&self, base: Color, catalog: Option<&str>, round: usize) -> Result<SuggestionSet> {
        match catalog {
            Some(name) => {
                let catalog = self.catalogs.get(name).ok_or_else(|| PaletteError::UnknownCatalog {
                    name: name.to_string(),
                })?;
                Ok(generate_catalog_harmony(
                    base,
                    &catalog.entries,
                    round,
                    self.config.suggestion_limit,
                ))
            }
            None => {
                let mut set = generate_harmony(base);
                if !self.config.include_monochrome {
                    set.monochrome = None;
                }
                Ok(set)
            }
        }
    }

    /// Suggestions picked from a catalog for the active wall color.
    ///
    /// Each call advances the contrast rotation.
    pub fn generate_catalog_harmony(&mut self, catalog: &str) -> Result<SceneSnapshot> {
        let entries = &self
            .catalogs
            .get(catalog)
            .ok_or_else(|| PaletteError::UnknownCatalog {
                name: catalog.to_string(),
            })?
            .entries;
        let set = generate_catalog_harmony(
            self.scene.active_color(),
            entries,
            self.harmony_round,
            self.config.suggestion_limit,
        );
        self.harmony_round = self.harmony_round.wrapping_add(1);
        self.scene.set_suggestions(set);
        Ok(self.snapshot())
    }

    pub fn set_light_on(&mut self, on: bool) -> SceneSnapshot {
        self.scene.lighting.on = on;
        self.snapshot()
    }

    pub fn set_temperature(&mut self, value: i64) -> SceneSnapshot {
        self.scene.lighting.set_temperature(value);
        self.snapshot()
    }

    pub fn set_brightness(&mut self, value: i64) -> SceneSnapshot {
        self.scene.lighting.set_brightness(value);
        self.snapshot()
    }
}
