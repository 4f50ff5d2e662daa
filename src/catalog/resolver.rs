//! Resolving user input (hex, `catalog:code` or a bare code) to a color.

use crate::color::{normalize_hex, Color};
use crate::config::{CATALOG_ALIASES, MANUAL_CATALOG};
use serde::Serialize;

use super::database::CatalogMap;

/// A color found for some user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColor {
    /// Catalog code as stored in the catalog, or the normalized hex for manual input.
    pub code: String,
    pub hex: Color,
    /// Canonical catalog key, or `"manual"`.
    pub catalog: String,
}

/// Fold case and drop separators: `"Ice-Parade"` -> `"iceparade"`.
pub fn normalize_catalog_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Map any accepted spelling of a catalog name to its canonical allowed key.
pub fn canonical_catalog<'a>(raw: &str, allowed: &[&'a str]) -> Option<&'a str> {
    let folded = normalize_catalog_name(raw);
    if folded.is_empty() {
        return None;
    }
    let target = CATALOG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == folded)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(folded.as_str());

    allowed
        .iter()
        .copied()
        .find(|name| normalize_catalog_name(name) == target)
}

impl CatalogMap {
    /// Resolve a hex value, a `catalog:code` pair, or a bare code.
    ///
    /// A catalog qualifier is binding: when the named catalog lacks the code
    /// the lookup fails even if another catalog has it. Bare codes are looked
    /// up in `preferred` first, then in priority order.
    pub fn resolve_color_by_code(
        &self,
        input: &str,
        preferred: Option<&str>,
    ) -> Option<ResolvedColor> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(hex) = normalize_hex(input) {
            return Some(ResolvedColor {
                code: hex.to_string(),
                hex,
                catalog: MANUAL_CATALOG.to_string(),
            });
        }

        if let Some((catalog_name, code)) = input.split_once(':') {
            let catalog = self.get(catalog_name)?;
            let entry = catalog.find(code)?;
            return Some(ResolvedColor {
                code: entry.code.clone(),
                hex: entry.hex,
                catalog: catalog.name.clone(),
            });
        }

        let preferred = preferred.and_then(|name| self.get(name));
        preferred
            .into_iter()
            .chain(self.iter())
            .find_map(|catalog| {
                catalog.find(input).map(|entry| ResolvedColor {
                    code: entry.code.clone(),
                    hex: entry.hex,
                    catalog: catalog.name.clone(),
                })
            })
    }
}
