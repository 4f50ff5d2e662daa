//! Filtering a raw catalog database down to the allowed catalogs.

use crate::color::{normalize_hex, Color};
use crate::error::{PaletteError, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use super::resolver::canonical_catalog;

/// A single product code in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: String,
    pub hex: Color,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, hex: Color) -> Self {
        Self {
            code: code.into(),
            hex,
        }
    }
}

/// A named catalog with entries in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Canonical catalog key.
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Find an entry by code. Codes compare case-insensitively; the first match wins.
    pub fn find(&self, code: &str) -> Option<&CatalogEntry> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The allowed catalogs of a database, ordered by lookup priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogMap {
    catalogs: Vec<Catalog>,
    #[serde(skip)]
    allowed: Vec<String>,
}

impl CatalogMap {
    /// Load and filter a JSON catalog database.
    pub fn from_file(path: &Path, allowed: &[&str]) -> Result<Self> {
        if !path.exists() {
            return Err(PaletteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let raw: Value = serde_json::from_str(&content)?;
        Ok(get_catalog_map(&raw, allowed))
    }

    /// An empty map that still knows the allowed catalog names.
    pub fn empty(allowed: &[&str]) -> Self {
        Self {
            catalogs: Vec::new(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Look up a catalog by any accepted spelling of its name.
    pub fn get(&self, name: &str) -> Option<&Catalog> {
        let key = canonical_catalog(name, &self.allowed_refs())?;
        self.catalogs.iter().find(|c| c.name == key)
    }

    /// Catalogs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.iter()
    }

    /// Canonical names of the loaded catalogs.
    pub fn names(&self) -> Vec<&str> {
        self.catalogs.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    pub(crate) fn allowed_refs(&self) -> Vec<&str> {
        self.allowed.iter().map(|s| s.as_str()).collect()
    }
}

/// Filter a raw database to the allowed catalogs.
///
/// Accepts either `{catalog: {code: hex}}` or the same object under a
/// top-level `"catalogs"` key. Unknown catalogs, non-object catalog values
/// and entries with invalid hex are skipped.
pub fn get_catalog_map(raw: &Value, allowed: &[&str]) -> CatalogMap {
    let mut map = CatalogMap::empty(allowed);

    let root = match raw.get("catalogs") {
        Some(inner @ Value::Object(_)) => inner,
        _ => raw,
    };
    let Some(object) = root.as_object() else {
        debug!("Catalog database is not an object, ignoring");
        return map;
    };

    for (raw_name, value) in object {
        let Some(key) = canonical_catalog(raw_name, allowed) else {
            debug!("Dropping catalog '{}': not in the allowed set", raw_name);
            continue;
        };
        let Some(codes) = value.as_object() else {
            debug!("Dropping catalog '{}': value is not a mapping", raw_name);
            continue;
        };

        let entries = codes.iter().filter_map(|(code, hex)| {
            let color = hex.as_str().and_then(normalize_hex);
            if color.is_none() {
                debug!("Skipping {}:{} with invalid color {}", key, code, hex);
            }
            color.map(|c| CatalogEntry::new(code.clone(), c))
        });

        match map.catalogs.iter_mut().find(|c| c.name == key) {
            Some(existing) => existing.entries.extend(entries),
            None => map.catalogs.push(Catalog {
                name: key.to_string(),
                entries: entries.collect(),
            }),
        }
    }

    // Priority order is the allowed-list order, not document order
    map.catalogs.sort_by_key(|c| {
        allowed
            .iter()
            .position(|a| *a == c.name)
            .unwrap_or(usize::MAX)
    });

    map
}
