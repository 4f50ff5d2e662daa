//! Color catalogs: loading, name normalization and code resolution.

mod database;
mod resolver;

pub use database::{get_catalog_map, Catalog, CatalogEntry, CatalogMap};
pub use resolver::{canonical_catalog, normalize_catalog_name, ResolvedColor};
