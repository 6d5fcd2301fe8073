//! Catalogue document persistence.
//!
//! The catalogue JSON file is the on-disk source of truth; the pipeline
//! reads and rewrites it in place, everything else treats it as read-only.

use std::path::Path;

use crate::model::ShadeCatalog;

use super::dedup::{DedupReport, dedup};
use super::error::CatalogError;

/// Load a catalogue document.
///
/// The stored total is never trusted: it is recomputed from the category
/// lists, with a warning if the document disagreed with itself.
pub fn load(path: &Path) -> Result<ShadeCatalog, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    let mut catalog: ShadeCatalog = serde_json::from_str(&json)?;

    let computed = catalog.computed_total();
    if catalog.total_colors != computed {
        log::warn!(
            "Catalogue {:?} claims {} colours but holds {}; using the computed total",
            path,
            catalog.total_colors,
            computed
        );
        catalog.total_colors = computed;
    }

    log::info!(
        "Loaded catalogue '{}' with {} colours in {} categories",
        catalog.brand,
        catalog.total_colors,
        catalog.color_types.len()
    );
    Ok(catalog)
}

/// Write a catalogue document, pretty-printed with category order preserved.
pub fn save(path: &Path, catalog: &ShadeCatalog) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;
    log::info!(
        "Wrote catalogue '{}' ({} colours) to {:?}",
        catalog.brand,
        catalog.total_colors,
        path
    );
    Ok(())
}

/// Run the deduplication pass on a catalogue file, rewriting it in place.
pub fn dedup_file(path: &Path) -> Result<DedupReport, CatalogError> {
    let mut catalog = load(path)?;
    let report = dedup(&mut catalog);
    save(path, &catalog)?;
    Ok(report)
}
