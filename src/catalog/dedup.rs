//! Cross-category deduplication of catalogue colours.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::model::ShadeCatalog;

use super::classify::best_category;

/// Summary of one deduplication pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupReport {
    /// Number of identity keys that appeared in more than one category
    pub duplicate_keys: usize,
    /// Per-category removal counts, in document order (only touched categories)
    pub removed: Vec<(String, usize)>,
    /// Catalogue total after the pass
    pub total: usize,
}

impl DedupReport {
    /// Whether the pass changed anything.
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Remove cross-category duplicates, keeping each colour only in the
/// category that matches its actual shade.
///
/// Records are indexed by their case-insensitive `name|hex` key in document
/// order. Keys recorded under more than one category get a best category
/// from the hue decision tree; each category is then rebuilt keeping a
/// record only if it is not such a duplicate or this is its best category,
/// with any remaining exact-duplicate keys inside a category suppressed
/// after the first occurrence. The catalogue total is recomputed at the end.
///
/// The pass is idempotent: its output contains no multi-category keys, so a
/// second run rebuilds every category unchanged.
pub fn dedup(catalog: &mut ShadeCatalog) -> DedupReport {
    // key -> (hex of first occurrence, every category appearance in order)
    let mut appearances: IndexMap<String, (String, Vec<String>)> = IndexMap::new();
    for (category, swatches) in &catalog.color_types {
        for swatch in swatches {
            let entry = appearances
                .entry(swatch.dedup_key())
                .or_insert_with(|| (swatch.hex.clone(), Vec::new()));
            entry.1.push(category.clone());
        }
    }

    let mut keep_in: HashMap<String, String> = HashMap::new();
    for (key, (hex, categories)) in &appearances {
        if categories.len() > 1 {
            keep_in.insert(key.clone(), best_category(hex, categories).to_string());
        }
    }
    log::info!(
        "Found {} colours appearing in multiple categories",
        keep_in.len()
    );

    let mut removed = Vec::new();
    for (category, swatches) in catalog.color_types.iter_mut() {
        let before = swatches.len();
        let mut seen_in_category = HashSet::new();
        swatches.retain(|swatch| {
            let key = swatch.dedup_key();
            // Non-duplicates stay where they are
            let target = keep_in
                .get(&key)
                .map(String::as_str)
                .unwrap_or(category.as_str());
            target == category.as_str() && seen_in_category.insert(key)
        });
        let dropped = before - swatches.len();
        if dropped > 0 {
            log::info!(
                "  {}: kept {}, removed {} duplicates",
                category,
                swatches.len(),
                dropped
            );
            removed.push((category.clone(), dropped));
        }
    }

    catalog.recount();
    log::info!("Deduplicated. Total unique colours: {}", catalog.total_colors);

    DedupReport {
        duplicate_keys: keep_in.len(),
        removed,
        total: catalog.total_colors,
    }
}
