//! Incremental ingestion of raw extracted colour records.

use std::collections::{HashMap, HashSet};

use crate::model::{ColorSwatch, ShadeCatalog};

/// Summary of one category ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Records installed after in-section deduplication
    pub added: usize,
    /// Exact-duplicate records dropped (first occurrence wins)
    pub skipped_duplicates: usize,
    /// Distinct hex values shared by differently-named records
    pub same_hex_collisions: usize,
    /// Distinct names shared by records with different hex values
    pub same_name_collisions: usize,
}

/// Install one category of raw extracted records into the catalogue.
///
/// Exact in-section duplicates (same `name|hex` key) are dropped, keeping
/// the first occurrence. Softer collisions (the same hex under different
/// names, or the same name with different hex values) are only reported,
/// since they are legitimate in brand catalogues. Re-ingesting an existing
/// category replaces its contents without changing its document position.
///
/// Callers should follow up with a full [`dedup`](super::dedup) pass so a
/// record that already lives in another category ends up in only one.
pub fn ingest_category(
    catalog: &mut ShadeCatalog,
    category: &str,
    records: Vec<ColorSwatch>,
) -> IngestReport {
    let mut seen = HashSet::new();
    let mut kept: Vec<ColorSwatch> = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        if seen.insert(record.dedup_key()) {
            kept.push(record);
        } else {
            skipped += 1;
        }
    }

    let mut by_hex: HashMap<String, usize> = HashMap::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();
    for record in &kept {
        *by_hex.entry(record.hex.to_lowercase()).or_default() += 1;
        *by_name.entry(record.name.to_lowercase()).or_default() += 1;
    }
    let same_hex = by_hex.values().filter(|&&n| n > 1).count();
    let same_name = by_name.values().filter(|&&n| n > 1).count();
    if same_hex > 0 || same_name > 0 {
        log::info!(
            "[Duplicates in {}] same hex diff names: {} | same name diff hex: {}",
            category,
            same_hex,
            same_name
        );
    }

    let report = IngestReport {
        added: kept.len(),
        skipped_duplicates: skipped,
        same_hex_collisions: same_hex,
        same_name_collisions: same_name,
    };

    catalog.color_types.insert(category.to_string(), kept);
    catalog.recount();
    log::info!(
        "Added {} {} colours. Total: {}",
        report.added,
        category,
        catalog.total_colors
    );

    report
}
