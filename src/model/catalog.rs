//! Brand catalogue model: shade categories and their swatches.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::swatch::ColorSwatch;

/// A brand's colour catalogue, grouped into shade categories.
///
/// Category order is document order (insertion-ordered map), which the
/// deduplication pipeline relies on for its first-seen tie-breaks. The
/// `totalColors` field is derived data; [`ShadeCatalog::recount`] is the
/// only way it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeCatalog {
    /// Brand label (e.g. "MRF Paints")
    pub brand: String,
    /// Sum of all category list lengths
    #[serde(rename = "totalColors")]
    pub total_colors: usize,
    /// Category name to swatch list, in document order
    #[serde(rename = "colorTypes")]
    pub color_types: IndexMap<String, Vec<ColorSwatch>>,
}

impl ShadeCatalog {
    /// Create an empty catalogue for a brand.
    pub fn new(brand: &str) -> Self {
        Self {
            brand: brand.to_string(),
            total_colors: 0,
            color_types: IndexMap::new(),
        }
    }

    /// Compute the true total from the category lists.
    pub fn computed_total(&self) -> usize {
        self.color_types.values().map(Vec::len).sum()
    }

    /// Recompute `total_colors` from the category lists.
    pub fn recount(&mut self) {
        self.total_colors = self.computed_total();
    }

    /// Iterate category names in document order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.color_types.keys().map(String::as_str)
    }
}
