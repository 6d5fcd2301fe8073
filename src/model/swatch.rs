//! Catalogue colour swatch model.

use serde::{Deserialize, Serialize};

/// One named colour in a brand catalogue.
///
/// Field names follow the catalogue document format (`colorName`,
/// `colorCode`, `colorHex`). The name is a free-text label that may collide
/// across categories; the code is an opaque catalogue identifier and is not
/// guaranteed unique across brands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    /// Display name of the colour
    #[serde(rename = "colorName")]
    pub name: String,
    /// Catalogue identifier (e.g. "MRF-1234")
    #[serde(rename = "colorCode")]
    pub code: String,
    /// 6-digit hex value, lowercased for identity comparisons
    #[serde(rename = "colorHex")]
    pub hex: String,
}

impl ColorSwatch {
    /// Create a new swatch.
    pub fn new(name: &str, code: &str, hex: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            hex: hex.to_string(),
        }
    }

    /// Case-insensitive identity key used for deduplication.
    pub fn dedup_key(&self) -> String {
        format!("{}|{}", self.name.to_lowercase(), self.hex.to_lowercase())
    }
}
