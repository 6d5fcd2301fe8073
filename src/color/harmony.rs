//! Colour harmony generation.

use serde::{Deserialize, Serialize};

use super::convert::{hex_to_rgb, hsl_to_hex, rgb_to_hsl};

/// The supported harmony schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// Base colour plus its opposite on the hue wheel
    Complementary,
    /// Three colours spaced 120 degrees apart
    Triadic,
    /// Base colour flanked by its 30-degree neighbours
    Analogous,
}

impl HarmonyKind {
    /// Get the wire name for this harmony kind.
    pub fn name(&self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Analogous => "analogous",
        }
    }
}

/// Generate a harmony set from a base colour.
///
/// Hue arithmetic wraps modulo 360 while saturation and lightness are held
/// from the base colour. The base colour occupies its natural position in
/// the result (first for complementary/triadic, middle for analogous) in
/// normalised lowercase form. A malformed base yields an empty set.
pub fn generate_harmony(base_hex: &str, kind: HarmonyKind) -> Vec<String> {
    let Some(rgb) = hex_to_rgb(base_hex) else {
        return Vec::new();
    };
    let hsl = rgb_to_hsl(rgb);
    let base = rgb.to_hex();

    match kind {
        HarmonyKind::Complementary => vec![
            base,
            hsl_to_hex((hsl.h + 180.0) % 360.0, hsl.s, hsl.l),
        ],
        HarmonyKind::Triadic => vec![
            base,
            hsl_to_hex((hsl.h + 120.0) % 360.0, hsl.s, hsl.l),
            hsl_to_hex((hsl.h + 240.0) % 360.0, hsl.s, hsl.l),
        ],
        HarmonyKind::Analogous => vec![
            hsl_to_hex((hsl.h + 330.0) % 360.0, hsl.s, hsl.l),
            base,
            hsl_to_hex((hsl.h + 30.0) % 360.0, hsl.s, hsl.l),
        ],
    }
}
