//! Colour-operation response types.

use serde::Serialize;

use crate::color::{Mood, Temperature};

/// Response envelope for a successful operation.
///
/// Exactly one of `data` and `encrypted` is present, depending on whether
/// the caller asked for an encrypted response.
#[derive(Debug, Serialize)]
pub struct ColorResponse {
    /// Always true; failures are reported as errors, not envelopes
    pub success: bool,
    /// Echo of the requested operation name
    pub operation: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    /// Operation result, absent when the response is encrypted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<OperationOutput>,
    /// Encrypted operation result, present on request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<String>,
}

/// The result of one colour operation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    /// Harmony set
    Harmony(Vec<String>),
    /// Temperature classification
    Temperature(Temperature),
    /// Contrast ratio
    Contrast(f64),
    /// Palette mood
    Mood(Mood),
    /// Composite palette analysis
    Palette(PaletteAnalysis),
}

/// Composite analysis returned by `process-palette`.
///
/// The optional fields are explicitly nullable rather than dynamically
/// omitted: `contrasts` is null with fewer than two colours and
/// `harmonies` is null with none, so consumers get a fixed shape.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteAnalysis {
    /// The input colours, echoed back
    pub colors: Vec<String>,
    /// Overall palette mood
    pub mood: Mood,
    /// Per-colour temperature classification
    pub temperatures: Vec<TemperatureEntry>,
    /// Contrast ratio of the first two colours, when present
    pub contrasts: Option<f64>,
    /// Harmony sets built from the first colour, when present
    pub harmonies: Option<HarmonySet>,
}

/// One colour's temperature classification.
#[derive(Debug, Clone, Serialize)]
pub struct TemperatureEntry {
    /// The colour as supplied
    pub color: String,
    /// Its temperature
    pub temperature: Temperature,
}

/// All three harmony sets for a base colour.
#[derive(Debug, Clone, Serialize)]
pub struct HarmonySet {
    /// Base colour and its opposite
    pub complementary: Vec<String>,
    /// Three colours 120 degrees apart
    pub triadic: Vec<String>,
    /// Base colour and its 30-degree neighbours
    pub analogous: Vec<String>,
}
