//! Colour-operation request types.

use serde::Deserialize;

use crate::color::HarmonyKind;

/// A colour-operation request.
///
/// `operation` stays a raw string so an unknown value can be rejected with
/// a validation error (and echoed back) instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorRequest {
    /// Requested operation name
    pub operation: String,
    /// Input colours, where the operation takes a list
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    /// Base colour for harmony and temperature operations
    #[serde(default, rename = "baseColor")]
    pub base_color: Option<String>,
    /// Harmony scheme for the harmony operation
    #[serde(default, rename = "harmonyType")]
    pub harmony_type: Option<HarmonyKind>,
    /// Encrypted `{ "colors": [...] }` payload, used in place of `colors`
    #[serde(default)]
    pub encrypted: Option<String>,
    /// Whether to encrypt the response data
    #[serde(default, rename = "encryptResponse")]
    pub encrypt_response: bool,
}

impl ColorRequest {
    /// Create a bare request for an operation, for programmatic callers.
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            colors: None,
            base_color: None,
            harmony_type: None,
            encrypted: None,
            encrypt_response: false,
        }
    }
}

/// The supported colour operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Generate a harmony set from a base colour
    Harmony,
    /// Classify a base colour as warm/cool/neutral
    Temperature,
    /// WCAG contrast ratio of the first two colours
    Contrast,
    /// Mood of a palette
    Mood,
    /// Composite analysis of a palette
    ProcessPalette,
}

impl Operation {
    /// Parse a wire operation name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "harmony" => Some(Self::Harmony),
            "temperature" => Some(Self::Temperature),
            "contrast" => Some(Self::Contrast),
            "mood" => Some(Self::Mood),
            "process-palette" => Some(Self::ProcessPalette),
            _ => None,
        }
    }

    /// The wire name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Harmony => "harmony",
            Self::Temperature => "temperature",
            Self::Contrast => "contrast",
            Self::Mood => "mood",
            Self::ProcessPalette => "process-palette",
        }
    }
}
