//! The colour-operation request handler.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::color::{HarmonyKind, analyze_mood, analyze_temperature, contrast_ratio,
    generate_harmony};

use super::crypto::PayloadCipher;
use super::request::{ColorRequest, Operation};
use super::response::{
    ColorResponse, HarmonySet, OperationOutput, PaletteAnalysis, TemperatureEntry,
};

/// Process-wide configuration for the colour-operation boundary.
///
/// Injected at startup by the host; nothing in this module reads ambient
/// environment state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Secret the payload cipher is keyed from
    pub secret: String,
    /// Whether detailed internal errors may be exposed to callers
    pub development: bool,
}

impl ApiConfig {
    /// Create a production configuration with the given secret.
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            development: false,
        }
    }

    /// Enable development diagnostics on this configuration.
    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }
}

/// Errors the handler reports to its caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required parameter is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The encrypted payload could not be decrypted
    #[error("failed to decrypt data")]
    Decrypt,

    /// The operation name is not recognised
    #[error("invalid operation: {0}")]
    UnknownOperation(String),

    /// Something unexpected failed inside the handler
    #[error("colour processing failed")]
    Internal {
        /// Detail exposed only in development mode
        detail: String,
    },
}

impl ApiError {
    /// HTTP-style status class for this error: 400 for caller mistakes,
    /// 500 for internal failures.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation(_) | ApiError::Decrypt | ApiError::UnknownOperation(_) => 400,
            ApiError::Internal { .. } => 500,
        }
    }

    /// Message suitable for the caller. Internal detail is only included
    /// when the handler runs in development mode.
    pub fn message(&self, development: bool) -> String {
        match self {
            ApiError::Internal { detail } if development => {
                format!("colour processing failed: {}", detail)
            }
            other => other.to_string(),
        }
    }
}

/// Wire shape of a decrypted colour payload.
#[derive(Debug, Serialize, Deserialize)]
struct EncryptedColors {
    colors: Vec<String>,
}

/// The colour-operation handler.
pub struct ColorApi {
    cipher: PayloadCipher,
    development: bool,
}

impl ColorApi {
    /// Build a handler from injected configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            cipher: PayloadCipher::new(&config.secret),
            development: config.development,
        }
    }

    /// Whether development diagnostics are enabled.
    pub fn development(&self) -> bool {
        self.development
    }

    /// Handle one request, producing an envelope or a classified error.
    pub fn handle(&self, request: &ColorRequest) -> Result<ColorResponse, ApiError> {
        let operation = Operation::parse(&request.operation)
            .ok_or_else(|| ApiError::UnknownOperation(request.operation.clone()))?;
        let colors = self.input_colors(request)?;

        let output = match operation {
            Operation::Harmony => {
                let (base, kind) = match (&request.base_color, request.harmony_type) {
                    (Some(base), Some(kind)) => (base, kind),
                    _ => {
                        return Err(ApiError::Validation(
                            "base colour and harmony type required".to_string(),
                        ));
                    }
                };
                OperationOutput::Harmony(generate_harmony(base, kind))
            }
            Operation::Temperature => {
                let base = request
                    .base_color
                    .as_deref()
                    .ok_or_else(|| ApiError::Validation("base colour required".to_string()))?;
                OperationOutput::Temperature(analyze_temperature(base))
            }
            Operation::Contrast => {
                let colors = colors.filter(|c| c.len() >= 2).ok_or_else(|| {
                    ApiError::Validation("at least two colours required".to_string())
                })?;
                OperationOutput::Contrast(contrast_ratio(&colors[0], &colors[1]))
            }
            Operation::Mood => {
                let colors = non_empty_colors(colors)?;
                OperationOutput::Mood(analyze_mood(&colors))
            }
            Operation::ProcessPalette => {
                let colors = non_empty_colors(colors)?;
                OperationOutput::Palette(process_palette(colors))
            }
        };

        let timestamp = now_millis();
        if request.encrypt_response {
            let encrypted = self.cipher.seal(&output).map_err(|e| ApiError::Internal {
                detail: e.to_string(),
            })?;
            Ok(ColorResponse {
                success: true,
                operation: request.operation.clone(),
                timestamp,
                data: None,
                encrypted: Some(encrypted),
            })
        } else {
            Ok(ColorResponse {
                success: true,
                operation: request.operation.clone(),
                timestamp,
                data: Some(output),
                encrypted: None,
            })
        }
    }

    /// Resolve the input colour list, decrypting the payload when one was
    /// supplied in place of plain colours.
    fn input_colors(&self, request: &ColorRequest) -> Result<Option<Vec<String>>, ApiError> {
        match &request.encrypted {
            Some(token) => {
                let payload: EncryptedColors =
                    self.cipher.open(token).map_err(|_| ApiError::Decrypt)?;
                Ok(Some(payload.colors))
            }
            None => Ok(request.colors.clone()),
        }
    }

    /// Seal a colour list the way clients are expected to.
    pub fn seal_colors(&self, colors: &[String]) -> Result<String, ApiError> {
        self.cipher
            .seal(&EncryptedColors {
                colors: colors.to_vec(),
            })
            .map_err(|e| ApiError::Internal {
                detail: e.to_string(),
            })
    }
}

fn non_empty_colors(colors: Option<Vec<String>>) -> Result<Vec<String>, ApiError> {
    colors
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::Validation("colours array required".to_string()))
}

/// Comprehensive palette analysis for `process-palette`.
fn process_palette(colors: Vec<String>) -> PaletteAnalysis {
    let mood = analyze_mood(&colors);
    let temperatures = colors
        .iter()
        .map(|color| TemperatureEntry {
            color: color.clone(),
            temperature: analyze_temperature(color),
        })
        .collect();
    let contrasts = (colors.len() > 1).then(|| contrast_ratio(&colors[0], &colors[1]));
    let harmonies = colors.first().map(|base| HarmonySet {
        complementary: generate_harmony(base, HarmonyKind::Complementary),
        triadic: generate_harmony(base, HarmonyKind::Triadic),
        analogous: generate_harmony(base, HarmonyKind::Analogous),
    });

    PaletteAnalysis {
        colors,
        mood,
        temperatures,
        contrasts,
        harmonies,
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
