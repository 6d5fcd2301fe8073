//! Perceptual colour analysis: temperature, contrast, and mood.

use serde::{Deserialize, Serialize};

use super::convert::{Rgb, hex_to_rgb, rgb_to_hsl};

/// Perceived colour temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    /// Red-leaning colours
    Warm,
    /// Blue-leaning colours
    Cool,
    /// Neither warm nor cool
    Neutral,
}

impl Temperature {
    /// Get the wire name for this temperature.
    pub fn name(&self) -> &'static str {
        match self {
            Temperature::Warm => "warm",
            Temperature::Cool => "cool",
            Temperature::Neutral => "neutral",
        }
    }
}

/// Overall mood of a colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Highly saturated and dark
    Dramatic,
    /// Muted and light
    Peaceful,
    /// Dominated by warm colours
    Energetic,
    /// Dominated by cool colours
    Calming,
    /// None of the above
    Balanced,
}

impl Mood {
    /// Get the wire name for this mood.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Dramatic => "dramatic",
            Mood::Peaceful => "peaceful",
            Mood::Energetic => "energetic",
            Mood::Calming => "calming",
            Mood::Balanced => "balanced",
        }
    }
}

/// Classify a colour as warm, cool, or neutral.
///
/// Warmth is `(r - b) / 255` on the 0-1 scale: above 0.1 is warm, below
/// -0.1 is cool. Malformed hex fails safe to neutral.
pub fn analyze_temperature(hex: &str) -> Temperature {
    let Some(rgb) = hex_to_rgb(hex) else {
        return Temperature::Neutral;
    };
    let warmth = (rgb.r as f64 - rgb.b as f64) / 255.0;
    if warmth > 0.1 {
        Temperature::Warm
    } else if warmth < -0.1 {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

/// WCAG relative luminance of a colour.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between two colours, always at least 1.
///
/// A malformed hex contributes zero luminance, mirroring the fail-safe
/// behaviour of the other analysis functions.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    let lum_a = hex_to_rgb(hex_a).map(relative_luminance).unwrap_or(0.0);
    let lum_b = hex_to_rgb(hex_b).map(relative_luminance).unwrap_or(0.0);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Classify the mood of a palette.
///
/// Mean saturation and lightness divide by the full list length, so
/// unparseable entries drag the means down rather than being skipped.
/// The rules are evaluated in a fixed order and the first match wins;
/// several rules can hold at once, so the order is part of the contract.
pub fn analyze_mood<S: AsRef<str>>(colors: &[S]) -> Mood {
    if colors.is_empty() {
        return Mood::Balanced;
    }

    let mut total_saturation = 0.0;
    let mut total_lightness = 0.0;
    let mut warm_colors = 0usize;

    for color in colors {
        if let Some(rgb) = hex_to_rgb(color.as_ref()) {
            let hsl = rgb_to_hsl(rgb);
            total_saturation += hsl.s;
            total_lightness += hsl.l;
            if analyze_temperature(color.as_ref()) == Temperature::Warm {
                warm_colors += 1;
            }
        }
    }

    let count = colors.len() as f64;
    let avg_saturation = total_saturation / count;
    let avg_lightness = total_lightness / count;
    let warm_ratio = warm_colors as f64 / count;

    if avg_saturation > 70.0 && avg_lightness < 50.0 {
        Mood::Dramatic
    } else if avg_saturation < 30.0 && avg_lightness > 70.0 {
        Mood::Peaceful
    } else if warm_ratio > 0.7 {
        Mood::Energetic
    } else if warm_ratio < 0.3 {
        Mood::Calming
    } else {
        Mood::Balanced
    }
}
