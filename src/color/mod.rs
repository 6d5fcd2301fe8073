//! Colour science utilities shared across the engine.
//!
//! This module provides pure conversions between hex, RGB, and HSL
//! representations, harmony generation, and perceptual analysis
//! (temperature, mood, WCAG contrast). Everything here is side-effect-free
//! and behaves identically wherever it runs.

mod analysis;
mod convert;
mod harmony;

pub use analysis::{Mood, Temperature, analyze_mood, analyze_temperature, contrast_ratio,
    relative_luminance};
pub use convert::{Hsl, Rgb, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
pub use harmony::{HarmonyKind, generate_harmony};
