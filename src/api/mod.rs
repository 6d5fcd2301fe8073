//! Colour-operation request boundary.
//!
//! A transport-agnostic handler for the colour operations the client and
//! report generator call: harmony generation, temperature, contrast, mood,
//! and whole-palette processing. The handler owns request validation, the
//! response envelope, and optional symmetric payload encryption; mounting
//! it behind an HTTP route is the host's concern.
//!
//! The encryption secret is process-wide configuration injected at
//! construction time, never read from ambient state inside the module.

mod crypto;
mod handler;
mod request;
mod response;

pub use crypto::{CryptoError, PayloadCipher};
pub use handler::{ApiConfig, ApiError, ColorApi};
pub use request::{ColorRequest, Operation};
pub use response::{
    ColorResponse, HarmonySet, OperationOutput, PaletteAnalysis, TemperatureEntry,
};
