//! Global constants for the roomtint engine

/// Width of the outline authoring coordinate space, used when an outline
/// document carries no viewBox of its own
pub const REFERENCE_VIEWBOX_WIDTH: f64 = 1280.0;

/// Height of the outline authoring coordinate space
pub const REFERENCE_VIEWBOX_HEIGHT: f64 = 720.0;

/// Opacity of the tint layer composited over the base photograph
pub const TINT_OPACITY: f64 = 0.7;

/// Number of line segments each curve command is flattened into
pub const CURVE_SEGMENTS: usize = 16;

/// Maximum number of swatches a shopper can shortlist at once
pub const MAX_SELECTED_SWATCHES: usize = 12;

/// Maximum number of colours held in the working palette
pub const MAX_PALETTE_COLORS: usize = 6;
