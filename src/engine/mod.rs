//! Mask-based compositing engine.
//!
//! Renders a room photograph with user-selected paint colours tinted into
//! named regions, in real time as selections change and without touching
//! the source photograph asset. Region outlines are fetched concurrently
//! when a scene opens, rasterised into the photo's pixel grid, and
//! composited with a multiplicative blend so the photo's shading survives
//! the tint. A region whose outline cannot be fetched or parsed simply
//! never becomes tintable; the rest of the scene is unaffected.

mod bundle;
mod error;
mod fetch;
mod mask;
mod outline;
mod palette;
mod path;
mod render;
mod scene;

pub use bundle::SceneBundle;
pub use error::EngineError;
pub use fetch::{FsOutlineSource, OutlineSource, StaticOutlineSource};
pub use mask::{RegionMask, rasterize_outline};
pub use outline::{RegionOutline, ViewBox, parse_outline};
pub use palette::{Palette, SwatchSelection};
pub use path::flatten_path;
pub use render::{apply_tint, composite};
pub use scene::{RegionStatus, SceneView};
