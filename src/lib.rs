//! Roomtint - paint colour visualisation and colour-science engine
//!
//! Composites catalogue paint colours onto pre-masked regions of room
//! photographs, computes derived colour relationships (harmonies,
//! temperature, mood, contrast), and classifies brand colour catalogues
//! into hue-based shade categories.

pub mod api;
pub mod catalog;
pub mod color;
pub mod constants;
pub mod engine;
pub mod model;

pub use engine::SceneView;
pub use model::{ColorSwatch, ShadeCatalog};
