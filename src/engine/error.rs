//! Error types for scene and outline operations.

use thiserror::Error;

/// Errors that can occur while loading scenes and region outlines.
///
/// Inside the scene loader these are absorbed per region (the region simply
/// never becomes tintable); they only surface to callers from the direct
/// parsing and bundle APIs.
#[derive(Error, Debug)]
pub enum EngineError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing error in an outline document
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Image decoding or encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Outline document contains no path element
    #[error("outline document has no path element")]
    MissingPath,

    /// Path data could not be parsed
    #[error("invalid path data: {message}")]
    InvalidPathData {
        /// Description of the parse failure
        message: String,
    },

    /// The viewBox attribute is malformed
    #[error("invalid viewBox: {value}")]
    InvalidViewBox {
        /// The offending attribute value
        value: String,
    },

    /// An outline document could not be retrieved
    #[error("outline unavailable: {0}")]
    Unavailable(String),

    /// A scene bundle contains no base photograph
    #[error("scene bundle has no base photograph")]
    MissingPhoto,
}

impl EngineError {
    /// Create an invalid path data error with a message.
    pub fn invalid_path_data(message: impl Into<String>) -> Self {
        Self::InvalidPathData {
            message: message.into(),
        }
    }
}
