//! Retrieval of region outline documents.
//!
//! Outline documents are addressed by scene and region name. The trait is
//! the seam between the engine and whatever actually serves the assets:
//! a directory tree, an in-memory bundle, or a remote store. Fetches run on
//! worker threads, so sources must be shareable.

use std::collections::HashMap;
use std::path::PathBuf;

use super::error::EngineError;

/// A source of region outline documents.
pub trait OutlineSource: Send + Sync {
    /// Retrieve the outline document for one region of one scene.
    fn fetch(&self, scene: &str, region: &str) -> Result<String, EngineError>;
}

/// Outline source backed by a directory tree: `<root>/<scene>/<region>.svg`.
#[derive(Debug, Clone)]
pub struct FsOutlineSource {
    root: PathBuf,
}

impl FsOutlineSource {
    /// Create a source rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, scene: &str, region: &str) -> PathBuf {
        self.root.join(scene).join(format!("{}.svg", region))
    }
}

impl OutlineSource for FsOutlineSource {
    fn fetch(&self, scene: &str, region: &str) -> Result<String, EngineError> {
        let path = self.document_path(scene, region);
        log::debug!("Fetching outline {:?}", path);
        Ok(std::fs::read_to_string(path)?)
    }
}

/// In-memory outline source, used by scene bundles and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticOutlineSource {
    documents: HashMap<(String, String), String>,
}

impl StaticOutlineSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document for a (scene, region) pair.
    pub fn insert(&mut self, scene: &str, region: &str, document: &str) {
        self.documents
            .insert((scene.to_string(), region.to_string()), document.to_string());
    }
}

impl OutlineSource for StaticOutlineSource {
    fn fetch(&self, scene: &str, region: &str) -> Result<String, EngineError> {
        self.documents
            .get(&(scene.to_string(), region.to_string()))
            .cloned()
            .ok_or_else(|| EngineError::Unavailable(format!("{}/{}", scene, region)))
    }
}
