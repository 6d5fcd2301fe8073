//! ZIP scene bundles.
//!
//! A scene can be distributed as a single archive holding the base
//! photograph plus one `<region>.svg` outline per tintable region. This
//! module extracts such bundles and exposes their outlines through the
//! regular [`OutlineSource`] seam.

use std::io::{Read, Seek};
use std::path::Path;

use image::RgbImage;
use zip::ZipArchive;

use super::error::EngineError;
use super::fetch::StaticOutlineSource;

/// Supported photograph extensions inside a bundle.
const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

/// Check if an archive entry name looks like a photograph.
fn is_photo_entry(name: &str) -> bool {
    let lower = name.to_lowercase();
    PHOTO_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Check if an archive entry should be considered at all.
fn is_relevant_entry(name: &str) -> bool {
    let lower = name.to_lowercase();
    // Skip hidden files and macOS metadata
    if lower.contains("__macosx") || lower.contains("/.") || lower.starts_with('.') {
        return false;
    }
    is_photo_entry(&lower) || lower.ends_with(".svg")
}

/// Region name for an outline entry: the file stem of `walls/left-wall.svg`.
fn region_name(entry_name: &str) -> String {
    Path::new(entry_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(entry_name)
        .to_string()
}

/// One extracted scene: a base photograph and its outline documents.
#[derive(Debug, Clone)]
pub struct SceneBundle {
    /// Decoded base photograph
    pub photo: RgbImage,
    /// Archive entry name the photograph came from
    pub photo_name: String,
    /// (region name, outline document) pairs, sorted by entry name
    pub outlines: Vec<(String, String)>,
}

impl SceneBundle {
    /// Extract a scene bundle from a ZIP file on disk.
    pub fn from_zip_file(path: &Path) -> Result<Self, EngineError> {
        log::info!("Opening scene bundle {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_archive(file)
    }

    /// Extract a scene bundle from ZIP data in memory.
    pub fn from_zip_bytes(data: &[u8]) -> Result<Self, EngineError> {
        Self::from_archive(std::io::Cursor::new(data))
    }

    fn from_archive<R: Read + Seek>(reader: R) -> Result<Self, EngineError> {
        let mut archive = ZipArchive::new(reader)?;

        let mut photo: Option<(String, Vec<u8>)> = None;
        let mut outlines: Vec<(String, String)> = Vec::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();

            if entry.is_dir() || !is_relevant_entry(&name) {
                log::trace!("Skipping bundle entry: {}", name);
                continue;
            }

            if is_photo_entry(&name) {
                if photo.is_some() {
                    log::warn!("Bundle has more than one photograph; ignoring '{}'", name);
                    continue;
                }
                let mut data = Vec::with_capacity(entry.size() as usize);
                entry.read_to_end(&mut data)?;
                photo = Some((name, data));
            } else {
                let mut document = String::new();
                entry.read_to_string(&mut document)?;
                outlines.push((name, document));
            }
        }

        let (photo_name, photo_data) = photo.ok_or(EngineError::MissingPhoto)?;
        let photo = image::load_from_memory(&photo_data)?.to_rgb8();

        // Sort by entry name for consistent region ordering
        outlines.sort_by(|a, b| a.0.cmp(&b.0));
        let outlines: Vec<(String, String)> = outlines
            .into_iter()
            .map(|(name, document)| (region_name(&name), document))
            .collect();

        log::info!(
            "Extracted bundle: photo '{}' ({}x{}), {} outlines",
            photo_name,
            photo.width(),
            photo.height(),
            outlines.len()
        );

        Ok(Self {
            photo,
            photo_name,
            outlines,
        })
    }

    /// Names of the regions the bundle carries outlines for.
    pub fn region_names(&self) -> Vec<&str> {
        self.outlines.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Expose the bundle's outlines as a source for the given scene name.
    pub fn outline_source(&self, scene: &str) -> StaticOutlineSource {
        let mut source = StaticOutlineSource::new();
        for (region, document) in &self.outlines {
            source.insert(scene, region, document);
        }
        source
    }
}
