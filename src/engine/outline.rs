//! Region outline documents.
//!
//! Each tintable region of a scene ships as one SVG document containing a
//! single path. Parsing extracts the root `viewBox` (falling back to the
//! authoring space the original masks were drawn in) and the first path's
//! geometry, flattened into polygonal subpaths.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::constants::{REFERENCE_VIEWBOX_HEIGHT, REFERENCE_VIEWBOX_WIDTH};

use super::error::EngineError;
use super::path::{Point, flatten_path};

/// The coordinate space an outline was authored in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge of the authoring space
    pub min_x: f64,
    /// Top edge of the authoring space
    pub min_y: f64,
    /// Width of the authoring space
    pub width: f64,
    /// Height of the authoring space
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: REFERENCE_VIEWBOX_WIDTH,
            height: REFERENCE_VIEWBOX_HEIGHT,
        }
    }
}

impl ViewBox {
    /// Parse a `viewBox` attribute value ("min-x min-y width height").
    pub fn parse(value: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidViewBox {
            value: value.to_string(),
        };

        let parts: Vec<f64> = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;

        let [min_x, min_y, width, height] = parts[..] else {
            return Err(invalid());
        };
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid());
        }

        Ok(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }
}

/// One named region outline: flattened path geometry plus its authoring
/// coordinate space. Immutable reference data, cached for the lifetime of
/// the scene view it belongs to.
#[derive(Debug, Clone)]
pub struct RegionOutline {
    /// Region name (e.g. "left-wall")
    pub name: String,
    /// Flattened closed subpaths in viewBox coordinates
    pub subpaths: Vec<Vec<Point>>,
    /// The coordinate space the subpaths are expressed in
    pub view_box: ViewBox,
}

/// Parse an outline document into region geometry.
///
/// Only the first path element is used; a document with no path, or with
/// path data that does not parse, is an error. The scene loader treats
/// that region as absent rather than failing the scene.
pub fn parse_outline(name: &str, document: &str) -> Result<RegionOutline, EngineError> {
    let mut reader = Reader::from_str(document);
    let mut view_box = ViewBox::default();
    let mut path_data: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                match element.local_name().as_ref() {
                    b"svg" => {
                        for attr in element.attributes().flatten() {
                            if attr.key.local_name().as_ref() == b"viewBox" {
                                view_box = ViewBox::parse(&attr.unescape_value()?)?;
                            }
                        }
                    }
                    b"path" if path_data.is_none() => {
                        for attr in element.attributes().flatten() {
                            if attr.key.local_name().as_ref() == b"d" {
                                path_data = Some(attr.unescape_value()?.into_owned());
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let data = path_data.ok_or(EngineError::MissingPath)?;
    let subpaths = flatten_path(&data)?;
    if subpaths.is_empty() {
        return Err(EngineError::invalid_path_data(
            "path contains no drawable segments",
        ));
    }

    log::debug!(
        "Parsed outline '{}': {} subpaths in {}x{} space",
        name,
        subpaths.len(),
        view_box.width,
        view_box.height
    );

    Ok(RegionOutline {
        name: name.to_string(),
        subpaths,
        view_box,
    })
}
