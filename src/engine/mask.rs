//! Rasterisation of region outlines into the photograph's pixel grid.
//!
//! All overlays share one coordinate space that exactly matches the base
//! photograph's native pixel dimensions, so tints stay aligned however the
//! rendered image is later scaled for display. Filling uses the nonzero
//! winding rule over pixel centres.

use ndarray::Array2;

use super::outline::RegionOutline;

/// A rasterised region: per-pixel coverage at the photo's native size.
#[derive(Debug, Clone)]
pub struct RegionMask {
    coverage: Array2<u8>,
}

impl RegionMask {
    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.coverage.ncols() as u32
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.coverage.nrows() as u32
    }

    /// Whether the pixel at (x, y) belongs to the region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.coverage
            .get((y as usize, x as usize))
            .is_some_and(|&v| v != 0)
    }

    /// Number of covered pixels.
    pub fn covered_pixels(&self) -> usize {
        self.coverage.iter().filter(|&&v| v != 0).count()
    }

    /// Whether the mask covers nothing at all.
    pub fn is_empty(&self) -> bool {
        self.coverage.iter().all(|&v| v == 0)
    }
}

/// Rasterise an outline into a `width` x `height` pixel grid, scaling from
/// the outline's viewBox.
pub fn rasterize_outline(outline: &RegionOutline, width: u32, height: u32) -> RegionMask {
    let vb = outline.view_box;
    let scale_x = width as f64 / vb.width;
    let scale_y = height as f64 / vb.height;

    // Directed edges in pixel space; horizontal edges never cross a scanline
    let mut edges: Vec<[f64; 4]> = Vec::new();
    for subpath in &outline.subpaths {
        if subpath.len() < 2 {
            continue;
        }
        let points: Vec<(f64, f64)> = subpath
            .iter()
            .map(|&(x, y)| ((x - vb.min_x) * scale_x, (y - vb.min_y) * scale_y))
            .collect();
        for i in 0..points.len() {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % points.len()];
            if y0 != y1 {
                edges.push([x0, y0, x1, y1]);
            }
        }
    }

    let mut coverage = Array2::<u8>::zeros((height as usize, width as usize));
    if edges.is_empty() {
        return RegionMask { coverage };
    }

    let columns = width as usize;
    for row in 0..height as usize {
        let yc = row as f64 + 0.5;

        let mut crossings: Vec<(f64, i32)> = Vec::new();
        for &[x0, y0, x1, y1] in &edges {
            let direction = if y0 <= yc && y1 > yc {
                1
            } else if y1 <= yc && y0 > yc {
                -1
            } else {
                continue;
            };
            let t = (yc - y0) / (y1 - y0);
            crossings.push((x0 + t * (x1 - x0), direction));
        }
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut winding = 0;
        let mut span_start = 0.0;
        for (x, direction) in crossings {
            if winding == 0 {
                span_start = x;
            }
            winding += direction;
            if winding == 0 {
                fill_span(&mut coverage, row, span_start, x, columns);
            }
        }
    }

    RegionMask { coverage }
}

/// Mark the pixels of one row whose centres fall inside `[x_start, x_end)`.
fn fill_span(coverage: &mut Array2<u8>, row: usize, x_start: f64, x_end: f64, columns: usize) {
    let first = (x_start - 0.5).ceil().max(0.0) as usize;
    let last = (x_end - 0.5).ceil() - 1.0;
    if last < 0.0 || first >= columns {
        return;
    }
    let last = (last as usize).min(columns - 1);
    for col in first..=last {
        coverage[[row, col]] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outline::parse_outline;

    fn rect_outline(doc_rect: &str, view_box: &str) -> RegionOutline {
        let doc = format!(r#"<svg viewBox="{}"><path d="{}"/></svg>"#, view_box, doc_rect);
        parse_outline("wall", &doc).unwrap()
    }

    #[test]
    fn test_rectangle_coverage() {
        let outline = rect_outline("M 10 10 L 30 10 L 30 20 L 10 20 Z", "0 0 100 100");
        let mask = rasterize_outline(&outline, 100, 100);

        assert!(mask.contains(20, 15));
        assert!(mask.contains(10, 10));
        assert!(!mask.contains(30, 15));
        assert!(!mask.contains(5, 15));
        assert!(!mask.contains(20, 25));
        assert_eq!(mask.covered_pixels(), 20 * 10);
    }

    #[test]
    fn test_viewbox_scaling_doubles_pixels() {
        // Same geometry, half-size viewBox: the mask grows with the photo
        let outline = rect_outline("M 10 10 L 30 10 L 30 20 L 10 20 Z", "0 0 50 50");
        let mask = rasterize_outline(&outline, 100, 100);
        assert_eq!(mask.covered_pixels(), 40 * 20);
        assert!(mask.contains(40, 30));
    }

    #[test]
    fn test_triangle_is_half_of_bounding_box() {
        let outline = rect_outline("M 0 0 L 100 0 L 0 100 Z", "0 0 100 100");
        let mask = rasterize_outline(&outline, 100, 100);
        let covered = mask.covered_pixels() as f64;
        assert!((covered - 5000.0).abs() < 150.0, "covered {}", covered);
    }

    #[test]
    fn test_geometry_outside_grid_is_clipped() {
        let outline = rect_outline("M -50 -50 L 20 -50 L 20 20 L -50 20 Z", "0 0 100 100");
        let mask = rasterize_outline(&outline, 100, 100);
        assert_eq!(mask.covered_pixels(), 20 * 20);
        assert!(mask.contains(0, 0));
        assert!(!mask.contains(20, 20));
    }

    #[test]
    fn test_unclosed_subpath_fills_like_closed() {
        let open = rect_outline("M 10 10 L 30 10 L 30 20 L 10 20", "0 0 100 100");
        let mask = rasterize_outline(&open, 100, 100);
        assert_eq!(mask.covered_pixels(), 20 * 10);
    }
}
