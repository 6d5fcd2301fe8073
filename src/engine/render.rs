//! Multiplicative tint compositing.
//!
//! A flat opaque fill would erase the photograph's shading; multiplying the
//! tint into the underlying pixels keeps shadows and highlights visible
//! through the colour, which is what makes the preview believable. The tint
//! layer is applied at fixed opacity, so each tinted channel is
//! `base * (1 - a) + a * base * tint / 255`.

use image::RgbImage;

use crate::color::Rgb;
use crate::constants::TINT_OPACITY;

use super::mask::RegionMask;

/// Tint the masked pixels of a photograph in place.
pub fn apply_tint(photo: &mut RgbImage, mask: &RegionMask, tint: Rgb) {
    let alpha = TINT_OPACITY;
    let factors = [
        tint.r as f64 / 255.0,
        tint.g as f64 / 255.0,
        tint.b as f64 / 255.0,
    ];

    for (x, y, pixel) in photo.enumerate_pixels_mut() {
        if !mask.contains(x, y) {
            continue;
        }
        for (channel, factor) in pixel.0.iter_mut().zip(factors) {
            let base = *channel as f64;
            *channel = (base * (1.0 - alpha) + alpha * base * factor).round() as u8;
        }
    }
}

/// Composite a set of tinted region overlays over a base photograph.
///
/// Layers are applied in order; with non-overlapping outlines (the content
/// authoring contract) the order is not observable.
pub fn composite(base: &RgbImage, layers: &[(&RegionMask, Rgb)]) -> RgbImage {
    let mut output = base.clone();
    for (mask, tint) in layers {
        apply_tint(&mut output, mask, *tint);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mask::rasterize_outline;
    use crate::engine::outline::parse_outline;

    fn full_mask(size: u32) -> RegionMask {
        let doc = format!(
            r#"<svg viewBox="0 0 {s} {s}"><path d="M0 0 H{s} V{s} H0 Z"/></svg>"#,
            s = size
        );
        rasterize_outline(&parse_outline("all", &doc).unwrap(), size, size)
    }

    fn half_mask(size: u32) -> RegionMask {
        let doc = format!(
            r#"<svg viewBox="0 0 {s} {s}"><path d="M0 0 H{h} V{s} H0 Z"/></svg>"#,
            s = size,
            h = size / 2
        );
        rasterize_outline(&parse_outline("left", &doc).unwrap(), size, size)
    }

    #[test]
    fn test_white_tint_leaves_photo_unchanged() {
        let base = RgbImage::from_pixel(8, 8, image::Rgb([180, 120, 60]));
        let out = composite(&base, &[(&full_mask(8), Rgb::new(255, 255, 255))]);
        assert_eq!(out, base);
    }

    #[test]
    fn test_multiply_preserves_shading_ratio() {
        // A dark pixel and a bright pixel keep their ordering under tint
        let mut base = RgbImage::from_pixel(8, 8, image::Rgb([200, 200, 200]));
        base.put_pixel(0, 0, image::Rgb([60, 60, 60]));
        let out = composite(&base, &[(&full_mask(8), Rgb::new(220, 20, 60))]);

        let dark = out.get_pixel(0, 0).0;
        let bright = out.get_pixel(1, 1).0;
        assert!(dark[0] < bright[0]);
        // Red channel survives far better than green under a crimson tint
        assert!(bright[0] > bright[1]);
    }

    #[test]
    fn test_expected_blend_values() {
        let base = RgbImage::from_pixel(2, 2, image::Rgb([200, 100, 50]));
        let out = composite(&base, &[(&full_mask(2), Rgb::new(255, 0, 0))]);
        // channel * (0.3 + 0.7 * tint/255)
        assert_eq!(out.get_pixel(0, 0).0, [200, 30, 15]);
    }

    #[test]
    fn test_untinted_pixels_untouched() {
        let base = RgbImage::from_pixel(8, 8, image::Rgb([200, 200, 200]));
        let out = composite(&base, &[(&half_mask(8), Rgb::new(0, 0, 255))]);
        assert_ne!(out.get_pixel(0, 0), base.get_pixel(0, 0));
        assert_eq!(out.get_pixel(7, 0), base.get_pixel(7, 0));
    }
}
