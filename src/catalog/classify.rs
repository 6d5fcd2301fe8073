//! Hue-based shade category assignment.

use crate::color::{hex_to_rgb, rgb_to_hsl};

/// Pick the best-matching shade category for a colour that appeared in
/// several categories.
///
/// `appears_in` lists the categories the record was found under, in
/// document order. Membership checks run against that list, so a record is
/// never moved into a category it did not already occupy; when the
/// preferred category is not among them the first one wins, preserving the
/// source's ordering intent. The checks below are evaluated strictly in
/// order; several hue bands overlap and the order is the tie-break.
pub fn best_category<'a>(hex: &str, appears_in: &'a [String]) -> &'a str {
    let first = appears_in.first().map(String::as_str).unwrap_or("");
    let Some(rgb) = hex_to_rgb(hex) else {
        return first;
    };
    let hsl = rgb_to_hsl(rgb);
    let (h, s, l) = (hsl.h, hsl.s, hsl.l);
    let has = |name: &str| appears_in.iter().any(|c| c == name);

    // Whites/off-whites: high lightness or very low saturation
    if has("Whites") && (l >= 88.0 || s < 6.0) {
        return "Whites";
    }
    // Greys: neutral/desaturated
    if has("Greys") && s < 18.0 {
        return "Greys";
    }
    // Browns: warm tones (h 15-55) with lower lightness - tan, beige, brown
    if has("Browns") && (15.0..=55.0).contains(&h) && l < 82.0 {
        return "Browns";
    }
    // Greyish but no Greys category: keep in first (source order)
    if s < 12.0 {
        return first;
    }

    let preferred = if (48.0..=72.0).contains(&h) {
        "Yellows"
    } else if (25.0..=48.0).contains(&h) {
        "Oranges"
    } else if (85.0..=165.0).contains(&h) {
        "Greens"
    } else if (165.0..=250.0).contains(&h) {
        "Blues"
    } else if (210.0..=320.0).contains(&h) {
        "Purples"
    } else if has("Reds") && (h <= 25.0 || h >= 335.0) {
        "Reds"
    } else if (320.0..335.0).contains(&h) {
        "Pinks"
    } else {
        "Pinks"
    };

    if has(preferred) { preferred } else { first }
}
