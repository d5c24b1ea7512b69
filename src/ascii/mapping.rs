//! Brightness to character mapping.
//!
//! The 0-255 luminance range is split linearly into `levels` buckets:
//!
//! ```text
//! bucket_width = 256 / (levels - 1)
//! index        = round(gray / bucket_width), clamped to [0, levels - 1]
//! ```
//!
//! The rounding and clamping order is fixed so output matches other
//! implementations character for character.

use super::palette::Palette;

/// Width of one luminance bucket, or `None` for palettes with a single level.
///
/// A single level would divide by zero; callers treat `None` as "always index 0".
#[inline]
pub fn bucket_width(levels: usize) -> Option<f64> {
    if levels <= 1 {
        return None;
    }
    Some(256.0 / (levels - 1) as f64)
}

/// Map a rounded grayscale value to a palette index in `[0, levels - 1]`.
///
/// Returns 0 when `levels <= 1`.
#[inline]
pub fn bucket_index(gray: u8, levels: usize) -> usize {
    let Some(width) = bucket_width(levels) else {
        return 0;
    };
    let idx = (gray as f64 / width).round();
    // gray / width is never negative, so only the top needs clamping.
    (idx as usize).min(levels - 1)
}

/// Map rounded grayscale values to palette characters.
///
/// # Returns
/// A vector of characters, one per input value.
pub fn map_to_chars(gray: &[u8], palette: &Palette) -> Vec<char> {
    let chars = palette.chars();
    let levels = chars.len();
    gray.iter().map(|&g| chars[bucket_index(g, levels)]).collect()
}
