//! RGB to grayscale conversion using a plain channel average.

use super::raster::{Raster, BYTES_PER_PIXEL};

/// Unweighted average of the red, green and blue channels.
///
/// This is intentionally not perceptual luma: every channel counts the same,
/// so pure red, green and blue all land on 85.
#[inline]
pub fn average_luminance(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

/// Average luminance rounded to the nearest integer, halves away from zero.
#[inline]
pub fn rounded_luminance(r: u8, g: u8, b: u8) -> u8 {
    // Max average is 255.0, so the cast cannot truncate.
    average_luminance(r, g, b).round() as u8
}

/// Convert a raster to rounded grayscale values, one per pixel in row-major order.
///
/// Alpha is ignored.
pub fn to_grayscale(raster: &Raster) -> Vec<u8> {
    raster
        .data()
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|rgba| rounded_luminance(rgba[0], rgba[1], rgba[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors_weigh_equally() {
        assert_eq!(rounded_luminance(255, 0, 0), 85);
        assert_eq!(rounded_luminance(0, 255, 0), 85);
        assert_eq!(rounded_luminance(0, 0, 255), 85);
    }

    #[test]
    fn test_thirds_round_to_nearest() {
        // A sum of three bytes divided by 3 always ends in .0, .333 or .667
        assert_eq!(rounded_luminance(1, 0, 0), 0);
        assert_eq!(rounded_luminance(1, 1, 0), 1);
        assert_eq!(rounded_luminance(255, 255, 0), 170);
        assert_eq!(rounded_luminance(100, 101, 101), 101);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(rounded_luminance(0, 0, 0), 0);
        assert_eq!(rounded_luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_alpha_ignored() {
        let opaque = Raster::new(1, 1, vec![90, 120, 150, 255]).unwrap();
        let clear = Raster::new(1, 1, vec![90, 120, 150, 0]).unwrap();
        assert_eq!(to_grayscale(&opaque), to_grayscale(&clear));
        assert_eq!(to_grayscale(&opaque), vec![120]);
    }
}
