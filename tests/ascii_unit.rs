//! Unit tests for the ASCII sampler.
//!
//! These tests cover the sampling contract end to end on hand-built rasters:
//! - Output shape and formatting
//! - Boundary and mid-range luminance mapping
//! - Degenerate and empty palettes
//! - Purity and monotonicity

use pixel_ascii::ascii::*;
use pixel_ascii::SampleError;

fn make_raster(width: u32, height: u32, rgb: &[(u8, u8, u8)]) -> Raster {
    let data = rgb.iter().flat_map(|&(r, g, b)| [r, g, b, 255]).collect();
    Raster::new(width, height, data).unwrap()
}

fn gray_raster(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Raster {
    let mut rgb = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = f(x, y);
            rgb.push((v, v, v));
        }
    }
    make_raster(width, height, &rgb)
}

// ==================== Concrete Scenarios ====================

#[test]
fn test_black_white_pair_classic_palette() {
    let raster = make_raster(2, 1, &[(0, 0, 0), (255, 255, 255)]);
    let grid = sample(&raster, &Palette::new(" .-=+#@").unwrap()).unwrap();
    assert_eq!(grid.to_string(), "  @ \n");
    assert_eq!(grid.char_at(0, 0), Some(' '));
    assert_eq!(grid.char_at(1, 0), Some('@'));
}

#[test]
fn test_mid_gray_maps_to_middle_bucket() {
    // 128 / (256 / 6) = 3.0 -> '='
    let raster = make_raster(1, 1, &[(128, 128, 128)]);
    let grid = sample(&raster, &Palette::new(" .-=+#@").unwrap()).unwrap();
    assert_eq!(grid.to_string(), "= \n");
}

#[test]
fn test_colored_pixel_uses_plain_average() {
    // (255 + 0 + 0) / 3 = 85, 85 / 42.67 = 1.99 -> index 2
    let raster = make_raster(1, 1, &[(255, 0, 0)]);
    let grid = sample(&raster, &Palette::default()).unwrap();
    assert_eq!(grid.char_at(0, 0), Some('-'));
}

// ==================== Shape ====================

#[test]
fn test_output_shape() {
    for (w, h) in [(1, 1), (3, 1), (1, 4), (7, 5), (32, 9)] {
        let raster = gray_raster(w, h, |x, y| ((x * 31 + y * 17) % 256) as u8);
        let text = sample(&raster, &Palette::default()).unwrap().to_string();

        assert!(text.ends_with('\n'));
        let rows: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(rows.len(), h as usize, "{}x{}", w, h);
        for row in rows {
            let chars: Vec<char> = row.chars().collect();
            assert_eq!(chars.len(), 2 * w as usize);
            assert!(chars.iter().skip(1).step_by(2).all(|&c| c == ' '));
        }
    }
}

#[test]
fn test_multibyte_palette_shape() {
    let raster = gray_raster(4, 2, |x, _| (x * 85) as u8);
    let grid = sample(&raster, &Palette::new(BLOCKS_PALETTE).unwrap()).unwrap();
    assert_eq!(grid.to_string(), "  ░ ▓ █ \n  ░ ▓ █ \n");
}

// ==================== Boundaries ====================

#[test]
fn test_black_is_first_white_is_last() {
    for gradient in [
        " @",
        " .:",
        CLASSIC_PALETTE,
        STANDARD_PALETTE,
        MINIMAL_PALETTE,
        BLOCKS_PALETTE,
    ] {
        let palette = Palette::new(gradient).unwrap();
        let chars: Vec<char> = gradient.chars().collect();
        let raster = make_raster(2, 1, &[(0, 0, 0), (255, 255, 255)]);
        let grid = sample(&raster, &palette).unwrap();
        assert_eq!(grid.char_at(0, 0), Some(chars[0]), "palette {:?}", gradient);
        assert_eq!(grid.char_at(1, 0), chars.last().copied(), "palette {:?}", gradient);
    }
}

#[test]
fn test_long_palette_never_overflows() {
    // With more than 129 levels the top bucket is out of reach:
    // 255 / (256 / 255) = 254.004 -> index 254 of 0..=255.
    let gradient: String = (0..256u32).map(|i| char::from_u32(0x2800 + i).unwrap()).collect();
    let palette = Palette::new(&gradient).unwrap();
    let raster = gray_raster(256, 1, |x, _| x as u8);
    let grid = sample(&raster, &palette).unwrap();
    assert_eq!(grid.cells().len(), 256);
    assert_eq!(grid.char_at(255, 0), gradient.chars().nth(254));
}

// ==================== Degenerate Palettes ====================

#[test]
fn test_single_char_palette_maps_everything() {
    let raster = gray_raster(16, 16, |x, y| (x * 16 + y) as u8);
    let grid = sample_str(&raster, "#").unwrap();
    assert!(grid.cells().iter().all(|&c| c == '#'));
}

#[test]
fn test_empty_palette_is_rejected() {
    let raster = gray_raster(2, 2, |_, _| 10);
    assert!(matches!(sample_str(&raster, ""), Err(SampleError::InvalidPalette)));
    assert!(matches!(Palette::new(""), Err(SampleError::InvalidPalette)));
}

#[test]
fn test_zero_sized_raster_is_rejected() {
    assert!(matches!(
        Raster::new(0, 5, Vec::new()),
        Err(SampleError::InvalidRaster { .. })
    ));
    assert!(matches!(
        Raster::new(5, 0, Vec::new()),
        Err(SampleError::InvalidRaster { .. })
    ));
}

// ==================== Properties ====================

#[test]
fn test_sample_is_pure() {
    let raster = gray_raster(20, 10, |x, y| ((x * y) % 256) as u8);
    let palette = Palette::new(STANDARD_PALETTE).unwrap();
    let a = sample(&raster, &palette).unwrap();
    let b = sample(&raster, &palette).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_increasing_gray_is_monotonic() {
    let gradient = STANDARD_PALETTE;
    let palette = Palette::new(gradient).unwrap();
    let raster = gray_raster(256, 1, |x, _| x as u8);
    let grid = sample(&raster, &palette).unwrap();

    let index_of = |c: char| gradient.chars().position(|p| p == c).unwrap();
    let indices: Vec<usize> = grid.row(0).unwrap().iter().map(|&c| index_of(c)).collect();
    assert!(indices.windows(2).all(|w| w[0] <= w[1]), "{:?}", indices);
}

#[test]
fn test_grayscale_rounding_matches_sampler() {
    let raster = make_raster(3, 1, &[(1, 1, 0), (10, 20, 31), (200, 100, 0)]);
    assert_eq!(to_grayscale(&raster), vec![1, 20, 100]);
    let mapped = map_to_chars(&to_grayscale(&raster), &Palette::default());
    let grid = sample(&raster, &Palette::default()).unwrap();
    assert_eq!(grid.cells(), mapped.as_slice());
}
