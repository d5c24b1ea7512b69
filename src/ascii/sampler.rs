//! Raster to ASCII grid sampling.

use std::fmt;

use super::grayscale::to_grayscale;
use super::mapping::map_to_chars;
use super::palette::Palette;
use super::raster::{Raster, BYTES_PER_PIXEL};
use crate::error::SampleError;

/// Separator written after every character in a row.
pub const CELL_SEPARATOR: char = ' ';

/// The sampled character grid.
///
/// Rendered via [`fmt::Display`]: every character is followed by a single
/// space and every row, the last one included, ends in `'\n'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl SampleGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All characters, row-major.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Characters of row `y`, or `None` if out of range.
    pub fn row(&self, y: u32) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Character at `(x, y)`, or `None` if out of range.
    pub fn char_at(&self, x: u32, y: u32) -> Option<char> {
        self.row(y).and_then(|row| row.get(x as usize).copied())
    }

    /// Render to the final text blob.
    pub fn render(&self) -> String {
        // Each cell is the char plus a separator, each row adds a newline.
        let mut out = String::with_capacity(self.cells.len() * 2 + self.height as usize);
        for row in self.rows() {
            for &c in row {
                out.push(c);
                out.push(CELL_SEPARATOR);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for SampleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Map every pixel of `raster` to a palette character.
///
/// Rows are visited top to bottom and columns left to right. Each pixel's
/// channel average is rounded, bucketed and clamped (see [`crate::ascii::bucket_index`]).
/// A single-character palette maps every pixel to that character.
///
/// Pure: the same raster and palette always give the same grid.
pub fn sample(raster: &Raster, palette: &Palette) -> Result<SampleGrid, SampleError> {
    let (width, height) = (raster.width(), raster.height());
    if width == 0 || height == 0 {
        return Err(SampleError::invalid_raster(
            width,
            height,
            "width and height must be positive",
        ));
    }
    if raster.data().len() < raster.pixel_count() * BYTES_PER_PIXEL {
        return Err(SampleError::invalid_raster(width, height, "pixel data unavailable"));
    }

    let levels = palette.len();
    if levels == 0 {
        return Err(SampleError::InvalidPalette);
    }

    let gray = to_grayscale(raster);
    let cells = map_to_chars(&gray, palette);

    log::debug!(
        "Sampled {}x{} raster with {}-level palette",
        width,
        height,
        levels
    );

    Ok(SampleGrid {
        width,
        height,
        cells,
    })
}

/// Same as [`sample`], taking the palette as a gradient string.
///
/// Fails with [`SampleError::InvalidPalette`] for an empty string.
pub fn sample_str(raster: &Raster, gradient: &str) -> Result<SampleGrid, SampleError> {
    let palette = Palette::new(gradient)?;
    sample(raster, &palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> [u8; 4] {
        [v, v, v, 255]
    }

    fn raster_from(width: u32, height: u32, pixels: &[[u8; 4]]) -> Raster {
        Raster::new(width, height, pixels.concat()).unwrap()
    }

    #[test]
    fn test_black_and_white_row() {
        let raster = raster_from(2, 1, &[gray(0), gray(255)]);
        let grid = sample(&raster, &Palette::default()).unwrap();
        assert_eq!(grid.render(), "  @ \n");
    }

    #[test]
    fn test_mid_gray() {
        let raster = raster_from(1, 1, &[gray(128)]);
        let grid = sample(&raster, &Palette::default()).unwrap();
        assert_eq!(grid.render(), "= \n");
    }

    #[test]
    fn test_trailing_newline_on_last_row() {
        let raster = raster_from(1, 2, &[gray(0), gray(255)]);
        let grid = sample(&raster, &Palette::default()).unwrap();
        assert_eq!(grid.to_string(), "  \n@ \n");
    }

    #[test]
    fn test_empty_gradient_fails() {
        let raster = raster_from(1, 1, &[gray(0)]);
        assert!(matches!(sample_str(&raster, ""), Err(SampleError::InvalidPalette)));
    }

    #[test]
    fn test_single_char_palette() {
        let raster = raster_from(3, 1, &[gray(0), gray(128), gray(255)]);
        let grid = sample_str(&raster, "X").unwrap();
        assert_eq!(grid.render(), "X X X \n");
    }

    #[test]
    fn test_grid_accessors() {
        let raster = raster_from(2, 2, &[gray(0), gray(255), gray(255), gray(0)]);
        let grid = sample_str(&raster, "01").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.row(0), Some(&['0', '1'][..]));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.char_at(0, 1), Some('1'));
        assert_eq!(grid.char_at(2, 0), None);
        assert_eq!(grid.rows().count(), 2);
    }
}
