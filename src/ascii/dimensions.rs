//! Output grid dimensions.

use crate::error::SampleError;

/// Default output width in samples.
pub const DEFAULT_WIDTH: u32 = 300;

/// Default output height in samples.
pub const DEFAULT_HEIGHT: u32 = 200;

/// Default character aspect ratio for sampled output.
///
/// Terminal characters are roughly twice as tall as wide, but every sample is
/// written as a character plus a space, so one sample covers a square-ish
/// area. 1.0 keeps the image's own proportions.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 1.0;

/// Width and height of the resampled raster and of the output grid.
///
/// Both values are at least 1. There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Validate and build dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, SampleError> {
        if width == 0 || height == 0 {
            return Err(SampleError::invalid_raster(
                width,
                height,
                "width and height must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// The image's own pixel size (auto-size).
    pub fn natural(image: &image::DynamicImage) -> Result<Self, SampleError> {
        Self::new(image.width(), image.height())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Calculate the row count that preserves the image aspect ratio for a given
/// column count.
///
/// Characters are `char_aspect` times taller than wide, so fewer rows than a
/// pixel-exact mapping are needed:
///
/// ```text
/// rows = columns * (img_height / img_width) / char_aspect
/// ```
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `columns` - Desired output width in samples
/// * `char_aspect` - Character aspect ratio (height/width)
///
/// # Returns
/// Dimensions with `width == columns` and at least one row.
pub fn fit_to_width(
    img_width: u32,
    img_height: u32,
    columns: u32,
    char_aspect: f32,
) -> Result<Dimensions, SampleError> {
    if img_width == 0 || img_height == 0 {
        return Err(SampleError::invalid_raster(
            img_width,
            img_height,
            "source image has no pixels",
        ));
    }
    if !(char_aspect.is_finite() && char_aspect > 0.0) {
        return Err(SampleError::InvalidAspect(char_aspect));
    }

    let img_aspect = img_height as f64 / img_width as f64;
    let rows = (columns as f64 * img_aspect / char_aspect as f64).round() as u32;
    Dimensions::new(columns, rows.max(1))
}
