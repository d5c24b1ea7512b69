//! Immutable RGBA pixel grid handed to the sampler.

use image::RgbaImage;

use crate::error::SampleError;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded, resampled image at a fixed width and height.
///
/// Pixel data is RGBA8, row-major. The buffer is read once into memory so the
/// sampler never goes back to the decoder per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Build a raster from raw RGBA8 bytes.
    ///
    /// Fails with [`SampleError::InvalidRaster`] when either dimension is zero
    /// or the buffer does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SampleError> {
        if width == 0 || height == 0 {
            return Err(SampleError::invalid_raster(
                width,
                height,
                "width and height must be positive",
            ));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| SampleError::invalid_raster(width, height, "pixel count overflows"))?;

        if data.len() != expected {
            return Err(SampleError::invalid_raster(
                width,
                height,
                format!("expected {} bytes of RGBA data, got {}", expected, data.len()),
            ));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of an already-decoded RGBA image.
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self, SampleError> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
