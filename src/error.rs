//! Error types for sampling and conversion.

use std::path::PathBuf;

/// Errors that can occur while turning an image into ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// The palette contains no characters.
    #[error("Palette must contain at least one character")]
    InvalidPalette,

    /// The raster has a zero dimension or its pixel data is missing.
    #[error("Invalid raster {width}x{height}: {reason}")]
    InvalidRaster {
        width: u32,
        height: u32,
        reason: String,
    },

    /// The character aspect ratio is zero, negative or not a number.
    #[error("Character aspect ratio must be a positive number, got {0}")]
    InvalidAspect(f32),

    /// The image bytes could not be decoded.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Reading the image or writing the output failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SampleError {
    /// Build an `InvalidRaster` error with a short reason.
    pub fn invalid_raster(width: u32, height: u32, reason: impl Into<String>) -> Self {
        SampleError::InvalidRaster {
            width,
            height,
            reason: reason.into(),
        }
    }
}
