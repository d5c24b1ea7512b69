//! ASCII sampler: converts a raster to a character grid.
//!
//! The pipeline per pixel is:
//!
//! 1. **Grayscale** - unweighted `(R + G + B) / 3`, rounded
//! 2. **Bucketing** - linear quantization into `palette.len()` buckets
//! 3. **Character mapping** - bucket index to palette character
//!
//! # Palettes
//!
//! Any non-empty string works as a palette. Named presets are available via
//! [`CharSet`]:
//! - `Classic` - 7-level `" .-=+#@"` (default)
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod dimensions;
mod grayscale;
mod mapping;
mod palette;
mod raster;
mod sampler;

pub use dimensions::{
    fit_to_width, Dimensions, DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use grayscale::{average_luminance, rounded_luminance, to_grayscale};
pub use mapping::{bucket_index, bucket_width, map_to_chars};
pub use palette::{
    CharSet, Palette, BLOCKS_PALETTE, CLASSIC_PALETTE, MINIMAL_PALETTE, STANDARD_PALETTE,
};
pub use raster::{Raster, BYTES_PER_PIXEL};
pub use sampler::{sample, sample_str, SampleGrid, CELL_SEPARATOR};
