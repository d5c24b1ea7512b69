//! pixel-ascii library crate.
//!
//! Converts raster images to ASCII art by averaging each pixel's channels and
//! mapping the result onto a gradient string. The binary in `main.rs` is a thin
//! wrapper around [`cli`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;

pub use ascii::{sample, Dimensions, Palette, Raster, SampleGrid};
pub use decode::{convert, decode_bytes, decode_file, rasterize, ResizeFilter};
pub use error::SampleError;
