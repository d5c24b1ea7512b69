//! Image decoding and resampling to the sampler's raster.
//!
//! Decoding is delegated to the `image` crate. The decoded image is stretched
//! to exactly the requested width and height (aspect ratio is not preserved,
//! use [`crate::ascii::fit_to_width`] for that) and copied once into a
//! [`Raster`].
//!
//! Resampling happens on premultiplied alpha, so fully transparent pixels read
//! back as `(0, 0, 0, 0)` and their stored colour never bleeds into opaque
//! neighbours.

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;
use serde::Deserialize;

use crate::ascii::{sample, Dimensions, Palette, Raster, SampleGrid};
use crate::error::SampleError;

/// Resampling filter used when scaling the image to the output grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear. Closest to how browsers scale images onto a canvas.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn name(&self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Decode an image from memory, guessing the format from its header.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, SampleError> {
    let image = image::load_from_memory(bytes)?;
    log::debug!(
        "Decoded {} bytes into {}x{} image",
        bytes.len(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Read and decode an image file.
pub fn decode_file(path: &Path) -> Result<DynamicImage, SampleError> {
    let bytes = std::fs::read(path).map_err(|e| SampleError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode_bytes(&bytes)
}

/// Resample `image` to `dims` and copy its pixels into a raster.
///
/// Transparent pixels come out black with zero alpha.
pub fn rasterize(
    image: &DynamicImage,
    dims: Dimensions,
    filter: ResizeFilter,
) -> Result<Raster, SampleError> {
    let mut rgba = image.to_rgba8();
    premultiply_rgba8_in_place(&mut rgba);
    let mut scaled = if rgba.dimensions() == (dims.width, dims.height) {
        rgba
    } else {
        image::imageops::resize(&rgba, dims.width, dims.height, filter.into())
    };
    unpremultiply_rgba8_in_place(&mut scaled);
    Raster::from_rgba_image(scaled)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Resample `image` to `dims` and sample it with `palette`.
pub fn convert(
    image: &DynamicImage,
    dims: Dimensions,
    palette: &Palette,
    filter: ResizeFilter,
) -> Result<SampleGrid, SampleError> {
    log::debug!(
        "Converting {}x{} image to {}x{} grid ({} filter, palette {:?})",
        image.width(),
        image.height(),
        dims.width,
        dims.height,
        filter.name(),
        palette.to_string()
    );
    let raster = rasterize(image, dims, filter)?;
    sample(&raster, palette)
}
