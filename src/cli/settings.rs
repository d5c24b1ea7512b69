//! Effective conversion settings: CLI args > config file > built-in defaults.

use std::path::PathBuf;

use image::DynamicImage;

use super::args::Args;
use super::error::CliError;
use crate::ascii::{
    self, fit_to_width, Dimensions, Palette, DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
use crate::config::Config;
use crate::decode::ResizeFilter;

/// How the output grid size is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeMode {
    /// Explicit width and height
    Fixed(Dimensions),
    /// The image's own pixel size
    Natural,
    /// A column count, rows derived from the image aspect ratio
    Fit { columns: u32, char_aspect: f32 },
}

impl SizeMode {
    /// Resolve to concrete dimensions for a decoded image.
    pub fn dimensions(&self, image: &DynamicImage) -> Result<Dimensions, CliError> {
        let dims = match *self {
            SizeMode::Fixed(dims) => dims,
            SizeMode::Natural => Dimensions::natural(image)?,
            SizeMode::Fit {
                columns,
                char_aspect,
            } => fit_to_width(image.width(), image.height(), columns, char_aspect)?,
        };
        Ok(dims)
    }
}

/// Everything needed to run one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub image: PathBuf,
    pub size: SizeMode,
    pub palette: Palette,
    pub filter: ResizeFilter,
    pub output: Option<PathBuf>,
}

impl ConvertSettings {
    /// Merge CLI arguments over the config file.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, CliError> {
        let image = args.image.clone().ok_or(CliError::MissingImage)?;
        let cfg = &config.ascii;

        // Palette: --palette > --charset > config > classic
        let palette = if let Some(gradient) = &args.palette {
            Palette::new(gradient)?
        } else if let Some(charset) = args.charset {
            ascii::CharSet::from(charset).palette()
        } else {
            cfg.palette()?.unwrap_or_default()
        };

        let filter = args
            .filter
            .map(ResizeFilter::from)
            .or(cfg.filter)
            .unwrap_or_default();

        let size = if args.auto_size {
            SizeMode::Natural
        } else if let Some(columns) = args.fit {
            SizeMode::Fit {
                columns,
                char_aspect: args
                    .char_aspect
                    .or(cfg.char_aspect)
                    .unwrap_or(DEFAULT_CHAR_ASPECT_RATIO),
            }
        } else {
            let width = args.width.or(cfg.width).unwrap_or(DEFAULT_WIDTH);
            let height = args.height.or(cfg.height).unwrap_or(DEFAULT_HEIGHT);
            SizeMode::Fixed(Dimensions::new(width, height)?)
        };

        Ok(Self {
            image,
            size,
            palette,
            filter,
            output: args.output.clone(),
        })
    }
}
