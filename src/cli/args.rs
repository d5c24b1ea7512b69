//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Filter};

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "pixel-ascii")]
#[command(version, about = "Convert an image to ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    pixel-ascii photo.png                     # 300x200 with the classic palette
    pixel-ascii photo.png -W 80 -H 40 -o out.txt
    pixel-ascii photo.png --fit 100 --charset blocks
    pixel-ascii photo.png --palette ' .:oO@'
    cat photo.png | pixel-ascii -             # read the image from stdin")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to convert ('-' reads stdin)
    pub image: Option<PathBuf>,

    /// Output width in characters
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Output height in characters
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Use the image's own pixel size as the output size
    #[arg(long, conflicts_with_all = ["width", "height", "fit"])]
    pub auto_size: bool,

    /// Fit to this many columns, deriving the height from the aspect ratio
    #[arg(long, value_name = "COLUMNS", conflicts_with_all = ["width", "height"])]
    pub fit: Option<u32>,

    /// Character aspect ratio (height/width) used by --fit
    #[arg(long, requires = "fit")]
    pub char_aspect: Option<f32>,

    /// Gradient string, darkest character first
    #[arg(short, long, allow_hyphen_values = true)]
    pub palette: Option<String>,

    /// Palette preset (ignored when --palette is given)
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Resampling filter used to scale the image
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List palette presets
    Palettes,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
