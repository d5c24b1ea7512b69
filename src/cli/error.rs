//! CLI error types

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::error::SampleError;

/// Error type for command handlers
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Loading or validating the config file failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Decoding or sampling failed
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// No image path was given
    #[error("No image given. Run 'pixel-ascii --help' for usage.")]
    MissingImage,

    /// Reading the image from stdin failed
    #[error("Failed to read image from stdin: {0}")]
    Stdin(std::io::Error),

    /// Writing the output failed
    #[error("Failed to write output to '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `config init` refuses to overwrite
    #[error("Config file already exists: {}\nUse 'pixel-ascii config show' to view current settings.", path.display())]
    ConfigExists { path: PathBuf },
}
