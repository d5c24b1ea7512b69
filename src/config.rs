//! Configuration file handling for pixel-ascii.
//!
//! Loads configuration from `<config_dir>/pixel-ascii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, Palette};
use crate::decode::ResizeFilter;

/// Configuration file structure for pixel-ascii.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ascii: AsciiConfig,
}

/// `[ascii]` section. Every field is optional; unset fields fall back to
/// built-in defaults.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct AsciiConfig {
    /// Custom gradient string, darkest first. Wins over `charset`.
    #[serde(default)]
    pub palette: Option<String>,
    /// Named preset: classic, standard, blocks, minimal
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub filter: Option<ResizeFilter>,
    #[serde(default)]
    pub char_aspect: Option<f32>,
}

impl AsciiConfig {
    /// Resolve the configured palette, if any.
    ///
    /// An unknown charset name is reported as an error rather than ignored.
    pub fn palette(&self) -> Result<Option<Palette>, ConfigError> {
        if let Some(gradient) = &self.palette {
            return Palette::new(gradient)
                .map(Some)
                .map_err(|_| ConfigError::Invalid("ascii.palette must not be empty".to_string()));
        }
        match &self.charset {
            Some(name) => CharSet::from_name(name)
                .map(|c| Some(c.palette()))
                .ok_or_else(|| ConfigError::Invalid(format!("unknown ascii.charset '{}'", name))),
            None => Ok(None),
        }
    }
}

/// Commented default file written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# pixel-ascii configuration

[ascii]
# Gradient string, darkest character first (wins over charset)
# palette = " .-=+#@"
# Named preset: classic, standard, blocks, minimal
charset = "classic"
# Output size in samples
width = 300
height = 200
# Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3
filter = "triangle"
# Character aspect ratio (height/width) used by --fit
char_aspect = 1.0
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("pixel-ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/pixel-ascii/config.toml")
        })
}
