//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, settings resolution
//! and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;
mod settings;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, list_palettes, render, run_convert, write_default_config};
pub use enums::{CharacterSet, Filter};
pub use error::CliError;
pub use settings::{ConvertSettings, SizeMode};
