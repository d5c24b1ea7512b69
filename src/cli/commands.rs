//! Subcommand handlers for conversion, palettes and config actions.

use std::io::{Read, Write};
use std::path::Path;

use super::args::ConfigAction;
use super::error::CliError;
use super::settings::ConvertSettings;
use crate::ascii::{CharSet, SampleGrid};
use crate::config::{default_path, Config, DEFAULT_CONFIG_TOML};
use crate::decode::{convert, decode_bytes, decode_file};

/// Decode the image, sample it and return the grid.
pub fn render(settings: &ConvertSettings) -> Result<SampleGrid, CliError> {
    let image = if settings.image == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(CliError::Stdin)?;
        decode_bytes(&bytes)?
    } else {
        decode_file(&settings.image)?
    };

    let dims = settings.size.dimensions(&image)?;
    let grid = convert(&image, dims, &settings.palette, settings.filter)?;
    Ok(grid)
}

/// Run a full conversion and write the result to the output file or stdout.
pub fn run_convert(settings: &ConvertSettings) -> Result<(), CliError> {
    let grid = render(settings)?;
    let text = grid.render();

    match &settings.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|e| CliError::Output {
                path: path.clone(),
                source: e,
            })?;
            log::info!(
                "Wrote {}x{} ASCII art to {}",
                grid.width(),
                grid.height(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())
                .and_then(|_| lock.flush())
                .map_err(|e| CliError::Output {
                    path: "<stdout>".into(),
                    source: e,
                })?;
        }
    }

    Ok(())
}

/// Print the palette presets to stdout.
pub fn list_palettes() {
    println!("Available palettes:");
    for charset in CharSet::ALL {
        println!(
            "  {:<10} {:>2} levels  \"{}\"",
            charset.name(),
            charset.palette().len(),
            charset.gradient()
        );
    }
    println!();
    println!("Use --charset <name> to pick one, or --palette <string> for your own.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), CliError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = match path {
                Some(explicit) => Config::load_from_explicit(explicit)?,
                None => Config::load(None)?,
            };
            let ascii = &config.ascii;
            let palette = ascii.palette()?.unwrap_or_default();

            println!("Current configuration:");
            println!("  Palette: \"{}\" ({} levels)", palette, palette.len());
            println!(
                "  Width: {}",
                ascii.width.unwrap_or(crate::ascii::DEFAULT_WIDTH)
            );
            println!(
                "  Height: {}",
                ascii.height.unwrap_or(crate::ascii::DEFAULT_HEIGHT)
            );
            println!("  Filter: {}", ascii.filter.unwrap_or_default().name());
            println!(
                "  Char aspect: {}",
                ascii
                    .char_aspect
                    .unwrap_or(crate::ascii::DEFAULT_CHAR_ASPECT_RATIO)
            );
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            write_default_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }

    Ok(())
}

/// Write the commented default config, creating parent directories.
/// Never overwrites an existing file.
pub fn write_default_config(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let io_err = |e: std::io::Error| CliError::Output {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(io_err)?;
    Ok(())
}
