use clap::Parser;

use pixel_ascii::cli::{self, Args, CliError, Command, ConvertSettings};
use pixel_ascii::config::Config;

/// Load config: an explicit --config path must exist, the default path may not.
fn load_config(args: &Args) -> Result<Config, CliError> {
    match &args.config {
        Some(path) => Ok(Config::load_from_explicit(path)?),
        None => match Config::load(None) {
            Ok(c) => Ok(c),
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using default settings.", e);
                Ok(Config::default())
            }
        },
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Some(Command::Palettes) => {
            cli::list_palettes();
            Ok(())
        }
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone(), args.config.as_deref())
        }
        None => {
            let config = load_config(&args)?;
            let settings = ConvertSettings::resolve(&args, &config)?;
            log::debug!("Resolved settings: {:?}", settings);
            cli::run_convert(&settings)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
