//! Imgann CLI application entry point
//!
//! Builds annotation files from image directories and pages through them.
//!
//! # Usage
//!
//! ```bash
//! # Record every image under data/cats into data/cats/annotation.csv
//! imgann save data/cats
//! imgann s data/cats -k tabby -n 100 -r
//!
//! # Page through an annotation file (default command)
//! imgann
//! imgann browse data/cats/annotation.csv --open
//!
//! # Print the file's images once, flagging ones that disappeared
//! imgann list data/cats/annotation.csv --check
//!
//! # Quiet mode (only output results)
//! imgann -q list
//! ```
//!
//! # Configuration
//!
//! Defaults live in the user's config directory
//! (`~/.config/imgann/config.toml` on Linux) and are created on first run.
//! Any key can be overridden for one run with an `IMGANN_<KEY>` variable.

use imgann::{
    ImgannError,
    browse::BrowseOptions,
    cli::{Cli, Commands, ConfigCommands, annotation_file, save_output},
    commands::{self, save::SaveRequest},
    config::{ImgannConfig, KEYS},
};
use std::io;
use tracing::Level;

type Result<T> = std::result::Result<T, ImgannError>;

/// Handle configuration management commands
///
/// # Errors
///
/// Returns `ImgannError` if the setting is malformed, the key is unknown,
/// the value does not parse, or the configuration cannot be saved.
fn handle_config_command(
    mut config: ImgannConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                ImgannError::InvalidInput("Invalid format. Use: imgann config set key=value".into())
            })?;
            let key = key.trim();

            config.set(key, value.trim())?;
            config.save()?;
            tracing::debug!("config key {key} updated");

            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key.trim())?);
        }
        ConfigCommands::Path => {
            println!("{}", ImgannConfig::config_path()?.display());
            if !quiet {
                println!("Available keys: {}", KEYS.join(", "));
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Main entry point for the imgann application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `ImgannError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let config = ImgannConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let path_format = cli.get_path_format().unwrap_or(config.path_format);
    let command = cli.get_command();

    tracing::debug!(?command, quiet, %path_format, "dispatching");

    match &command {
        Commands::Config { command } => {
            handle_config_command(config, command, quiet)?;
        }
        Commands::Browse { file, open } => {
            let options = BrowseOptions {
                path_format,
                auto_open: *open,
            };
            commands::browse(&annotation_file(file.as_deref(), &config), options, quiet)?;
        }
        Commands::List { file, check } => {
            let file = annotation_file(file.as_deref(), &config);
            let mut stdout = io::stdout().lock();
            commands::list(&file, *check, path_format, quiet, &mut stdout)?;
        }
        Commands::Save {
            dir,
            output,
            query,
            max,
            recursive,
            yes,
        } => {
            let output = save_output(dir, output.as_deref(), &config);
            let request = SaveRequest {
                dir,
                output: &output,
                query: query.as_deref().unwrap_or(""),
                max: *max,
                recursive: *recursive,
                yes: *yes,
            };
            commands::save(&config, &request, quiet)?;
        }
    }

    Ok(())
}
