//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for imgann using the `clap`
//! crate. It provides command parsing and helper methods for resolving
//! defaults from the configuration.
//!
//! # Commands
//!
//! - **browse**: Page through an annotation file interactively (default)
//! - **list**: Print every image of an annotation file once, in order
//! - **save**: Discover images in a directory and write an annotation file
//! - **config**: Get or set configuration values
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--verbose` flag for debug logging on stderr
//! - Command aliases (e.g., `b` for `browse`, `s` for `save`)
//! - `--absolute` / `--relative` override the configured path format

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{ImgannConfig, PathFormat};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., path_format=relative)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., annotation_file)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the config file location
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "imgann")]
#[command(about = "Build image annotation files and browse them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true, conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", global = true, conflicts_with = "absolute")]
    pub relative: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Page through the images of an annotation file (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Annotation file (defaults to the configured annotation_file)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Open each image in the default viewer as it is shown
        #[arg(short = 'o', long = "open")]
        open: bool,
    },

    /// Print every image of an annotation file, in order
    #[command(visible_alias = "l")]
    List {
        /// Annotation file (defaults to the configured annotation_file)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Mark images that no longer exist and summarize them
        #[arg(short = 'c', long = "check")]
        check: bool,
    },

    /// Discover images in a directory and save them as an annotation file
    #[command(visible_alias = "s")]
    Save {
        /// Directory holding the images
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Annotation file to write (defaults to DIR/<annotation_file>)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Only keep images whose file name contains this text
        #[arg(short = 'k', long = "query", value_name = "QUERY")]
        query: Option<String>,

        /// Maximum number of images to record
        #[arg(short = 'n', long = "max", value_name = "COUNT")]
        max: Option<usize>,

        /// Scan subdirectories too (overrides config)
        #[arg(short = 'r', long = "recursive")]
        recursive: bool,

        /// Replace an existing annotation file without asking
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Annotation file named on the command line, or the configured default in
/// the current directory
#[must_use]
pub fn annotation_file(file: Option<&Path>, config: &ImgannConfig) -> PathBuf {
    file.map_or_else(|| PathBuf::from(&config.annotation_file), Path::to_path_buf)
}

/// Destination of `save`: the explicit output, or `<dir>/<annotation_file>`
#[must_use]
pub fn save_output(dir: &Path, output: Option<&Path>, config: &ImgannConfig) -> PathBuf {
    output.map_or_else(|| dir.join(&config.annotation_file), Path::to_path_buf)
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            file: None,
            open: false,
        })
    }

    /// Helper method to get the path format override from global flags
    #[must_use]
    pub const fn get_path_format(&self) -> Option<PathFormat> {
        if self.absolute {
            Some(PathFormat::Absolute)
        } else if self.relative {
            Some(PathFormat::Relative)
        } else {
            None
        }
    }
}
