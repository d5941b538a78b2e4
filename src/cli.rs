//! Command-line arguments for the `traffic-grid` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CONFIG_PATH_ENV;

/// traffic-grid - Live traffic map dashboard
///
/// Opens the dashboard window, or prints the map description as JSON
/// when built without a window or run with `--headless`.
#[derive(Debug, Parser)]
#[command(name = "traffic-grid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the map description to stdout instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE", env = CONFIG_PATH_ENV)]
    pub config: Option<PathBuf>,
}
