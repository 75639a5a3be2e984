//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nimbus CLI
#[derive(Debug, Parser)]
#[command(name = "nimbus")]
#[command(author, version, about = "Weather lookup for any city", long_about = None)]
pub struct Cli {
    /// Verbosity level (overrides telemetry.log_filter; RUST_LOG still wins)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./nimbus.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive weather panel (default)
    Interactive,

    /// Look up the weather for a city and print it
    ///
    /// Example: nimbus search new york --json
    Search {
        /// City name; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the raw weather report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or toggle the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the stored theme (default)
    Show,
    /// Switch between light and dark and persist the choice
    Toggle,
}
