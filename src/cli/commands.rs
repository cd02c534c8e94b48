//! CLI definition using clap.
//!
//! No arguments are required; every option only adjusts presentation,
//! logging or input handling. The game's range and attempt budget are fixed.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use numguess::game::InvalidInputPolicy;

/// Numguess - guess the secret number between 1 and 20 in five tries
#[derive(Parser, Debug)]
#[command(name = "numguess")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with an error on input that is not a whole number
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Apply command-line overrides on top of loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_color {
            config.color = false;
        }
        if self.strict {
            config.invalid_input = InvalidInputPolicy::Abort;
        }
        config
    }
}
