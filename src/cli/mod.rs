//! CLI module for numguess - command-line options.

pub mod commands;

pub use commands::Cli;
