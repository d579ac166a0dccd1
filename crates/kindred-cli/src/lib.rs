//! Kindred CLI library.
//!
//! This library provides the core functionality for the Kindred command-line interface,
//! including configuration management, population input, command execution, and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use input::Population;
pub use output::Formatter;
