//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Kindred CLI - Work out how two people in a family tree are related.
#[derive(Debug, Parser)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINDRED_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file holding the population (reads stdin when omitted)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (descriptions or IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Relate two people
    Relate(RelateArgs),

    /// List the people in the population
    People(PeopleArgs),
}

/// Arguments for the relate command.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    /// ID of the first person
    pub person1: String,

    /// ID of the second person
    pub person2: String,

    /// Give up after this many seconds
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,

    /// Stop searching ancestry beyond this many generations
    #[arg(short, long)]
    pub max_generations: Option<usize>,
}

/// Arguments for the people command.
#[derive(Debug, Parser)]
pub struct PeopleArgs {
    /// Only list people whose ID or name contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_relate_command() {
        let cli = Cli::parse_from(["kindred", "relate", "@I0@", "@I21@"]);
        match cli.command {
            Command::Relate(args) => {
                assert_eq!(args.person1, "@I0@");
                assert_eq!(args.person2, "@I21@");
                assert!(args.timeout_secs.is_none());
            }
            _ => panic!("Expected Relate command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "kindred",
            "relate",
            "a",
            "b",
            "--format",
            "json",
            "-i",
            "family.json",
            "-vv",
            "--timeout-secs",
            "3",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert_eq!(cli.input, Some(PathBuf::from("family.json")));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Relate(args) => assert_eq!(args.timeout_secs, Some(3)),
            _ => panic!("Expected Relate command"),
        }
    }

    #[test]
    fn test_people_command() {
        let cli = Cli::parse_from(["kindred", "people", "--filter", "kennedy", "--no-color"]);
        assert!(cli.no_color);
        match cli.command {
            Command::People(args) => assert_eq!(args.filter.as_deref(), Some("kennedy")),
            _ => panic!("Expected People command"),
        }
    }

    #[test]
    fn test_relate_requires_two_ids() {
        assert!(Cli::try_parse_from(["kindred", "relate", "@I0@"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, OutputFormat::Quiet));
    }
}
