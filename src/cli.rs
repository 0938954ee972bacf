//! CLI definitions for taskboard.
//!
//! Defined with clap's derive macros; the entry point is the [`Cli`] struct
//! and its optional subcommand.

use clap::{Parser, Subcommand};

/// Terminal dashboard client for a task management API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(short, long, global = true)]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr, or filename.
    /// Defaults to stderr for `show` and off for the interactive board,
    /// which owns the terminal.
    #[arg(short, long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive dashboard (default if no subcommand given)
    Board,

    /// Fetch once and print the dashboard, analytics, and task list
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_api_url() {
        let cli = Cli::parse_from(["taskboard", "show", "--api-url", "http://x:1"]);
        assert!(matches!(cli.command, Some(Command::Show)));
        assert_eq!(cli.api_url.as_deref(), Some("http://x:1"));
    }

    #[test]
    fn defaults_to_board() {
        let cli = Cli::parse_from(["taskboard"]);
        assert!(cli.command.is_none());
        assert!(cli.log.is_none());
    }
}
