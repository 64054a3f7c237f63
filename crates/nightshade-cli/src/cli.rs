//! Command line definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use nightshade::{Theme, DEFAULT_STORAGE_KEY};

use crate::output::OutputMode;

/// Light/dark theme preference for terminal tools.
#[derive(Debug, Parser)]
#[command(name = "nightshade", version, about)]
pub struct Cli {
    /// Preferences file [default: <config dir>/nightshade/preferences.json]
    #[arg(long, env = "NIGHTSHADE_STORE", global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Key the theme preference is stored under
    #[arg(long, default_value = DEFAULT_STORAGE_KEY, global = true)]
    pub key: String,

    /// Output mode
    #[arg(long, value_enum, default_value_t = OutputMode::Auto, global = true)]
    pub output: OutputMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the applied theme and where it comes from (default)
    Status,
    /// Switch to the other theme and remember the choice
    Toggle,
    /// Force a theme and remember the choice
    Set {
        /// `light` or `dark`
        theme: Theme,
    },
    /// Follow system appearance changes until interrupted
    Watch {
        /// Milliseconds between polls of the system setting
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
        /// Stop after this many polls
        #[arg(long)]
        polls: Option<u64>,
    },
    /// Print text statistics for a file or stdin
    Count {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["nightshade"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.key, "theme");
        assert_eq!(cli.output, OutputMode::Auto);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_set_parses_theme() {
        let cli = Cli::try_parse_from(["nightshade", "set", "dark"]).unwrap();
        assert_eq!(cli.command, Some(Command::Set { theme: Theme::Dark }));
    }

    #[test]
    fn test_set_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["nightshade", "set", "sepia"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "nightshade",
            "toggle",
            "--store",
            "/tmp/prefs.json",
            "--output",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Toggle));
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/prefs.json")));
        assert_eq!(cli.output, OutputMode::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_watch_options() {
        let cli =
            Cli::try_parse_from(["nightshade", "watch", "--interval-ms", "50", "--polls", "3"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Watch {
                interval_ms: 50,
                polls: Some(3)
            })
        );
    }
}
