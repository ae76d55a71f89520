//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is [`Cli::parse_args`]. Any subcommand that is not
//! a built-in is captured as [`Commands::Git`] and handed to git unchanged,
//! and so is anything starting with a git option (`jitt -C dir status`).

use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// Flags jitt reads itself when they come before the command.
const GLOBAL_FLAGS: &[&str] = &["-q", "--quiet", "--no-color", "--debug"];

/// Options in command position that clap still answers.
const HELP_FLAGS: &[&str] = &["-h", "--help"];

const EXAMPLES: &str = "\
Examples:
  jitt init         # Create .jitt.yaml file with empty project
  jitt init ABC     # Create .jitt.yaml file with project=ABC
  jitt doctor       # Check if setup is correct
  jitt config       # Show all configuration
  jitt config project       # Show current project
  jitt config project XYZ   # Set project to XYZ
  jitt status       # Anything else is passed to git";

/// jitt - Jira + Git + Tiny Tooling
#[derive(Debug, Parser)]
#[command(name = "jitt")]
#[command(about = "jitt - Jira + Git + Tiny Tooling", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize .jitt.yaml configuration file
    Init(InitArgs),

    /// Check project setup and configuration
    Doctor,

    /// Get or set configuration values
    Config(ConfigArgs),

    /// Any other command is run by git with the same arguments
    #[command(external_subcommand)]
    Git(Vec<OsString>),
}

impl Cli {
    /// Parse a full argument list, program name included.
    ///
    /// clap only captures external subcommands that look like words, so a
    /// leading git option such as `-C`, `-c`, `--no-pager` or `--version` is
    /// routed to [`Commands::Git`] here, together with everything after it.
    /// jitt's own flags in front of it still apply.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match git_option_start(&args) {
            Some(start) => Ok(Self::passthrough(&args[1..start], args[start..].to_vec())),
            None => Self::try_parse_from(args),
        }
    }

    fn passthrough(global: &[OsString], git_args: Vec<OsString>) -> Self {
        let has = |names: &[&str]| {
            global
                .iter()
                .any(|arg| arg.to_str().is_some_and(|s| names.contains(&s)))
        };

        Self {
            quiet: has(&["-q", "--quiet"]),
            no_color: has(&["--no-color"]),
            debug: has(&["--debug"]),
            command: Commands::Git(git_args),
        }
    }
}

/// Index of the first argument to hand to git when the command position
/// holds an option jitt does not know.
fn git_option_start(args: &[OsString]) -> Option<usize> {
    let start = args
        .iter()
        .skip(1)
        .position(|arg| !arg.to_str().is_some_and(|s| GLOBAL_FLAGS.contains(&s)))?
        + 1;

    let token = args[start].to_string_lossy();
    if token.starts_with('-') && !HELP_FLAGS.contains(&&*token) {
        Some(start)
    } else {
        None
    }
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Jira project key to record (empty if omitted)
    pub project: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Key to show or set (available: project)
    pub key: Option<String>,

    /// New value for the key
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_init_without_project() {
        let cli = Cli::parse_from(["jitt", "init"]);
        match cli.command {
            Commands::Init(args) => assert_eq!(args.project, None),
            other => panic!("Expected Init, got {:?}", other),
        }
    }

    #[test]
    fn parses_init_with_project() {
        let cli = Cli::parse_from(["jitt", "init", "ABC"]);
        match cli.command {
            Commands::Init(args) => assert_eq!(args.project.as_deref(), Some("ABC")),
            other => panic!("Expected Init, got {:?}", other),
        }
    }

    #[test]
    fn parses_doctor() {
        let cli = Cli::parse_from(["jitt", "doctor"]);
        assert!(matches!(cli.command, Commands::Doctor));
    }

    #[test]
    fn parses_config_key_and_value() {
        let cli = Cli::parse_from(["jitt", "config", "project", "XYZ"]);
        match cli.command {
            Commands::Config(args) => {
                assert_eq!(args.key.as_deref(), Some("project"));
                assert_eq!(args.value.as_deref(), Some("XYZ"));
            }
            other => panic!("Expected Config, got {:?}", other),
        }
    }

    #[test]
    fn unknown_subcommand_is_captured_for_git() {
        let cli = Cli::parse_from(["jitt", "log", "--oneline", "-n", "3"]);
        match cli.command {
            Commands::Git(args) => assert_eq!(args, vec!["log", "--oneline", "-n", "3"]),
            other => panic!("Expected Git, got {:?}", other),
        }
    }

    #[test]
    fn flags_after_git_subcommand_are_not_ours() {
        let cli = Cli::parse_from(["jitt", "status", "--quiet"]);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Git(_)));
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = Cli::parse_from(["jitt", "--debug", "-q", "doctor"]);
        assert!(cli.debug);
        assert!(cli.quiet);
    }

    #[test]
    fn no_arguments_is_an_error() {
        assert!(Cli::try_parse_from(["jitt"]).is_err());
        assert!(Cli::parse_args(["jitt"]).is_err());
    }

    fn git_args(cli: Cli) -> Vec<OsString> {
        match cli.command {
            Commands::Git(args) => args,
            other => panic!("Expected Git, got {:?}", other),
        }
    }

    #[test]
    fn leading_git_option_is_passed_through() {
        let cli = Cli::parse_args(["jitt", "-C", "dir", "status"]).unwrap();
        assert_eq!(git_args(cli), vec!["-C", "dir", "status"]);

        let cli = Cli::parse_args(["jitt", "--no-pager", "log", "-n", "1"]).unwrap();
        assert_eq!(git_args(cli), vec!["--no-pager", "log", "-n", "1"]);

        let cli = Cli::parse_args(["jitt", "-c", "k=v", "commit"]).unwrap();
        assert_eq!(git_args(cli), vec!["-c", "k=v", "commit"]);
    }

    #[test]
    fn version_flag_belongs_to_git() {
        let cli = Cli::parse_args(["jitt", "--version"]).unwrap();
        assert_eq!(git_args(cli), vec!["--version"]);
    }

    #[test]
    fn own_flags_before_git_option_still_apply() {
        let cli = Cli::parse_args(["jitt", "--debug", "-q", "--no-pager", "log"]).unwrap();
        assert!(cli.debug);
        assert!(cli.quiet);
        assert!(!cli.no_color);
        assert_eq!(git_args(cli), vec!["--no-pager", "log"]);
    }

    #[test]
    fn word_commands_still_go_through_clap() {
        let cli = Cli::parse_args(["jitt", "--quiet", "doctor"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Doctor));

        let cli = Cli::parse_args(["jitt", "status", "-s"]).unwrap();
        assert_eq!(git_args(cli), vec!["status", "-s"]);
    }

    #[test]
    fn help_flag_is_answered_by_jitt() {
        let err = Cli::parse_args(["jitt", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Cli::parse_args(["jitt", "-q", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
