//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::checks::OutputFormat;

/// AI search readiness checker for content sites.
#[derive(Debug, Parser)]
#[command(name = "ai-readiness")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .ai-readiness/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all readiness checks (default if no command specified)
    Check(CheckArgs),

    /// List the available checks
    List,

    /// Print the JSON Schema of the site snapshot format
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Report format (defaults to settings.default_format, then human)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exit non-zero when any check does not pass
    #[arg(long)]
    pub strict: bool,

    /// Document root holding robots.txt and llms.txt
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Site snapshot file (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["ai-readiness"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_flags() {
        let cli = Cli::parse_from([
            "ai-readiness",
            "check",
            "--format",
            "json",
            "--strict",
            "--root",
            "public",
            "--snapshot",
            "site.json",
        ]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert!(args.strict);
                assert_eq!(args.root, Some(PathBuf::from("public")));
                assert_eq!(args.snapshot, Some(PathBuf::from("site.json")));
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ai-readiness", "check", "--quiet", "-p", "/srv/blog"]);
        assert!(cli.quiet);
        assert_eq!(cli.project, Some(PathBuf::from("/srv/blog")));
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["ai-readiness", "check", "--format", "sarif"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_completions_shell() {
        let cli = Cli::parse_from(["ai-readiness", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }
}
