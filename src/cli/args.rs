//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CACHE_NUGET_PACKAGES_ENV;
use crate::ui::OutputMode;

/// Stowaway - Buildpack cache restoration.
#[derive(Debug, Parser)]
#[command(name = "stowaway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only print warnings and errors
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

impl Cli {
    /// Output mode for the build log.
    ///
    /// `--json` implies quiet so stdout carries nothing but the report.
    pub fn output_mode(&self) -> OutputMode {
        let json = match &self.command {
            Commands::Compile(args) => args.json,
        };
        if self.quiet || json {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Restore cached dependencies into the build directory
    Compile(CompileArgs),
}

/// Arguments for the `compile` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompileArgs {
    /// Build directory the dependencies are restored into
    #[arg(env = "STOWAWAY_BUILD_DIR")]
    pub build_dir: PathBuf,

    /// Cache directory persisted between builds
    #[arg(env = "STOWAWAY_CACHE_DIR")]
    pub cache_dir: PathBuf,

    /// Set to "false" to clear the NuGet packages cache
    #[arg(long, value_name = "VALUE", env = CACHE_NUGET_PACKAGES_ENV)]
    pub cache_nuget_packages: Option<String>,

    /// Report what would happen without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON report when done (implies --quiet)
    #[arg(long)]
    pub json: bool,
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
    fn parses_compile_positionals() {
        let cli = Cli::parse_from(["stowaway", "compile", "/build", "/cache"]);
        let Commands::Compile(args) = cli.command;
        assert_eq!(args.build_dir, PathBuf::from("/build"));
        assert_eq!(args.cache_dir, PathBuf::from("/cache"));
        assert!(!args.dry_run);
        assert!(!args.json);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "stowaway",
            "--quiet",
            "compile",
            "/build",
            "/cache",
            "--cache-nuget-packages",
            "false",
            "--dry-run",
            "--json",
        ]);
        assert!(cli.quiet);
        let Commands::Compile(args) = cli.command;
        assert_eq!(args.cache_nuget_packages.as_deref(), Some("false"));
        assert!(args.dry_run);
        assert!(args.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["stowaway", "compile", "/b", "/c", "--debug", "--no-color"]);
        assert!(cli.debug);
        assert!(cli.no_color);
    }

    #[test]
    fn json_implies_quiet_output() {
        let cli = Cli::parse_from(["stowaway", "compile", "/b", "/c", "--json"]);
        assert!(!cli.quiet);
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn output_mode_follows_quiet() {
        let cli = Cli::parse_from(["stowaway", "compile", "/b", "/c"]);
        assert_eq!(cli.output_mode(), OutputMode::Normal);

        let cli = Cli::parse_from(["stowaway", "-q", "compile", "/b", "/c"]);
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["stowaway"]).is_err());
    }
}
