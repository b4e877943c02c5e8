//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check Go files for nolint policy violations
//! - `init`: Initialize nolintguard configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments for commands that analyze source files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Go files or directories to check (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Require #nosec, //gosec: and //revive: directives to include a justification
    #[arg(long, env = "NOLINTGUARD_REQUIRE_JUSTIFICATION")]
    pub require_justification: bool,

    /// Comma-separated list of linters forbidden in //nolint directives (overrides config file)
    #[arg(long, value_name = "LINTERS", env = "NOLINTGUARD_FORBIDDEN_LINTERS")]
    pub forbidden_linters: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, cargo-style diagnostics
    #[default]
    Text,
    /// JSON array of issues
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check Go source files for nolint directive policy violations
    Check(CheckCommand),
    /// Initialize a new .nolintguardrc.json configuration file
    Init,
}
