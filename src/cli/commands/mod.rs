pub mod check;
mod helper;
pub mod init;

use crate::cli::args::OutputFormat;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running nolintguard commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check, in file, comment, then linter order.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of Go files that were checked.
    pub files_checked: usize,
    pub format: OutputFormat,
}
