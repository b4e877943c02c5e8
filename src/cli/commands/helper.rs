use super::{CommandResult, CommandSummary};
use crate::cli::args::OutputFormat;
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    issues: Vec<Issue>,
    files_checked: usize,
    format: OutputFormat,
) -> CommandResult {
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors: true,
        issues,
        files_checked,
        format,
    }
}
