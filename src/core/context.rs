use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{comments::parse_go_source, file_scanner::scan_files},
    issues::{Issue, ReadErrorIssue},
    policy::{Policy, check_comments},
};

/// Outcome of checking one file.
struct FileOutcome {
    issues: Vec<Issue>,
    has_syntax_errors: bool,
}

/// Analysis context for a single run.
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--require-justification`)
/// 2. `.nolintguardrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged policy (CLI args > config file > defaults).
    pub policy: Policy,

    /// Go files to check, sorted.
    pub files: Vec<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or a requested path does
    /// not exist.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let paths = if common_args.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            common_args.paths.clone()
        };

        let config_result = load_config(&config_search_dir(&paths[0]))?;
        if verbose && let Some(path) = &config_result.path {
            eprintln!("{} Using config file: {}", "info:".bold().cyan(), path.display());
        }
        let config = config_result.config;

        let policy = config.policy(
            common_args.require_justification,
            common_args.forbidden_linters.as_deref(),
        );

        let scan = scan_files(&paths, &config.ignores, config.ignore_test_files, verbose)?;
        if scan.skipped_count > 0 && verbose {
            eprintln!(
                "{} Skipped {} inaccessible path(s)",
                "warning:".bold().yellow(),
                scan.skipped_count
            );
        }

        Ok(Self {
            policy,
            files: scan.files,
            verbose,
        })
    }

    /// Check every file and return issues in file, comment, then linter order.
    ///
    /// Files are processed in parallel; `collect` keeps the sorted file order.
    pub fn check(&self) -> Vec<Issue> {
        let outcomes: Vec<(&String, FileOutcome)> = self
            .files
            .par_iter()
            .map(|file_path| (file_path, check_file(file_path, &self.policy)))
            .collect();

        let mut issues = Vec::new();
        for (file_path, outcome) in outcomes {
            if outcome.has_syntax_errors && self.verbose {
                eprintln!(
                    "{} {} has syntax errors; comments were checked anyway",
                    "warning:".bold().yellow(),
                    file_path
                );
            }
            issues.extend(outcome.issues);
        }
        issues
    }
}

fn check_file(file_path: &str, policy: &Policy) -> FileOutcome {
    let parsed = fs::read_to_string(file_path)
        .map_err(anyhow::Error::from)
        .and_then(|source| parse_go_source(&source, file_path));

    match parsed {
        Ok(parsed) => FileOutcome {
            issues: check_comments(&parsed.comments, policy)
                .into_iter()
                .map(Issue::Directive)
                .collect(),
            has_syntax_errors: parsed.has_syntax_errors,
        },
        Err(e) => FileOutcome {
            issues: vec![Issue::ReadError(ReadErrorIssue {
                file_path: file_path.to_string(),
                error: e.to_string(),
            })],
            has_syntax_errors: false,
        },
    }
}

/// Directory to start the config file search from.
fn config_search_dir(path: &Path) -> PathBuf {
    let path = &fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        path.to_path_buf()
    }
}
