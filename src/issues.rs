//! Issue types for nolint policy analysis results.
//!
//! Each issue is self-contained with all information the reporters
//! (text and JSON) need to display it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::SourceContext;

pub const GOSEC_MESSAGE: &str =
    "nolintguard: //nolint:gosec is forbidden; use #nosec or //gosec:ignore instead";
pub const REVIVE_MESSAGE: &str =
    "nolintguard: //nolint:revive is forbidden; use native revive directives instead";
pub const NOSEC_NO_JUSTIFICATION_MESSAGE: &str =
    "nolintguard: #nosec directive must include justification (-- reason)";
pub const GOSEC_NO_JUSTIFICATION_MESSAGE: &str =
    "nolintguard: //gosec: directive must include justification (-- reason)";
pub const REVIVE_NO_JUSTIFICATION_MESSAGE: &str =
    "nolintguard: //revive: directive must include justification (reason)";

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NolintGosec,
    NolintRevive,
    ForbiddenLinter,
    NosecJustification,
    GosecJustification,
    ReviveJustification,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::NolintGosec => write!(f, "nolint-gosec"),
            Rule::NolintRevive => write!(f, "nolint-revive"),
            Rule::ForbiddenLinter => write!(f, "forbidden-linter"),
            Rule::NosecJustification => write!(f, "nosec-justification"),
            Rule::GosecJustification => write!(f, "gosec-justification"),
            Rule::ReviveJustification => write!(f, "revive-justification"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Directive Violations
// ============================================================

/// What a directive comment did wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// `gosec` listed in `//nolint:`.
    NolintGosec,
    /// `revive` listed in `//nolint:`.
    NolintRevive,
    /// A configured forbidden linter listed in `//nolint:`.
    ForbiddenLinter { linter: String },
    /// `#nosec` without `-- reason`.
    NosecWithoutJustification,
    /// `//gosec:` without `-- reason`.
    GosecWithoutJustification,
    /// `//revive:` without trailing reason.
    ReviveWithoutJustification,
}

impl ViolationKind {
    pub fn rule(&self) -> Rule {
        match self {
            ViolationKind::NolintGosec => Rule::NolintGosec,
            ViolationKind::NolintRevive => Rule::NolintRevive,
            ViolationKind::ForbiddenLinter { .. } => Rule::ForbiddenLinter,
            ViolationKind::NosecWithoutJustification => Rule::NosecJustification,
            ViolationKind::GosecWithoutJustification => Rule::GosecJustification,
            ViolationKind::ReviveWithoutJustification => Rule::ReviveJustification,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ViolationKind::NolintGosec => GOSEC_MESSAGE.to_string(),
            ViolationKind::NolintRevive => REVIVE_MESSAGE.to_string(),
            ViolationKind::ForbiddenLinter { linter } => {
                format!("nolintguard: //nolint:{} is forbidden", linter)
            }
            ViolationKind::NosecWithoutJustification => NOSEC_NO_JUSTIFICATION_MESSAGE.to_string(),
            ViolationKind::GosecWithoutJustification => GOSEC_NO_JUSTIFICATION_MESSAGE.to_string(),
            ViolationKind::ReviveWithoutJustification => {
                REVIVE_NO_JUSTIFICATION_MESSAGE.to_string()
            }
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ViolationKind::NolintGosec => Some("write `// #nosec G401 -- reason` instead"),
            ViolationKind::NosecWithoutJustification
            | ViolationKind::GosecWithoutJustification => {
                Some("append `-- <reason>` to the directive")
            }
            ViolationKind::ReviveWithoutJustification => {
                Some("append a reason after the directive, e.g. `//revive:disable:exported <reason>`")
            }
            ViolationKind::NolintRevive | ViolationKind::ForbiddenLinter { .. } => None,
        }
    }
}

/// A directive comment that violates the nolint policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveIssue {
    pub context: SourceContext,
    pub kind: ViolationKind,
}

impl DirectiveIssue {
    pub fn new(context: SourceContext, kind: ViolationKind) -> Self {
        Self { context, kind }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }
}

/// File could not be read.
///
/// The run continues; the file is simply not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Directive(DirectiveIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Directive(_) => DirectiveIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    /// Line and column, 0 for file-level issues.
    pub fn line_col(&self) -> (usize, usize) {
        match self {
            ReportLocation::Source(ctx) => (ctx.line(), ctx.col()),
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for DirectiveIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.kind.message()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.kind.rule()
    }

    fn hint(&self) -> Option<&str> {
        self.kind.hint()
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// JSON Output
// ============================================================

/// Flat JSON representation of an issue.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDto {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub rule: String,
    pub severity: Severity,
    pub message: String,
}

impl From<&Issue> for IssueDto {
    fn from(issue: &Issue) -> Self {
        let loc = issue.location();
        let (line, column) = loc.line_col();
        Self {
            file: loc.file_path().to_string(),
            line,
            column,
            rule: issue.report_rule().to_string(),
            severity: issue.report_severity(),
            message: issue.message(),
        }
    }
}
