//! Nolint policy evaluation.
//!
//! Combines directive classification and justification checks with the
//! run's [`Policy`] to produce [`DirectiveIssue`]s. Evaluation is a pure
//! function of the comment text and the policy.

use std::collections::HashSet;

use crate::core::Comment;
use crate::directives::{Directive, split_list};
use crate::issues::{DirectiveIssue, ViolationKind};
use crate::justification::{has_dash_justification, has_space_justification};

/// Linters that may never appear in a `//nolint:` list.
const GOSEC_LINTER: &str = "gosec";
const REVIVE_LINTER: &str = "revive";

/// Immutable per-run policy, shared by reference across evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// Require `#nosec`, `//gosec:` and `//revive:` directives to carry a reason.
    pub require_justification: bool,
    /// Additional linters forbidden in `//nolint:` lists (exact match).
    pub forbidden_linters: HashSet<String>,
}

impl Policy {
    pub fn new<I, S>(require_justification: bool, forbidden_linters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            require_justification,
            forbidden_linters: forbidden_linters
                .into_iter()
                .map(|linter| linter.as_ref().trim().to_string())
                .filter(|linter| !linter.is_empty())
                .collect(),
        }
    }

    /// Build a policy from a comma-separated forbidden linter list.
    pub fn from_list(require_justification: bool, forbidden_linters: &str) -> Self {
        Self::new(require_justification, split_list(forbidden_linters))
    }
}

/// Evaluate a single comment against the policy.
///
/// Issues are returned in the order the offending linters appear in the
/// comment; duplicates are reported once per occurrence.
pub fn evaluate(comment: &Comment, policy: &Policy) -> Vec<DirectiveIssue> {
    violations(&comment.text, policy)
        .into_iter()
        .map(|kind| DirectiveIssue::new(comment.context.clone(), kind))
        .collect()
}

/// Evaluate a sequence of comments, preserving comment order.
pub fn check_comments(comments: &[Comment], policy: &Policy) -> Vec<DirectiveIssue> {
    comments
        .iter()
        .flat_map(|comment| evaluate(comment, policy))
        .collect()
}

/// Classify raw comment text and list its policy violations.
pub fn violations(text: &str, policy: &Policy) -> Vec<ViolationKind> {
    let Some(directive) = Directive::parse(text) else {
        return Vec::new();
    };

    match directive {
        Directive::Nosec { body } => {
            if policy.require_justification && !has_dash_justification(&body) {
                vec![ViolationKind::NosecWithoutJustification]
            } else {
                Vec::new()
            }
        }
        Directive::Gosec { body } => {
            if policy.require_justification && !has_dash_justification(&body) {
                vec![ViolationKind::GosecWithoutJustification]
            } else {
                Vec::new()
            }
        }
        Directive::Revive { body } => {
            if policy.require_justification && !has_space_justification(&body) {
                vec![ViolationKind::ReviveWithoutJustification]
            } else {
                Vec::new()
            }
        }
        Directive::Nolint { linters } => linters
            .into_iter()
            .filter_map(|linter| {
                if linter == GOSEC_LINTER {
                    Some(ViolationKind::NolintGosec)
                } else if linter == REVIVE_LINTER {
                    Some(ViolationKind::NolintRevive)
                } else if policy.forbidden_linters.contains(&linter) {
                    Some(ViolationKind::ForbiddenLinter { linter })
                } else {
                    None
                }
            })
            .collect(),
    }
}
