//! Directive parsing for Go suppression comments.
//!
//! Recognized dialects, checked in priority order:
//! - `#nosec [rules] -- reason` - gosec suppression marker
//! - `//gosec:ignore [rules] -- reason` - gosec directive
//! - `//revive:disable[:rule] reason` - native revive directive
//! - `//nolint:linter1,linter2` - golangci-lint suppression list
//!
//! A plain `//nolint` without a linter list is not a directive for policy
//! purposes and is always allowed.

/// Parsed suppression directive.
///
/// The directive variants carry the marker-stripped comment body. For `Nosec`,
/// `Gosec` and `Revive` the body still starts with the dialect prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `//nolint:a,b` with the listed linter names.
    Nolint { linters: Vec<String> },
    /// `#nosec ...`
    Nosec { body: String },
    /// `//gosec:ignore ...` or `//gosec:disable ...`
    Gosec { body: String },
    /// `//revive:disable ...` and friends.
    Revive { body: String },
}

impl Directive {
    /// Parse directive from raw comment text (including `//` or `/* */` markers).
    /// Returns None if the comment is not a policy-relevant directive.
    pub fn parse(raw: &str) -> Option<Self> {
        let body = comment_body(raw);

        if body.starts_with("#nosec") {
            return Some(Self::Nosec {
                body: body.to_string(),
            });
        }
        if body.starts_with("gosec:") {
            return Some(Self::Gosec {
                body: body.to_string(),
            });
        }
        if body.starts_with("revive:") {
            return Some(Self::Revive {
                body: body.to_string(),
            });
        }

        let rest = body.strip_prefix("nolint")?;
        if rest.is_empty() {
            return None;
        }
        // `nolinting is important` and friends are prose, not malformed directives
        let list = rest.trim().strip_prefix(':')?;

        Some(Self::Nolint {
            linters: parse_linters(list),
        })
    }
}

/// Strip comment markers and any trailing inline comment.
///
/// `//nolint:gosec // want "..."` becomes `nolint:gosec`.
pub fn comment_body(raw: &str) -> &str {
    let text = raw.strip_prefix("//").unwrap_or(raw);
    let text = text.strip_prefix("/*").unwrap_or(text);
    let text = text.strip_suffix("*/").unwrap_or(text).trim();

    match text.find("//") {
        Some(idx) => text[..idx].trim(),
        None => text,
    }
}

/// Extract linter names from the list following `nolint:`.
///
/// Parsing stops at the first `//` (inline comment).
pub fn parse_linters(text: &str) -> Vec<String> {
    let text = match text.find("//") {
        Some(idx) => &text[..idx],
        None => text,
    };
    split_list(text)
}

/// Split a comma-separated list, trimming whitespace and dropping empty items.
///
/// Order and duplicates are preserved.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
