//! Justification checks for suppression directives.
//!
//! Two conventions are supported:
//! - dash style (`#nosec`, `//gosec:`): `#nosec G401 -- reason`
//! - space style (`//revive:`): `//revive:disable[:rule] reason`

/// Action keywords accepted after `revive:`.
const REVIVE_ACTIONS: &[&str] = &["disable", "enable"];

/// Check if a directive body carries a `-- reason` justification.
///
/// Only the first `--` is the delimiter; everything after it, further dashes
/// included, is the justification.
pub fn has_dash_justification(text: &str) -> bool {
    match text.find("--") {
        Some(idx) => !text[idx + 2..].trim().is_empty(),
        None => false,
    }
}

/// Check if a revive directive body carries a space-separated justification.
///
/// `revive:disable-next-line Until the code is stable` is justified,
/// `revive:disable:exported` is not.
pub fn has_space_justification(text: &str) -> bool {
    let text = text.strip_prefix("revive:").unwrap_or(text);

    let Some(rest) = REVIVE_ACTIONS
        .iter()
        .find_map(|action| text.strip_prefix(action))
    else {
        return false;
    };

    // Consume the keyword suffix (`-line`, `-next-line`)
    let suffix_end = rest
        .find(|c: char| c == ':' || c.is_whitespace())
        .unwrap_or(rest.len());
    let rest = &rest[suffix_end..];

    let reason = if rest.starts_with(':') {
        match rest.find(' ') {
            Some(idx) => &rest[idx..],
            None => return false,
        }
    } else {
        rest
    };

    !reason.trim().is_empty()
}
