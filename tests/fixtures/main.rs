//! Go fixture tests.
//!
//! Each fixture annotates the lines that must be reported with
//! `// want "regex" ["regex" ...]`. Every diagnostic on a line must match one
//! expectation on that line and every expectation must be consumed.

use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use regex::Regex;

use nolintguard::{
    core::parse_go_source,
    issues::Report,
    policy::{Policy, check_comments},
};

const FIXTURES_DIR: &str = "tests/fixtures/go";

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(FIXTURES_DIR)
        .join(name)
}

/// Parse the quoted patterns following `// want` on a line.
///
/// Patterns use Go string escapes: `\\` is a backslash and `\"` a quote.
fn parse_expectations(line: &str) -> Vec<String> {
    let Some(idx) = line.find("// want ") else {
        return Vec::new();
    };
    let mut patterns = Vec::new();
    let mut chars = line[idx + "// want ".len()..].chars();

    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        let mut pattern = String::new();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        pattern.push(escaped);
                    }
                }
                '"' => break,
                _ => pattern.push(c),
            }
        }
        patterns.push(pattern);
    }
    patterns
}

/// Check a fixture file and compare diagnostics against its `want` comments.
fn run_fixture(name: &str, policy: &Policy) -> Result<()> {
    let path = fixture_path(name);
    let source =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let parsed = parse_go_source(&source, name)?;
    assert!(!parsed.has_syntax_errors, "{} should be valid Go", name);

    let mut expected: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (idx, line) in source.lines().enumerate() {
        let patterns = parse_expectations(line);
        if !patterns.is_empty() {
            expected.insert(idx + 1, patterns);
        }
    }

    let mut unexpected = Vec::new();
    for issue in check_comments(&parsed.comments, policy) {
        let (line, _) = issue.location().line_col();
        let message = issue.message();
        let patterns = expected.entry(line).or_default();

        let matched = patterns
            .iter()
            .position(|p| Regex::new(p).is_ok_and(|re| re.is_match(&message)));
        match matched {
            Some(pos) => {
                patterns.remove(pos);
            }
            None => unexpected.push(format!("{}:{}: {}", name, line, message)),
        }
    }

    let missing: Vec<String> = expected
        .into_iter()
        .flat_map(|(line, patterns)| {
            patterns
                .into_iter()
                .map(move |p| format!("{}:{}: {}", name, line, p))
        })
        .collect();

    assert_eq!(unexpected, Vec::<String>::new(), "unexpected diagnostics");
    assert_eq!(missing, Vec::<String>::new(), "missing diagnostics");
    Ok(())
}

#[test]
fn test_default_policy() -> Result<()> {
    run_fixture("nolint_default.go", &Policy::default())
}

#[test]
fn test_justification_required() -> Result<()> {
    let policy = Policy::new(true, Vec::<String>::new());
    run_fixture("justification_required.go", &policy)?;
    run_fixture("revive_required.go", &policy)
}

#[test]
fn test_justification_not_required() -> Result<()> {
    run_fixture("justification_optional.go", &Policy::default())
}

#[test]
fn test_forbidden_linters() -> Result<()> {
    let policy = Policy::from_list(false, "staticcheck,unused");
    run_fixture("forbidden_linters.go", &policy)
}

#[test]
fn test_edge_cases() -> Result<()> {
    run_fixture("edge_cases.go", &Policy::default())
}

#[test]
fn test_revive_edge_cases() -> Result<()> {
    run_fixture("revive_edge_cases.go", &Policy::new(true, Vec::<String>::new()))
}

#[test]
fn test_combined_options() -> Result<()> {
    let policy = Policy::from_list(true, "staticcheck,unused");
    run_fixture("combined.go", &policy)
}

#[test]
fn test_nosec_edge_cases() -> Result<()> {
    run_fixture("nosec_edge_cases.go", &Policy::new(true, Vec::<String>::new()))
}

#[test]
fn test_parse_expectations() {
    assert_eq!(
        parse_expectations(r#"	//nolint:gosec // want "a \\(b\\)" "c""#),
        vec![r"a \(b\)".to_string(), "c".to_string()]
    );
    assert!(parse_expectations("\t//nolint:errcheck").is_empty());
}
