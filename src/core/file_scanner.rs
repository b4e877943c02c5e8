use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Directory names skipped below the scan root, following the go tool.
const SKIPPED_DIR_NAMES: &[&str] = &["vendor", "testdata"];

/// Result of scanning files.
pub struct ScanResult {
    /// Go files to check, sorted.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Collect `.go` files below `paths`.
///
/// Each path may be a file or a directory. Explicit file arguments are
/// always checked, even when they would be skipped during a directory walk.
pub fn scan_files(
    paths: &[PathBuf],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> Result<ScanResult> {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let patterns = ignore_patterns
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    for root in paths {
        if !root.exists() {
            bail!("Path does not exist: {}", root.display());
        }

        if root.is_file() {
            files.insert(display_path(root));
            continue;
        }

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_go_file(path) {
                continue;
            }

            let path_str = display_path(path);
            if ignore_test_files && path_str.ends_with("_test.go") {
                continue;
            }
            if patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            files.insert(path_str);
        }
    }

    Ok(ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    })
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.starts_with('_') || SKIPPED_DIR_NAMES.contains(&name.as_ref())
}

fn is_go_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("go"))
}

/// Path as shown in reports: `./pkg/a.go` becomes `pkg/a.go`.
fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
