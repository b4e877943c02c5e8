//! nolintguard - nolint directive policy checker for Go
//!
//! nolintguard is a CLI tool and library that enforces organizational policy
//! around suppression directives in Go source code. It forbids
//! `//nolint:gosec` and `//nolint:revive` (and optionally other linters), and
//! can require `#nosec`, `//gosec:` and `//revive:` directives to carry a
//! human-readable justification.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Comment extraction, file scanning and the check pipeline
//! - `directives`: Directive classification and linter list parsing
//! - `issues`: Issue type definitions and reporting
//! - `justification`: Justification checks for security and style directives
//! - `policy`: Policy evaluation of individual comments

pub mod cli;
pub mod config;
pub mod core;
pub mod directives;
pub mod issues;
pub mod justification;
pub mod policy;
