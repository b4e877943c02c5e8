//! Core analysis: comment extraction, file scanning and the check pipeline.
//!
//! ## Module Structure
//!
//! - `comments`: Go comment extraction with tree-sitter
//! - `context`: `CheckContext`, which loads config, scans and checks files
//! - `file_scanner`: Go file discovery
//! - `source`: Source location types (SourceContext, SourceLocation)

pub mod comments;
pub mod context;
pub mod file_scanner;
pub mod source;

pub use comments::{Comment, ParsedGo, parse_go_source};
pub use context::CheckContext;
pub use source::{SourceContext, SourceLocation};
