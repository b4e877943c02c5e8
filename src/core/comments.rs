//! Go comment extraction.
//!
//! Parses Go source with tree-sitter and yields every comment token in
//! source order. String and rune literals that merely contain `//` are
//! not comments and are never reported.

use anyhow::{Result, anyhow};
use tree_sitter::{Language, Node, Parser};

use crate::core::{SourceContext, SourceLocation};

/// A comment token as handed to the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Raw comment text including its markers (`//` or `/* */`).
    pub text: String,
    /// Where the comment starts.
    pub context: SourceContext,
}

/// Comments extracted from a single Go file.
#[derive(Debug, Default)]
pub struct ParsedGo {
    pub comments: Vec<Comment>,
    /// True if tree-sitter had to recover from syntax errors.
    /// Comments are still extracted in that case.
    pub has_syntax_errors: bool,
}

fn go_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Parse Go source code and collect its comments.
pub fn parse_go_source(source: &str, file_path: &str) -> Result<ParsedGo> {
    let mut parser = Parser::new();
    parser.set_language(&go_language())?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("Failed to parse Go source: {}", file_path))?;
    let root = tree.root_node();

    let lines: Vec<&str> = source.lines().collect();
    let mut comments = Vec::new();

    let mut cursor = root.walk();
    'walk: loop {
        let node = cursor.node();
        if node.kind() == "comment" {
            comments.push(make_comment(node, source, file_path, &lines));
        }

        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    Ok(ParsedGo {
        comments,
        has_syntax_errors: root.has_error(),
    })
}

fn make_comment(node: Node<'_>, source: &str, file_path: &str, lines: &[&str]) -> Comment {
    let start = node.start_position();
    let source_line = lines.get(start.row).copied().unwrap_or_default();

    // tree-sitter columns are byte offsets
    let col = source_line
        .get(..start.column)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(start.column)
        + 1;

    Comment {
        text: source[node.byte_range()].to_string(),
        context: SourceContext::new(
            SourceLocation::new(file_path, start.row + 1, col),
            source_line,
        ),
    }
}
