// crates/contract-wizard-core/src/format.rs
// ============================================================================
// Module: Line Formatting
// Description: Nested line trees rendered with fixed indentation.
// Purpose: Normalize blank lines and indentation for printed sources.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The printer builds output as a tree of [`Lines`]: plain lines, blank
//! separators and indented blocks. [`format_lines`] flattens the tree, indents
//! nested blocks by four spaces per level, collapses runs of blank lines,
//! trims blank lines at both ends and terminates the text with one newline.

// ============================================================================
// CONSTANTS: Indentation
// ============================================================================

/// Indent unit for nested blocks.
pub const INDENT: &str = "    ";

// ============================================================================
// SECTION: Line Tree
// ============================================================================

/// Node of a printable line tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lines {
    /// A single line of text.
    Line(String),
    /// A blank separator line.
    Blank,
    /// Lines indented one level deeper than their parent.
    Indented(Vec<Self>),
}

impl From<String> for Lines {
    fn from(value: String) -> Self {
        Self::Line(value)
    }
}

impl From<&str> for Lines {
    fn from(value: &str) -> Self {
        Self::Line(value.to_string())
    }
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Joins non-empty groups with one blank line between them.
#[must_use]
pub fn space_between(groups: Vec<Vec<Lines>>) -> Vec<Lines> {
    let mut out = Vec::new();
    for group in groups.into_iter().filter(|group| !group.is_empty()) {
        if !out.is_empty() {
            out.push(Lines::Blank);
        }
        out.extend(group);
    }
    out
}

/// Renders a line tree to text.
///
/// # Examples
/// ```
/// use contract_wizard_core::format::Lines;
/// use contract_wizard_core::format::format_lines;
///
/// let text = format_lines(&[
///     Lines::Blank,
///     "fn f() {".into(),
///     Lines::Indented(vec!["g();".into(), Lines::Blank, Lines::Blank, "h();".into()]),
///     "}".into(),
///     Lines::Blank,
/// ]);
/// assert_eq!(text, "fn f() {\n    g();\n\n    h();\n}\n");
/// ```
#[must_use]
pub fn format_lines(lines: &[Lines]) -> String {
    let mut flat = Vec::new();
    flatten(lines, 0, &mut flat);
    let mut out = String::new();
    let mut previous_blank = true;
    let mut pending_blank = false;
    for line in flat {
        if line.is_empty() {
            if !previous_blank {
                pending_blank = true;
            }
            previous_blank = true;
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(&line);
        out.push('\n');
        previous_blank = false;
    }
    out
}

/// Flattens a tree into indented lines; blank lines carry no indentation.
fn flatten(lines: &[Lines], depth: usize, out: &mut Vec<String>) {
    for line in lines {
        match line {
            Lines::Indented(children) => flatten(children, depth + 1, out),
            Lines::Line(text) if !text.is_empty() => {
                out.push(format!("{}{text}", INDENT.repeat(depth)));
            }
            Lines::Line(_) | Lines::Blank => out.push(String::new()),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
