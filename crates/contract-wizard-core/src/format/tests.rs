// crates/contract-wizard-core/src/format/tests.rs
// ============================================================================
// Module: Line Formatting Unit Tests
// Description: Unit coverage for blank-line normalization and indentation.
// Purpose: Ensure printed text never carries stray blank lines.
// Dependencies: contract-wizard-core
// ============================================================================

//! ## Overview
//! Verifies blank-line collapsing, trimming and nested indentation.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::Lines;
use super::format_lines;
use super::space_between;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn blank_runs_collapse_and_ends_are_trimmed() {
    let text = format_lines(&[
        Lines::Blank,
        "".into(),
        "a".into(),
        Lines::Blank,
        "".into(),
        Lines::Blank,
        "b".into(),
        Lines::Blank,
    ]);
    assert_eq!(text, "a\n\nb\n");
}

#[test]
fn nested_blocks_indent_four_spaces_per_level() {
    let text = format_lines(&[
        "impl A {".into(),
        Lines::Indented(vec![
            "fn f() {".into(),
            Lines::Indented(vec!["x();".into()]),
            "}".into(),
        ]),
        "}".into(),
    ]);
    assert_eq!(text, "impl A {\n    fn f() {\n        x();\n    }\n}\n");
}

#[test]
fn blank_lines_inside_blocks_carry_no_indentation() {
    let text = format_lines(&[Lines::Indented(vec!["a".into(), Lines::Blank, "b".into()])]);
    assert_eq!(text, "    a\n\n    b\n");
}

#[test]
fn space_between_skips_empty_groups() {
    let lines = space_between(vec![vec!["a".into()], Vec::new(), vec!["b".into(), "c".into()]]);
    assert_eq!(lines, vec![Lines::from("a"), Lines::Blank, "b".into(), "c".into()]);
}
