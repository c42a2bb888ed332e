// crates/contract-wizard-core/tests/proptest_printer.rs
// ============================================================================
// Module: Printer Property-Based Tests
// Description: Idempotence, determinism, import wrapping and return wrapping.
// Purpose: Hold the printer to its byte-stability contract across inputs.
// ============================================================================

//! Property-based tests for builder idempotence and printer layout laws.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use contract_wizard_core::Argument;
use contract_wizard_core::Constant;
use contract_wizard_core::Contract;
use contract_wizard_core::ErrorVariant;
use contract_wizard_core::FunctionSpec;
use contract_wizard_core::ImportOptions;
use contract_wizard_core::ReturnType;
use contract_wizard_core::Storage;
use contract_wizard_core::TraitSpec;
use contract_wizard_core::Variable;
use contract_wizard_core::print::MAX_USE_CLAUSE_LINE_LENGTH;
use contract_wizard_core::print_contract;
use proptest::prelude::*;

// ============================================================================
// SECTION: Builder Operations
// ============================================================================

/// Idempotent builder operation encoded as `(kind, a, b)`.
type Op = (u8, u8, u8);

/// Trait request for index `a`.
fn trait_spec(a: u8) -> TraitSpec {
    let spec = TraitSpec::new(format!("Trait{a}")).with_storage(format!("field{a}"), format!("Trait{a}"));
    if a % 2 == 0 { spec.with_priority(u32::from(a)) } else { spec.with_section(format!("Section {a}")) }
}

/// Function request for index `b`.
fn function_spec(b: u8) -> FunctionSpec {
    FunctionSpec::new(format!("function{b}"), vec![Argument::untyped("&mut self")])
        .with_code([format!("self.work{b}()?;")])
        .returning(ReturnType::result("()", "Vec<u8>"))
}

/// Applies one idempotent operation.
fn apply(contract: &mut Contract, (kind, a, b): Op) {
    match kind % 8 {
        0 => {
            contract.add_trait(&trait_spec(a));
        }
        1 => {
            contract.add_function(&trait_spec(a), &function_spec(b));
        }
        2 => {
            contract.add_import(&format!("lib::module{a}"), &format!("Item{b}"), ImportOptions::default());
        }
        3 => {
            contract.add_constant(Constant::new(format!("CONST_{a}"), "u32", format!("{b}")));
        }
        4 => {
            contract.add_variable(Variable::new(format!("VAR_{a}"), "u32", format!("{b}")));
        }
        5 => {
            contract.add_error(ErrorVariant::new(format!("Error{a}"), u32::from(b)));
        }
        6 => {
            contract.add_storage(Storage::new(format!("slot{a}"), "StorageU256"));
        }
        _ => contract.add_function_tag(&trait_spec(a), &function_spec(b), "allow(unused)"),
    }
}

// ============================================================================
// SECTION: Import Helpers
// ============================================================================

/// Extracts the imported names of `container` from printed text.
fn imported_names(text: &str, container: &str) -> Option<BTreeSet<String>> {
    let single_prefix = format!("use {container}::");
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.iter().position(|line| line.starts_with(&single_prefix))?;
    let first = lines[start].strip_prefix(&single_prefix)?;
    let joined = if first == "{" {
        let end = lines[start ..].iter().position(|line| *line == "};")? + start;
        lines[start + 1 .. end].concat()
    } else {
        first.trim_end_matches(';').trim_start_matches('{').trim_end_matches('}').to_string()
    };
    Some(
        joined
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
    )
}

// ============================================================================
// SECTION: Return Wrapping Matrix
// ============================================================================

/// Renders a single function and returns its body lines.
fn body_of(returns: Option<ReturnType>, return_line: Option<&str>, code: &[&str]) -> Vec<String> {
    let mut contract = Contract::new("Matrix").unwrap();
    let mut spec = FunctionSpec::new("run", vec![Argument::untyped("&mut self")]).with_code(code.iter().copied());
    spec.returns = returns;
    spec.return_line = return_line.map(str::to_string);
    contract.add_function(&TraitSpec::new("Runner"), &spec);
    let text = print_contract(&contract);
    text.lines()
        .skip_while(|line| !line.trim_start().starts_with("fn run("))
        .skip(1)
        .take_while(|line| line.trim() != "}")
        .map(|line| line.trim().to_string())
        .collect()
}

#[test]
fn result_without_return_line_wraps_final_expression() {
    let body = body_of(Some(ReturnType::result("()", "Vec<u8>")), None, &["doWork()"]);
    assert_eq!(body, vec!["Ok(doWork())"]);
}

#[test]
fn result_with_return_line_is_printed_literally() {
    let body = body_of(Some(ReturnType::result("bool", "Vec<u8>")), Some("Ok(true)"), &["doWork()"]);
    assert_eq!(body, vec!["doWork()", "Ok(true)"]);
}

#[test]
fn plain_return_without_return_line_keeps_code() {
    let body = body_of(Some(ReturnType::plain("U256")), None, &["let x = 1;", "doWork()"]);
    assert_eq!(body, vec!["let x = 1;", "doWork()"]);
}

#[test]
fn plain_return_with_return_line_appends_it() {
    let body = body_of(Some(ReturnType::plain("U256")), Some("value"), &["let value = doWork();"]);
    assert_eq!(body, vec!["let value = doWork();", "value"]);
}

#[test]
fn no_return_type_keeps_code() {
    let body = body_of(None, None, &["doWork();"]);
    assert_eq!(body, vec!["doWork();"]);
}

#[test]
fn result_wrapping_strips_trailing_semicolon_of_last_line_only() {
    let body = body_of(Some(ReturnType::result("()", "Vec<u8>")), None, &["first()?;", "second()?;"]);
    assert_eq!(body, vec!["first()?;", "Ok(second()?)"]);
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn repeated_idempotent_operations_change_nothing(
        ops in prop::collection::vec((0_u8 .. 8, 0_u8 .. 4, 0_u8 .. 4), 0 .. 24),
    ) {
        let mut once = Contract::new("Prop Token").unwrap();
        let mut twice = Contract::new("Prop Token").unwrap();
        for op in &ops {
            apply(&mut once, *op);
            apply(&mut twice, *op);
            apply(&mut twice, *op);
        }
        for op in &ops {
            apply(&mut twice, *op);
        }
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(print_contract(&once), print_contract(&twice));
    }

    #[test]
    fn rendering_is_deterministic(
        ops in prop::collection::vec((0_u8 .. 8, 0_u8 .. 4, 0_u8 .. 4), 0 .. 24),
    ) {
        let mut contract = Contract::new("Prop Token").unwrap();
        for op in ops {
            apply(&mut contract, op);
        }
        let first = print_contract(&contract);
        prop_assert_eq!(&first, &print_contract(&contract));
        prop_assert!(first.ends_with('\n') && !first.ends_with("\n\n"));
        prop_assert!(!first.starts_with('\n'));
        prop_assert!(!first.contains("\n\n\n"));
    }

    #[test]
    fn wrapped_imports_round_trip(
        container in "lib(::[a-z][a-z_]{0,11}){0,3}",
        names in prop::collection::btree_set("[A-Z][A-Za-z0-9]{0,20}", 1 .. 16),
    ) {
        let mut contract = Contract::new("Imports").unwrap();
        for name in &names {
            contract.add_import(&container, name, ImportOptions::default());
        }
        let text = print_contract(&contract);
        let parsed = imported_names(&text, &container).unwrap();
        prop_assert_eq!(parsed, names);
        for line in text.lines().filter(|line| line.starts_with('\t')) {
            prop_assert!(line.len() <= MAX_USE_CLAUSE_LINE_LENGTH);
        }
    }
}
