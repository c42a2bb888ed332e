// crates/contract-wizard-core/src/contract/tests.rs
// ============================================================================
// Module: Contract Builder Unit Tests
// Description: Unit coverage for idempotent merge semantics.
// Purpose: Ensure keyed builder operations collapse repeated requests.
// Dependencies: contract-wizard-core
// ============================================================================

//! ## Overview
//! Exercises the builder's first-registration-wins rules for traits,
//! functions, imports and named records, and the append-only behavior of
//! constructor code and function prologues.

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

use crate::Argument;
use crate::Constant;
use crate::Contract;
use crate::ErrorVariant;
use crate::FunctionSpec;
use crate::ImportOptions;
use crate::ReturnType;
use crate::Storage;
use crate::TraitSpec;
use crate::Variable;
use crate::naming::EMPTY_IDENTIFIER_MESSAGE;

/// Result type used by builder tests.
type TestResult = Result<(), String>;

/// Returns a trait request backed by storage.
fn erc20_trait() -> TraitSpec {
    TraitSpec::new("Erc20")
        .with_module_path("openzeppelin_stylus::token::erc20")
        .with_storage("erc20", "Erc20")
}

/// Returns a simple function request.
fn transfer(code: &str) -> FunctionSpec {
    FunctionSpec::new(
        "transfer",
        vec![
            Argument::untyped("&mut self"),
            Argument::new("to", "Address"),
            Argument::new("value", "U256"),
        ],
    )
    .with_code([code])
    .returning(ReturnType::result("bool", "Vec<u8>"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn new_rejects_name_without_identifier_characters() -> TestResult {
    let Err(err) = Contract::new("1234 !!") else {
        return Err("expected naming error".to_string());
    };
    if err.fields.get("name").map(String::as_str) != Some(EMPTY_IDENTIFIER_MESSAGE) {
        return Err(format!("unexpected fields: {:?}", err.fields));
    }
    Ok(())
}

#[test]
fn new_escapes_string_literal() -> TestResult {
    let contract = Contract::new("My \"Quoted\" Token").map_err(|err| err.to_string())?;
    if contract.name().identifier != "MyQuotedToken" {
        return Err(format!("unexpected identifier {}", contract.name().identifier));
    }
    if contract.name().string_literal != "My \\\"Quoted\\\" Token" {
        return Err(format!("unexpected literal {}", contract.name().string_literal));
    }
    Ok(())
}

#[test]
fn repeated_trait_keeps_first_registration() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    contract.add_trait(&erc20_trait());
    contract.add_trait(&TraitSpec::new("Erc20").with_priority(1).with_section("Other"));
    let stored = contract.get_trait("Erc20").ok_or("missing trait")?;
    if stored.priority.is_some() || stored.section.is_some() || stored.storage.is_none() {
        return Err("second trait request must not alter the first".to_string());
    }
    let trait_imports =
        contract.imports().filter(|import| import.name == "Erc20").count();
    if trait_imports != 1 {
        return Err(format!("expected one trait import, found {trait_imports}"));
    }
    Ok(())
}

#[test]
fn function_identity_ignores_argument_types_and_body() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    contract.add_function(&erc20_trait(), &transfer("self.erc20.transfer(to, value)?"));
    let mut retyped = transfer("unreachable_body()");
    retyped.args[2] = Argument::new("value", "u64");
    let merged = contract.add_function(&erc20_trait(), &retyped);
    if merged.code != ["self.erc20.transfer(to, value)?"] {
        return Err(format!("existing function body changed: {:?}", merged.code));
    }
    if merged.args[2].ty.as_deref() != Some("U256") {
        return Err("existing argument types changed".to_string());
    }
    let count = contract.get_trait("Erc20").ok_or("missing trait")?.functions().count();
    if count != 1 {
        return Err(format!("expected one function, found {count}"));
    }
    Ok(())
}

#[test]
fn functions_with_different_argument_names_are_distinct() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    contract.add_function(&erc20_trait(), &transfer("a()"));
    let mut renamed = transfer("b()");
    renamed.args[1] = Argument::new("recipient", "Address");
    contract.add_function(&erc20_trait(), &renamed);
    let signatures: Vec<&str> = contract
        .get_trait("Erc20")
        .ok_or("missing trait")?
        .function_signatures()
        .collect();
    if signatures != ["transfer(&mut self,to,value)", "transfer(&mut self,recipient,value)"] {
        return Err(format!("unexpected signatures {signatures:?}"));
    }
    Ok(())
}

#[test]
fn prologue_lines_accumulate_in_order() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    let function = transfer("self.erc20.transfer(to, value)?");
    contract.add_function_prologue(&erc20_trait(), &function, ["self.pausable.when_not_paused()?;"]);
    contract.add_function_prologue(&erc20_trait(), &function, ["first();", "second();"]);
    let stored = contract.add_function(&erc20_trait(), &function);
    if stored.prologue != ["self.pausable.when_not_paused()?;", "first();", "second();"] {
        return Err(format!("unexpected prologue {:?}", stored.prologue));
    }
    Ok(())
}

#[test]
fn function_tags_are_idempotent() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    let function = transfer("x()");
    contract.add_function_tag(&erc20_trait(), &function, "allow(clippy::too_many_arguments)");
    contract.add_function_tag(&erc20_trait(), &function, "allow(clippy::too_many_arguments)");
    contract.add_function_tag(&erc20_trait(), &function, "selector(name = \"transfer\")");
    let stored = contract.add_function(&erc20_trait(), &function);
    if stored.tags.len() != 2 {
        return Err(format!("unexpected tags {:?}", stored.tags));
    }
    Ok(())
}

#[test]
fn first_import_registration_wins() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    if !contract.add_import("alloy_primitives", "Address", ImportOptions::default()) {
        return Err("first import should be new".to_string());
    }
    if contract.add_import("other::path", "Address", ImportOptions::standalone()) {
        return Err("conflicting import should be dropped".to_string());
    }
    if !contract.add_import("other::path", "Address", ImportOptions::aliased("OtherAddress")) {
        return Err("aliased import has its own identity".to_string());
    }
    let address = contract
        .imports()
        .find(|import| import.identity_key() == "Address")
        .ok_or("missing import")?;
    if address.container_path != "alloy_primitives" || !address.groupable {
        return Err("first registration must be preserved".to_string());
    }
    Ok(())
}

#[test]
fn named_records_report_new_insertions_once() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    let firsts = [
        contract.add_variable(Variable::new("URI", "&str", "\"a\"")),
        contract.add_constant(Constant::new("ROLE", "[u8; 32]", "[0; 32]")),
        contract.add_error(ErrorVariant::new("Overflow", 1)),
        contract.add_storage(Storage::new("counter", "StorageU256")),
        contract.add_constructor_argument(Argument::new("owner", "Address")),
    ];
    let seconds = [
        contract.add_variable(Variable::new("URI", "&str", "\"b\"")),
        contract.add_constant(Constant::new("ROLE", "u8", "1")),
        contract.add_error(ErrorVariant::new("Overflow", 2)),
        contract.add_storage(Storage::new("counter", "StorageU8")),
        contract.add_constructor_argument(Argument::new("owner", "U256")),
    ];
    if firsts != [true; 5] || seconds != [false; 5] {
        return Err(format!("unexpected insert results {firsts:?} {seconds:?}"));
    }
    if contract.variables().map(|variable| variable.value.as_str()).collect::<Vec<_>>() != ["\"a\""]
    {
        return Err("variable value was replaced".to_string());
    }
    Ok(())
}

#[test]
fn constructor_code_is_never_deduplicated() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    contract.add_constructor_code("self.mint()?;");
    contract.add_constructor_code("self.mint()?;");
    if contract.constructor_code().len() != 2 {
        return Err("constructor code must append".to_string());
    }
    Ok(())
}

#[test]
fn rename_keeps_previous_name_on_error() -> TestResult {
    let mut contract = Contract::new("Token").map_err(|err| err.to_string())?;
    if contract.rename("").is_ok() {
        return Err("empty rename must fail".to_string());
    }
    contract.rename("Contract 7").map_err(|err| err.to_string())?;
    if contract.name().identifier != "Contract7" {
        return Err(format!("unexpected identifier {}", contract.name().identifier));
    }
    Ok(())
}
