// crates/contract-wizard-core/src/print.rs
// ============================================================================
// Module: Contract Printer
// Description: Deterministic rendering of a contract model to Stylus Rust.
// Purpose: Produce byte-stable source text for generated contracts.
// Dependencies: crate::{contract, format}
// ============================================================================

//! ## Overview
//! [`Printer::render`] is a pure function of the contract's read surface:
//! the same model always yields the same bytes. Layout, top to bottom:
//!
//! 1. license and compatibility header, documentation lines
//! 2. security contact
//! 3. crate attributes
//! 4. imports, grouped by container path and wrapped past
//!    [`MAX_USE_CLAUSE_LINE_LENGTH`]
//! 5. constants, variables, the error enum
//! 6. the storage struct
//! 7. the EIP-712 domain block when requested
//! 8. the `#[public]` impl block: constructor first, then trait sections
//!
//! Traits are ordered by `(priority, name)` with absent priorities last, then
//! grouped into sections ordered by label. Comparisons are byte-wise.
//!
//! ### Return wrapping
//! A function returning [`ReturnType::Result`] without an explicit return
//! line has its final code line wrapped as `Ok(expr)`; with no code at all
//! the body is `Ok(())`. An explicit return line is always printed verbatim
//! and disables wrapping. Plain and absent return types never wrap.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::contract::Contract;
use crate::contract::ContractFunction;
use crate::contract::Import;
use crate::contract::ImplementedTrait;
use crate::contract::ReturnType;
use crate::format::Lines;
use crate::format::format_lines;
use crate::format::space_between;

// ============================================================================
// CONSTANTS: Layout limits
// ============================================================================

/// Longest braced `use` statement printed on one line, in characters.
pub const MAX_USE_CLAUSE_LINE_LENGTH: usize = 90;

/// Longest comma-joined argument list printed inline, in characters.
pub const MAX_INLINE_ARGS_LENGTH: usize = 80;

/// Indent of wrapped `use` continuation lines.
pub const USE_CONTINUATION_INDENT: &str = "\t";

/// Section label of traits without one; sorts ahead of lettered labels.
pub const DEFAULT_SECTION: &str = "1. with no section";

/// Crate attributes printed after the header.
const CRATE_ATTRIBUTES: [&str; 2] =
    ["#![cfg_attr(not(any(test, feature = \"export-abi\")), no_main)]", "extern crate alloc;"];

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Values injected into the printed header.
///
/// # Invariants
/// - Fields are printed verbatim; no validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Library name in the compatibility comment.
    pub compatibility_label: String,
    /// Semver requirement in the compatibility comment.
    pub compatible_version: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            compatibility_label: "OpenZeppelin Contracts for Stylus".to_string(),
            compatible_version: "^0.2.0".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Printer
// ============================================================================

/// Renders contracts with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    /// Header configuration.
    config: PrinterConfig,
}

impl Printer {
    /// Creates a printer from injected configuration.
    #[must_use]
    pub const fn new(config: PrinterConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the printer configuration.
    #[must_use]
    pub const fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Renders `contract` to source text ending in exactly one newline.
    #[must_use]
    pub fn render(&self, contract: &Contract) -> String {
        let sections = sort_traits_into_sections(contract);
        let identifier = contract.name().identifier.as_str();
        format_lines(&space_between(vec![
            self.header_lines(contract),
            security_contact_lines(contract),
            CRATE_ATTRIBUTES.iter().map(|line| Lines::from(*line)).collect(),
            import_lines(contract),
            constant_lines(contract),
            variable_lines(contract),
            error_lines(contract),
            storage_lines(contract, &sections),
            eip712_lines(contract),
            public_impl_lines(contract, identifier, &sections),
        ]))
    }

    /// Returns license, compatibility and documentation comment lines.
    fn header_lines(&self, contract: &Contract) -> Vec<Lines> {
        let mut lines = vec![
            Lines::from(format!("// SPDX-License-Identifier: {}", contract.license())),
            Lines::from(format!(
                "// Compatible with {} {}",
                self.config.compatibility_label, self.config.compatible_version
            )),
        ];
        lines.extend(contract.documentation().iter().map(|line| Lines::from(format!("// {line}"))));
        lines
    }
}

/// Renders `contract` with the default [`PrinterConfig`].
///
/// # Examples
/// ```
/// use contract_wizard_core::Contract;
/// use contract_wizard_core::print_contract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let contract = Contract::new("Empty")?;
/// let text = print_contract(&contract);
/// assert!(text.starts_with("// SPDX-License-Identifier: MIT\n"));
/// assert!(text.ends_with("impl Empty {}\n"));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn print_contract(contract: &Contract) -> String {
    Printer::default().render(contract)
}

// ============================================================================
// SECTION: Header
// ============================================================================

/// Returns the security contact line when a contact is set.
fn security_contact_lines(contract: &Contract) -> Vec<Lines> {
    contract
        .security_contact()
        .map(|contact| vec![Lines::from(format!("// @custom:security-contact {contact}"))])
        .unwrap_or_default()
}

// ============================================================================
// SECTION: Imports
// ============================================================================

/// Renders all imports, grouped and wrapped.
fn import_lines(contract: &Contract) -> Vec<Lines> {
    let mut imports: Vec<&Import> = contract.imports().collect();
    imports.sort_by_cached_key(|import| import.sort_key());

    let mut groups: Vec<(Option<&str>, Vec<&Import>)> = Vec::new();
    for import in imports {
        let group_key = import.groupable.then_some(import.container_path.as_str());
        if let Some((_, members)) = groups.iter_mut().find(|(key, _)| *key == group_key) {
            members.push(import);
        } else {
            groups.push((group_key, vec![import]));
        }
    }

    let mut lines = Vec::new();
    for (group_key, members) in groups {
        match group_key {
            Some(container_path) => lines.extend(grouped_use_lines(container_path, &members)),
            None => lines.extend(members.iter().map(|import| {
                Lines::from(format!("use {}::{};", import.container_path, import.name_with_alias()))
            })),
        }
    }
    lines
}

/// Renders one container path's imports as a single, possibly wrapped, statement.
fn grouped_use_lines(container_path: &str, members: &[&Import]) -> Vec<Lines> {
    let names: Vec<String> = members.iter().map(|import| import.name_with_alias()).collect();
    if let [name] = names.as_slice() {
        return vec![Lines::from(format!("use {container_path}::{name};"))];
    }
    let line = format!("use {container_path}::{{{}}};", names.join(", "));
    if width(&line) <= MAX_USE_CLAUSE_LINE_LENGTH {
        return vec![Lines::from(line)];
    }
    let mut lines = vec![Lines::from(format!("use {container_path}::{{"))];
    lines.extend(pack_names(&names).into_iter().map(Lines::from));
    lines.push(Lines::from("};"));
    lines
}

/// Greedily packs names onto continuation lines no longer than the limit.
///
/// Every line but the last ends with a comma. A name too long for any line
/// sits alone on its line.
fn pack_names(names: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for (position, name) in names.iter().enumerate() {
        let separator = if position + 1 == names.len() { "" } else { "," };
        if current.is_empty() {
            current = format!("{USE_CONTINUATION_INDENT}{name}{separator}");
            continue;
        }
        if width(&current) + 1 + width(name) + separator.len() > MAX_USE_CLAUSE_LINE_LENGTH {
            lines.push(current);
            current = format!("{USE_CONTINUATION_INDENT}{name}{separator}");
        } else {
            current.push(' ');
            current.push_str(name);
            current.push_str(separator);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width of `text`, counted in characters.
fn width(text: &str) -> usize {
    text.chars().count()
}

// ============================================================================
// SECTION: Named Records
// ============================================================================

/// Renders constants with their comments.
fn constant_lines(contract: &Contract) -> Vec<Lines> {
    let mut lines = Vec::new();
    for constant in contract.constants() {
        let declaration = format!("const {}: {} = {};", constant.name, constant.ty, constant.value);
        match (&constant.comment, constant.inline_comment) {
            (Some(comment), true) => lines.push(Lines::from(format!("{declaration} // {comment}"))),
            (Some(comment), false) => {
                lines.push(Lines::from(format!("// {comment}")));
                lines.push(Lines::from(declaration));
            }
            (None, _) => lines.push(Lines::from(declaration)),
        }
    }
    lines
}

/// Renders variables as module-level constants.
fn variable_lines(contract: &Contract) -> Vec<Lines> {
    contract
        .variables()
        .map(|variable| {
            Lines::from(format!("const {}: {} = {};", variable.name, variable.ty, variable.value))
        })
        .collect()
}

/// Renders the error enum when any variant is registered.
fn error_lines(contract: &Contract) -> Vec<Lines> {
    let variants: Vec<Lines> = contract
        .errors()
        .map(|error| match error.ordinal {
            Some(ordinal) => Lines::from(format!("{} = {ordinal},", error.name)),
            None => Lines::from(format!("{},", error.name)),
        })
        .collect();
    if variants.is_empty() {
        return Vec::new();
    }
    vec![
        Lines::from("#[derive(Clone, Copy, Debug, PartialEq, Eq)]"),
        Lines::from("#[repr(u32)]"),
        Lines::from(format!("pub enum {}Error {{", contract.name().identifier)),
        Lines::Indented(variants),
        Lines::from("}"),
    ]
}

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Traits grouped by section label, labels in order.
type Sections<'a> = BTreeMap<&'a str, Vec<&'a ImplementedTrait>>;

/// Sorts traits by priority then name and groups them by section.
fn sort_traits_into_sections(contract: &Contract) -> Sections<'_> {
    let mut traits: Vec<&ImplementedTrait> = contract.traits().collect();
    traits.sort_by(|left, right| {
        let left_key = (left.priority.is_none(), left.priority, left.name.as_str());
        let right_key = (right.priority.is_none(), right.priority, right.name.as_str());
        left_key.cmp(&right_key)
    });
    let mut sections: Sections<'_> = BTreeMap::new();
    for implemented in traits {
        let label = implemented.section.as_deref().unwrap_or(DEFAULT_SECTION);
        sections.entry(label).or_default().push(implemented);
    }
    sections
}

/// Iterates traits in printed order across all sections.
fn ordered_traits<'a>(sections: &'a Sections<'a>) -> impl Iterator<Item = &'a ImplementedTrait> {
    sections.values().flat_map(|traits| traits.iter().copied())
}

/// Renders the storage struct.
fn storage_lines(contract: &Contract, sections: &Sections<'_>) -> Vec<Lines> {
    let mut fields = Vec::new();
    for storage in ordered_traits(sections).filter_map(|implemented| implemented.storage.as_ref()) {
        fields.push(Lines::from("#[borrow]"));
        fields.push(Lines::from(format!("{}: {},", storage.name, storage.ty)));
    }
    for storage in contract.storage() {
        fields.push(Lines::from(format!("{}: {},", storage.name, storage.ty)));
    }
    let identifier = &contract.name().identifier;
    let mut lines = vec![Lines::from("#[entrypoint]"), Lines::from("#[storage]")];
    if fields.is_empty() {
        lines.push(Lines::from(format!("struct {identifier} {{}}")));
    } else {
        lines.push(Lines::from(format!("struct {identifier} {{")));
        lines.push(Lines::Indented(fields));
        lines.push(Lines::from("}"));
    }
    lines
}

/// Renders the EIP-712 domain block when requested.
fn eip712_lines(contract: &Contract) -> Vec<Lines> {
    if !contract.eip712_needed() {
        return Vec::new();
    }
    vec![
        Lines::from("#[storage]"),
        Lines::from("struct Eip712 {}"),
        Lines::Blank,
        Lines::from("impl IEip712 for Eip712 {"),
        Lines::Indented(vec![
            Lines::from(format!(
                "const NAME: &'static str = \"{}\";",
                contract.name().string_literal
            )),
            Lines::from("const VERSION: &'static str = \"1\";"),
        ]),
        Lines::from("}"),
    ]
}

/// Renders the `#[public]` impl block.
fn public_impl_lines(contract: &Contract, identifier: &str, sections: &Sections<'_>) -> Vec<Lines> {
    let inherited: Vec<&str> = ordered_traits(sections)
        .filter(|implemented| !implemented.omit_inherit)
        .filter_map(|implemented| implemented.storage.as_ref().map(|storage| storage.ty.as_str()))
        .collect();

    let mut blocks = vec![constructor_lines(contract)];
    blocks.extend(sections.iter().map(|(label, traits)| section_lines(label, traits)));
    let body = space_between(blocks);

    let mut lines = vec![Lines::from("#[public]")];
    if !inherited.is_empty() {
        lines.push(Lines::from(format!("#[inherit({})]", inherited.join(", "))));
    }
    if body.is_empty() {
        lines.push(Lines::from(format!("impl {identifier} {{}}")));
    } else {
        lines.push(Lines::from(format!("impl {identifier} {{")));
        lines.push(Lines::Indented(body));
        lines.push(Lines::from("}"));
    }
    lines
}

/// Renders the constructor when it has arguments or code.
fn constructor_lines(contract: &Contract) -> Vec<Lines> {
    let args: Vec<String> = contract.constructor_args().map(|arg| arg.render()).collect();
    if args.is_empty() && contract.constructor_code().is_empty() {
        return Vec::new();
    }
    let mut all_args = vec!["&mut self".to_string()];
    all_args.extend(args);
    let returns = ReturnType::result("()", "Vec<u8>");
    let body = assemble_body(&[], contract.constructor_code(), Some(&returns), Some("Ok(())"));
    FunctionLayout {
        comments: &[],
        attributes: vec!["constructor".to_string()],
        head: "pub fn constructor",
        args: all_args,
        returns: Some(returns),
        body,
    }
    .render()
}

/// Renders one section: optional banner, then its functions.
fn section_lines(label: &str, traits: &[&ImplementedTrait]) -> Vec<Lines> {
    let mut blocks = Vec::new();
    if label != DEFAULT_SECTION {
        blocks.push(vec![Lines::from("//"), Lines::from(format!("// {label}")), Lines::from("//")]);
    }
    for implemented in traits {
        blocks.extend(implemented.functions().map(function_lines));
    }
    if blocks.len() == 1 && label != DEFAULT_SECTION {
        return Vec::new();
    }
    space_between(blocks)
}

// ============================================================================
// SECTION: Functions
// ============================================================================

/// Printable pieces of a function.
struct FunctionLayout<'a> {
    /// Comment lines printed verbatim.
    comments: &'a [String],
    /// Attributes without `#[..]`.
    attributes: Vec<String>,
    /// Text before the argument list, e.g. `fn name`.
    head: &'a str,
    /// Rendered arguments.
    args: Vec<String>,
    /// Optional return type.
    returns: Option<ReturnType>,
    /// Assembled body lines.
    body: Vec<String>,
}

impl FunctionLayout<'_> {
    /// Renders the function.
    fn render(&self) -> Vec<Lines> {
        let mut lines: Vec<Lines> =
            self.comments.iter().map(|line| Lines::from(line.as_str())).collect();
        lines.extend(
            self.attributes.iter().map(|attribute| Lines::from(format!("#[{attribute}]"))),
        );

        let joined = self.args.join(", ");
        let mut signature = format!("{}(", self.head);
        if width(&joined) > MAX_INLINE_ARGS_LENGTH {
            lines.push(Lines::from(signature));
            lines.push(Lines::Indented(
                self.args.iter().map(|arg| Lines::from(format!("{arg},"))).collect(),
            ));
            signature = String::new();
        } else {
            signature.push_str(&joined);
        }
        signature.push(')');
        if let Some(returns) = &self.returns {
            signature.push_str(" -> ");
            signature.push_str(&returns.render());
        }

        if self.body.is_empty() {
            signature.push_str(" {}");
            lines.push(Lines::from(signature));
            return lines;
        }
        signature.push_str(" {");
        lines.push(Lines::from(signature));
        lines.push(Lines::Indented(
            self.body.iter().map(|line| Lines::from(line.as_str())).collect(),
        ));
        lines.push(Lines::from("}"));
        lines
    }
}

/// Renders a trait function.
fn function_lines(function: &ContractFunction) -> Vec<Lines> {
    let mut attributes: Vec<String> = function.attribute.iter().cloned().collect();
    attributes.extend(function.tags.iter().cloned());
    let head = format!("fn {}", function.name);
    FunctionLayout {
        comments: &function.comments,
        attributes,
        head: &head,
        args: function.args.iter().map(|arg| arg.render()).collect(),
        returns: function.returns.clone(),
        body: assemble_body(
            &function.prologue,
            &function.code,
            function.returns.as_ref(),
            function.return_line.as_deref(),
        ),
    }
    .render()
}

/// Assembles prologue, code and the return line according to the return type.
///
/// # Examples
/// ```
/// use contract_wizard_core::ReturnType;
/// use contract_wizard_core::print::assemble_body;
///
/// let returns = ReturnType::result("bool", "Vec<u8>");
/// let code = vec!["self.erc20.transfer(to, value)?;".to_string()];
/// let body = assemble_body(&[], &code, Some(&returns), None);
/// assert_eq!(body, vec!["Ok(self.erc20.transfer(to, value)?)"]);
/// let body = assemble_body(&[], &code, Some(&returns), Some("Ok(true)"));
/// assert_eq!(body, vec!["self.erc20.transfer(to, value)?;", "Ok(true)"]);
/// ```
#[must_use]
pub fn assemble_body(
    prologue: &[String],
    code: &[String],
    returns: Option<&ReturnType>,
    return_line: Option<&str>,
) -> Vec<String> {
    let mut body = prologue.to_vec();
    match (returns, return_line) {
        (_, Some(line)) => {
            body.extend_from_slice(code);
            body.push(line.to_string());
        }
        (Some(ReturnType::Result { .. }), None) => match code.split_last() {
            Some((last, rest)) => {
                body.extend_from_slice(rest);
                body.push(wrap_ok(last));
            }
            None => body.push("Ok(())".to_string()),
        },
        (Some(ReturnType::Plain(_)) | None, None) => body.extend_from_slice(code),
    }
    body
}

/// Wraps an expression line as `Ok(expr)`, dropping a trailing semicolon.
fn wrap_ok(line: &str) -> String {
    let trimmed = line.trim_end();
    let expression = trimmed.strip_suffix(';').unwrap_or(trimmed);
    format!("Ok({expression})")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
