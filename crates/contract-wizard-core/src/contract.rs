// crates/contract-wizard-core/src/contract.rs
// ============================================================================
// Module: Contract Model & Builder
// Description: In-memory contract model with idempotent merge operations.
// Purpose: Accumulate declarative facts about a generated contract.
// Dependencies: crate::{keyed_store, naming}
// ============================================================================

//! ## Overview
//! A [`Contract`] accumulates traits, functions, imports, constructor pieces
//! and named records during a single synchronous build pass. Every `add_*`
//! operation keyed by a name is idempotent: the first registration wins and
//! later requests with the same key return or keep the existing entry.
//!
//! Two accumulations are not idempotent and preserve insertion order:
//! constructor code lines and function prologue lines.
//!
//! ### Function identity
//! Functions are deduplicated per trait by their name plus the ordered list
//! of argument *names* (see [`FunctionSpec::signature`]). Argument types do
//! not participate. A repeated request returns the existing function
//! unmodified; only prologue lines and tags can be added afterwards.
//!
//! ### Imports
//! Imports are keyed by alias, or by name when no alias is given. A later
//! import with the same key is dropped silently even when it points elsewhere.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::keyed_store::KeyedStore;
use crate::naming::NamingError;
use crate::naming::escape_string;
use crate::naming::to_identifier;

// ============================================================================
// CONSTANTS: Defaults
// ============================================================================

/// License applied when none is set.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Container path of the SDK prelude imported by every contract.
pub const SDK_PRELUDE_PATH: &str = "stylus_sdk::prelude";

/// Container path of the EIP-712 helpers.
pub const EIP712_PATH: &str = "openzeppelin_stylus::utils::cryptography::eip712";

// ============================================================================
// SECTION: Names
// ============================================================================

/// Validated contract name.
///
/// # Invariants
/// - `identifier` is a non-empty Rust identifier starting with an upper-case
///   letter or `_`.
/// - `string_literal` is safe inside a double-quoted literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractName {
    /// Identifier used for the storage struct and error enum.
    pub identifier: String,
    /// Escaped original name used in string literals.
    pub string_literal: String,
}

impl ContractName {
    /// Validates a free-form contract name.
    ///
    /// # Errors
    /// Returns [`NamingError`] when the name has no identifier characters.
    pub fn parse(name: &str) -> Result<Self, NamingError> {
        Ok(Self {
            identifier: to_identifier(name, true)?,
            string_literal: escape_string(name),
        })
    }
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Storage descriptor: a field name and its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    /// Field name in the storage struct.
    pub name: String,
    /// Field type.
    pub ty: String,
}

impl Storage {
    /// Creates a storage descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Use-clause registered on a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Path of the containing module, e.g. `openzeppelin_stylus::token::erc20`.
    pub container_path: String,
    /// Imported name; may itself carry a nested path.
    pub name: String,
    /// Optional alias (`name as alias`).
    pub alias: Option<String>,
    /// Whether the import may share a braced statement with siblings.
    pub groupable: bool,
}

impl Import {
    /// Returns the identity key: the alias when present, else the name.
    #[must_use]
    pub fn identity_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Returns `name` or `name as alias`.
    #[must_use]
    pub fn name_with_alias(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} as {alias}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns `container_path::(alias or name)`, the import sort key.
    #[must_use]
    pub fn sort_key(&self) -> String {
        format!("{}::{}", self.container_path, self.identity_key())
    }

    /// Returns `container_path::name`, the path this import refers to.
    #[must_use]
    pub fn full_path(&self) -> String {
        format!("{}::{}", self.container_path, self.name)
    }
}

/// Options accepted by [`Contract::add_import`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Whether the import may be grouped with siblings (default true).
    pub groupable: bool,
    /// Optional alias.
    pub alias: Option<String>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            groupable: true,
            alias: None,
        }
    }
}

impl ImportOptions {
    /// Options for a standalone, never-grouped import.
    #[must_use]
    pub fn standalone() -> Self {
        Self {
            groupable: false,
            alias: None,
        }
    }

    /// Options for an aliased import.
    #[must_use]
    pub fn aliased(alias: impl Into<String>) -> Self {
        Self {
            groupable: true,
            alias: Some(alias.into()),
        }
    }
}

/// Function or constructor argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Argument name.
    pub name: String,
    /// Optional argument type.
    pub ty: Option<String>,
}

impl Argument {
    /// Creates a typed argument.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }

    /// Creates an untyped argument such as `&mut self`.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    /// Renders the argument as `name: ty` or `name`.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.ty {
            Some(ty) => format!("{}: {ty}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Named constant with an optional explanatory comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// Constant name.
    pub name: String,
    /// Constant type.
    pub ty: String,
    /// Constant value expression.
    pub value: String,
    /// Optional comment.
    pub comment: Option<String>,
    /// Prints the comment at the end of the declaration line instead of above.
    pub inline_comment: bool,
}

impl Constant {
    /// Creates an uncommented constant.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
            comment: None,
            inline_comment: false,
        }
    }

    /// Attaches a comment printed on the line above.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self.inline_comment = false;
        self
    }

    /// Attaches a comment printed at the end of the declaration line.
    #[must_use]
    pub fn with_inline_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self.inline_comment = true;
        self
    }
}

/// Module-level variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Variable name.
    pub name: String,
    /// Variable type.
    pub ty: String,
    /// Value expression.
    pub value: String,
}

impl Variable {
    /// Creates a variable.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }
}

/// Variant of the contract's error enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorVariant {
    /// Variant name.
    pub name: String,
    /// Optional explicit discriminant.
    pub ordinal: Option<u32>,
}

impl ErrorVariant {
    /// Creates a variant with an explicit discriminant.
    #[must_use]
    pub fn new(name: impl Into<String>, ordinal: u32) -> Self {
        Self {
            name: name.into(),
            ordinal: Some(ordinal),
        }
    }
}

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Request describing a trait implemented by the contract.
///
/// The builder reads every field only on the first registration of a name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraitSpec {
    /// Trait name; unique per contract.
    pub name: String,
    /// Module the trait is imported from.
    pub module_path: Option<String>,
    /// Storage field backing the trait.
    pub storage: Option<Storage>,
    /// Section label used to group functions when printing.
    pub section: Option<String>,
    /// Print priority; lower prints first, absent prints last.
    pub priority: Option<u32>,
    /// Excludes the storage type from the `#[inherit(..)]` list.
    pub omit_inherit: bool,
}

impl TraitSpec {
    /// Creates a trait request with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the module the trait is imported from.
    #[must_use]
    pub fn with_module_path(mut self, path: impl Into<String>) -> Self {
        self.module_path = Some(path.into());
        self
    }

    /// Sets the storage field backing the trait.
    #[must_use]
    pub fn with_storage(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.storage = Some(Storage::new(name, ty));
        self
    }

    /// Sets the section label.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Sets the print priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Excludes the storage type from the inherit list.
    #[must_use]
    pub const fn omit_inherit(mut self) -> Self {
        self.omit_inherit = true;
        self
    }
}

/// Trait registered on a contract together with its functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementedTrait {
    /// Trait name.
    pub name: String,
    /// Storage field backing the trait.
    pub storage: Option<Storage>,
    /// Section label.
    pub section: Option<String>,
    /// Print priority.
    pub priority: Option<u32>,
    /// Whether the storage type is left out of the inherit list.
    pub omit_inherit: bool,
    /// Functions keyed by [`FunctionSpec::signature`].
    functions: KeyedStore<String, ContractFunction>,
}

impl ImplementedTrait {
    /// Builds an empty trait from its request.
    fn from_spec(spec: &TraitSpec) -> Self {
        Self {
            name: spec.name.clone(),
            storage: spec.storage.clone(),
            section: spec.section.clone(),
            priority: spec.priority,
            omit_inherit: spec.omit_inherit,
            functions: KeyedStore::new(),
        }
    }

    /// Iterates functions in the order they were added.
    pub fn functions(&self) -> impl Iterator<Item = &ContractFunction> {
        self.functions.values()
    }

    /// Iterates function identity keys in the order they were added.
    pub fn function_signatures(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

// ============================================================================
// SECTION: Functions
// ============================================================================

/// Return type of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// Any plain type, printed as-is.
    Plain(String),
    /// `Result<ok, err>`; enables success wrapping of the final expression.
    Result {
        /// Success type.
        ok: String,
        /// Error type.
        err: String,
    },
}

impl ReturnType {
    /// Creates a plain return type.
    #[must_use]
    pub fn plain(ty: impl Into<String>) -> Self {
        Self::Plain(ty.into())
    }

    /// Creates a paired success/error return type.
    #[must_use]
    pub fn result(ok: impl Into<String>, err: impl Into<String>) -> Self {
        Self::Result {
            ok: ok.into(),
            err: err.into(),
        }
    }

    /// Renders the type as written after `->`.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Plain(ty) => ty.clone(),
            Self::Result {
                ok,
                err,
            } => format!("Result<{ok}, {err}>"),
        }
    }
}

/// Request describing a function on a trait.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionSpec {
    /// Function name.
    pub name: String,
    /// Ordered arguments.
    pub args: Vec<Argument>,
    /// Body lines.
    pub code: Vec<String>,
    /// Optional return type.
    pub returns: Option<ReturnType>,
    /// Explicit final line; disables success wrapping when present.
    pub return_line: Option<String>,
    /// Comment lines printed above the function, verbatim.
    pub comments: Vec<String>,
    /// Attribute printed above the function, without `#[..]`.
    pub attribute: Option<String>,
}

impl FunctionSpec {
    /// Creates a function request with a name and arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            args,
            ..Self::default()
        }
    }

    /// Sets the body lines.
    #[must_use]
    pub fn with_code<I, S>(mut self, code: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.code = code.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returning(mut self, returns: ReturnType) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Sets the explicit final line.
    #[must_use]
    pub fn with_return_line(mut self, line: impl Into<String>) -> Self {
        self.return_line = Some(line.into());
        self
    }

    /// Adds a comment line printed above the function.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Sets the attribute printed above the function.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Returns the identity key: `name(arg1,arg2)` over argument names only.
    ///
    /// # Examples
    /// ```
    /// use contract_wizard_core::Argument;
    /// use contract_wizard_core::FunctionSpec;
    ///
    /// let spec = FunctionSpec::new(
    ///     "transfer",
    ///     vec![Argument::untyped("&mut self"), Argument::new("to", "Address")],
    /// );
    /// assert_eq!(spec.signature(), "transfer(&mut self,to)");
    /// ```
    #[must_use]
    pub fn signature(&self) -> String {
        let names: Vec<&str> = self.args.iter().map(|arg| arg.name.as_str()).collect();
        format!("{}({})", self.name, names.join(","))
    }
}

/// Function owned by an implemented trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractFunction {
    /// Function name.
    pub name: String,
    /// Ordered arguments.
    pub args: Vec<Argument>,
    /// Body lines fixed at first registration.
    pub code: Vec<String>,
    /// Lines printed before the body, in accumulation order.
    pub prologue: Vec<String>,
    /// Optional return type.
    pub returns: Option<ReturnType>,
    /// Explicit final line.
    pub return_line: Option<String>,
    /// Comment lines printed above the function.
    pub comments: Vec<String>,
    /// Attribute printed above the function.
    pub attribute: Option<String>,
    /// Extra attributes, deduplicated, in insertion order.
    pub tags: Vec<String>,
}

impl ContractFunction {
    /// Builds a function from its first request.
    fn from_spec(spec: &FunctionSpec) -> Self {
        Self {
            name: spec.name.clone(),
            args: spec.args.clone(),
            code: spec.code.clone(),
            prologue: Vec::new(),
            returns: spec.returns.clone(),
            return_line: spec.return_line.clone(),
            comments: spec.comments.clone(),
            attribute: spec.attribute.clone(),
            tags: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Contract
// ============================================================================

/// Contract under construction.
///
/// # Invariants
/// - At most one trait, import, constructor argument, variable, constant,
///   error variant and storage field per key.
/// - Collections iterate in first-registration order.
/// - The SDK prelude imports are registered at creation.
///
/// # Examples
/// ```
/// use contract_wizard_core::Argument;
/// use contract_wizard_core::Contract;
/// use contract_wizard_core::FunctionSpec;
/// use contract_wizard_core::TraitSpec;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut contract = Contract::new("My Token")?;
/// let erc20 = TraitSpec::new("Erc20").with_storage("erc20", "Erc20");
/// let name = FunctionSpec::new("name", vec![Argument::untyped("&self")]);
/// contract.add_function(&erc20, &name);
/// contract.add_function(&erc20, &name);
/// assert_eq!(contract.name().identifier, "MyToken");
/// assert_eq!(contract.traits().count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    /// Validated name.
    name: ContractName,
    /// SPDX license identifier.
    license: String,
    /// Top-level documentation lines.
    documentation: Vec<String>,
    /// Security contact printed in the header.
    security_contact: Option<String>,
    /// Implemented traits keyed by name.
    traits: KeyedStore<String, ImplementedTrait>,
    /// Imports keyed by alias or name.
    imports: KeyedStore<String, Import>,
    /// Constructor arguments keyed by name.
    constructor_args: KeyedStore<String, Argument>,
    /// Constructor body lines, never deduplicated.
    constructor_code: Vec<String>,
    /// Variables keyed by name.
    variables: KeyedStore<String, Variable>,
    /// Constants keyed by name.
    constants: KeyedStore<String, Constant>,
    /// Error variants keyed by name.
    errors: KeyedStore<String, ErrorVariant>,
    /// Contract-level storage fields keyed by name.
    storage: KeyedStore<String, Storage>,
    /// Whether the EIP-712 domain block is printed.
    eip712_needed: bool,
}

impl Contract {
    /// Creates an empty contract.
    ///
    /// # Errors
    /// Returns [`NamingError`] when `name` has no identifier characters.
    pub fn new(name: &str) -> Result<Self, NamingError> {
        let mut contract = Self {
            name: ContractName::parse(name)?,
            license: DEFAULT_LICENSE.to_string(),
            documentation: Vec::new(),
            security_contact: None,
            traits: KeyedStore::new(),
            imports: KeyedStore::new(),
            constructor_args: KeyedStore::new(),
            constructor_code: Vec::new(),
            variables: KeyedStore::new(),
            constants: KeyedStore::new(),
            errors: KeyedStore::new(),
            storage: KeyedStore::new(),
            eip712_needed: false,
        };
        for attribute in ["entrypoint", "public", "storage"] {
            contract.add_import(SDK_PRELUDE_PATH, attribute, ImportOptions::default());
        }
        Ok(contract)
    }

    // ------------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------------

    /// Returns the validated name.
    #[must_use]
    pub const fn name(&self) -> &ContractName {
        &self.name
    }

    /// Returns the license identifier.
    #[must_use]
    pub fn license(&self) -> &str {
        &self.license
    }

    /// Returns the documentation lines.
    #[must_use]
    pub fn documentation(&self) -> &[String] {
        &self.documentation
    }

    /// Returns the security contact.
    #[must_use]
    pub fn security_contact(&self) -> Option<&str> {
        self.security_contact.as_deref()
    }

    /// Iterates traits in registration order.
    pub fn traits(&self) -> impl Iterator<Item = &ImplementedTrait> {
        self.traits.values()
    }

    /// Returns the trait registered under `name`.
    #[must_use]
    pub fn get_trait(&self, name: &str) -> Option<&ImplementedTrait> {
        self.traits.get(name)
    }

    /// Returns true when a trait named `name` is registered.
    #[must_use]
    pub fn trait_exists(&self, name: &str) -> bool {
        self.traits.contains_key(name)
    }

    /// Iterates imports in registration order.
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.imports.values()
    }

    /// Iterates constructor arguments in registration order.
    pub fn constructor_args(&self) -> impl Iterator<Item = &Argument> {
        self.constructor_args.values()
    }

    /// Returns constructor body lines.
    #[must_use]
    pub fn constructor_code(&self) -> &[String] {
        &self.constructor_code
    }

    /// Iterates variables in registration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Iterates constants in registration order.
    pub fn constants(&self) -> impl Iterator<Item = &Constant> {
        self.constants.values()
    }

    /// Iterates error variants in registration order.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorVariant> {
        self.errors.values()
    }

    /// Iterates contract-level storage fields in registration order.
    pub fn storage(&self) -> impl Iterator<Item = &Storage> {
        self.storage.values()
    }

    /// Returns true when the EIP-712 domain block is required.
    #[must_use]
    pub const fn eip712_needed(&self) -> bool {
        self.eip712_needed
    }

    // ------------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------------

    /// Replaces the contract name.
    ///
    /// # Errors
    /// Returns [`NamingError`] when `name` has no identifier characters; the
    /// current name is kept in that case.
    pub fn rename(&mut self, name: &str) -> Result<(), NamingError> {
        self.name = ContractName::parse(name)?;
        Ok(())
    }

    /// Sets the SPDX license identifier.
    pub fn set_license(&mut self, license: impl Into<String>) {
        self.license = license.into();
    }

    /// Appends a documentation line.
    pub fn add_documentation(&mut self, line: impl Into<String>) {
        self.documentation.push(line.into());
    }

    /// Sets the security contact.
    pub fn set_security_contact(&mut self, contact: impl Into<String>) {
        self.security_contact = Some(contact.into());
    }

    // ------------------------------------------------------------------------
    // Traits and functions
    // ------------------------------------------------------------------------

    /// Returns the trait named by `spec`, registering it on first request.
    ///
    /// The first registration also imports the trait from its module path.
    pub fn add_trait(&mut self, spec: &TraitSpec) -> &mut ImplementedTrait {
        if !self.traits.contains_key(spec.name.as_str())
            && let Some(module_path) = &spec.module_path
        {
            self.add_import(module_path, &spec.name, ImportOptions::default());
        }
        self.traits.get_or_insert_with(spec.name.clone(), || ImplementedTrait::from_spec(spec))
    }

    /// Returns the function described by `function`, registering the trait
    /// and the function on first request.
    pub fn add_function(
        &mut self,
        trait_spec: &TraitSpec,
        function: &FunctionSpec,
    ) -> &mut ContractFunction {
        let implemented = self.add_trait(trait_spec);
        implemented
            .functions
            .get_or_insert_with(function.signature(), || ContractFunction::from_spec(function))
    }

    /// Appends prologue lines to a function, registering it when absent.
    ///
    /// Repeated calls accumulate.
    pub fn add_function_prologue<I, S>(
        &mut self,
        trait_spec: &TraitSpec,
        function: &FunctionSpec,
        lines: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = self.add_function(trait_spec, function);
        target.prologue.extend(lines.into_iter().map(Into::into));
    }

    /// Adds an attribute tag to a function, registering it when absent.
    ///
    /// Re-adding an existing tag has no effect.
    pub fn add_function_tag(
        &mut self,
        trait_spec: &TraitSpec,
        function: &FunctionSpec,
        tag: &str,
    ) {
        let target = self.add_function(trait_spec, function);
        if !target.tags.iter().any(|existing| existing == tag) {
            target.tags.push(tag.to_string());
        }
    }

    // ------------------------------------------------------------------------
    // Imports and constructor
    // ------------------------------------------------------------------------

    /// Registers `use container_path::name`; returns true when newly added.
    pub fn add_import(&mut self, container_path: &str, name: &str, options: ImportOptions) -> bool {
        let import = Import {
            container_path: container_path.to_string(),
            name: name.to_string(),
            alias: options.alias,
            groupable: options.groupable,
        };
        self.imports.insert_if_absent(import.identity_key().to_string(), import)
    }

    /// Registers a constructor argument; returns true when newly added.
    pub fn add_constructor_argument(&mut self, arg: Argument) -> bool {
        self.constructor_args.insert_if_absent(arg.name.clone(), arg)
    }

    /// Appends a constructor body line.
    pub fn add_constructor_code(&mut self, line: impl Into<String>) {
        self.constructor_code.push(line.into());
    }

    // ------------------------------------------------------------------------
    // Named records
    // ------------------------------------------------------------------------

    /// Registers a variable; returns true when newly added.
    pub fn add_variable(&mut self, variable: Variable) -> bool {
        self.variables.insert_if_absent(variable.name.clone(), variable)
    }

    /// Registers a constant; returns true when newly added.
    pub fn add_constant(&mut self, constant: Constant) -> bool {
        self.constants.insert_if_absent(constant.name.clone(), constant)
    }

    /// Registers an error variant; returns true when newly added.
    pub fn add_error(&mut self, error: ErrorVariant) -> bool {
        self.errors.insert_if_absent(error.name.clone(), error)
    }

    /// Registers a contract-level storage field; returns true when newly added.
    pub fn add_storage(&mut self, storage: Storage) -> bool {
        self.storage.insert_if_absent(storage.name.clone(), storage)
    }

    /// Requests the EIP-712 domain block and its imports.
    pub fn add_eip712(&mut self) {
        self.eip712_needed = true;
        self.add_import(EIP712_PATH, "IEip712", ImportOptions::default());
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
