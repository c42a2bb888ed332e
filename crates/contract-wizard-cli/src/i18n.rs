// crates/contract-wizard-cli/src/i18n.rs
// ============================================================================
// Module: CLI Message Catalog
// Description: Message catalog and translation helper for the CLI.
// Purpose: Centralize user-facing strings.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! Every user-facing string of the `contract-wizard` binary lives in
//! [`CATALOG_EN`] and is rendered through the [`t!`](crate::t) macro, which
//! substitutes `{placeholder}` names with preformatted values.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys render as the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name used in message templates.
    pub key: &'static str,
    /// Value substituted for the placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English message templates.
pub const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "contract-wizard {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.file_failed", "Failed to write {path}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("logging.init_failed", "Failed to open the event log: {error}"),
    ("options.load_failed", "Failed to load options: {error}"),
    ("options.invalid", "Options rejected: {error}"),
    ("library.load_failed", "Failed to load library table: {error}"),
    (
        "library.missing",
        "No library table given. Pass --library or set library.path in the config file.",
    ),
    ("imports.resolve_failed", "Failed to resolve imports: {error}"),
    ("imports.ok", "Wrote {count} library sources to {path}"),
    ("imports.serialize_failed", "Failed to serialize resolved sources: {error}"),
    ("generate.failed", "Fixture generation failed: {error}"),
    ("generate.ok", "Wrote {count} sources to {path}"),
    ("print.ok", "Wrote contract {name} to {path}"),
];

/// Returns the catalog as a lookup map.
pub(crate) fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Renders `key` while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalog message from a key and named arguments.
///
/// # Examples
/// ```
/// use contract_wizard_cli::t;
///
/// let message = t!("generate.ok", count = 3, path = "out");
/// assert_eq!(message, "Wrote 3 sources to out");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
