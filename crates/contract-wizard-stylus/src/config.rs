// crates/contract-wizard-stylus/src/config.rs
// ============================================================================
// Module: Wizard Config
// Description: TOML configuration for printing, generation and logging.
// Purpose: Load validated wizard settings from disk.
// Dependencies: contract-wizard-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! [`WizardConfig::load`] resolves the config path (explicit argument, then
//! `CONTRACT_WIZARD_CONFIG`, then `contract-wizard.toml`), bounds path and
//! file sizes, requires UTF-8, parses TOML and validates the result. Every
//! section is optional and defaults.
//!
//! ```toml
//! [printer]
//! compatibility_label = "OpenZeppelin Contracts for Stylus"
//! compatible_version = "^0.2.0"
//!
//! [generation]
//! output_dir = "generated"
//! subset = "minimal-cover"
//! kind = "ERC20"
//! unique_name = true
//! force_true = false
//!
//! [library]
//! path = "library.json"
//!
//! [logging]
//! sink = "file"
//! path = "wizard.log"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use contract_wizard_core::PrinterConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::generic::Kind;
use crate::sources::GenerationParams;
use crate::sources::Subset;
use crate::telemetry::FileLogSink;
use crate::telemetry::NoopLogSink;
use crate::telemetry::StderrLogSink;
use crate::telemetry::WizardLogSink;

// ============================================================================
// CONSTANTS: Limits
// ============================================================================

/// Default config filename.
pub const DEFAULT_CONFIG_NAME: &str = "contract-wizard.toml";
/// Environment variable override for the config path.
pub const CONFIG_ENV_VAR: &str = "CONTRACT_WIZARD_CONFIG";
/// Maximum allowed config file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum total path length for config-related paths.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Directory used for generated sources when none is configured.
const DEFAULT_OUTPUT_DIR: &str = "generated";

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Wizard configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    /// Printer header values.
    #[serde(default)]
    pub printer: PrinterSection,
    /// Fixture generation settings.
    #[serde(default)]
    pub generation: GenerationSection,
    /// Library table location.
    #[serde(default)]
    pub library: LibrarySection,
    /// Event logging settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[printer]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterSection {
    /// Library name in the compatibility comment.
    pub compatibility_label: String,
    /// Semver requirement in the compatibility comment.
    pub compatible_version: String,
}

impl Default for PrinterSection {
    fn default() -> Self {
        let defaults = PrinterConfig::default();
        Self {
            compatibility_label: defaults.compatibility_label,
            compatible_version: defaults.compatible_version,
        }
    }
}

/// `[generation]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSection {
    /// Directory receiving generated sources.
    pub output_dir: PathBuf,
    /// Subset selection.
    pub subset: Subset,
    /// Restricts generation to one kind.
    pub kind: Option<Kind>,
    /// Names contracts `Contract<N>`.
    pub unique_name: bool,
    /// Pins every on/off option to `true`.
    pub force_true: bool,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            subset: Subset::All,
            kind: None,
            unique_name: false,
            force_true: false,
        }
    }
}

/// `[library]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibrarySection {
    /// Library table JSON file.
    pub path: Option<PathBuf>,
}

/// Event sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSinkKind {
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to `logging.path`.
    File,
    /// Events discarded.
    None,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Sink selection.
    pub sink: LogSinkKind,
    /// Log file for the file sink.
    pub path: Option<PathBuf>,
}

/// Config errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("config io error: {0}")]
    Io(String),
    /// Parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration.
    #[error("config invalid: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl WizardConfig {
    /// Loads configuration from disk.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved, "config path")?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when a value is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.printer.compatibility_label.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "printer.compatibility_label must not be empty".to_string(),
            ));
        }
        if self.printer.compatible_version.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "printer.compatible_version must not be empty".to_string(),
            ));
        }
        validate_path(&self.generation.output_dir, "generation.output_dir")?;
        if let Some(path) = &self.library.path {
            validate_path(path, "library.path")?;
        }
        if let Some(path) = &self.logging.path {
            validate_path(path, "logging.path")?;
        }
        if self.logging.sink == LogSinkKind::File && self.logging.path.is_none() {
            return Err(ConfigError::Invalid("file log sink requires logging.path".to_string()));
        }
        Ok(())
    }

    /// Printer configuration from the `[printer]` section.
    #[must_use]
    pub fn printer_config(&self) -> PrinterConfig {
        PrinterConfig {
            compatibility_label: self.printer.compatibility_label.clone(),
            compatible_version: self.printer.compatible_version.clone(),
        }
    }

    /// Generation parameters from the `[generation]` and `[printer]` sections.
    #[must_use]
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            subset: self.generation.subset,
            kind: self.generation.kind,
            unique_name: self.generation.unique_name,
            force_true: self.generation.force_true,
            printer: self.printer_config(),
        }
    }

    /// Builds the configured event sink.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the log file cannot be opened.
    pub fn build_log_sink(&self) -> Result<Arc<dyn WizardLogSink>, ConfigError> {
        let sink: Arc<dyn WizardLogSink> = match self.logging.sink {
            LogSinkKind::Stderr => Arc::new(StderrLogSink),
            LogSinkKind::None => Arc::new(NoopLogSink),
            LogSinkKind::File => {
                let path = self.logging.path.as_ref().ok_or_else(|| {
                    ConfigError::Invalid("file log sink requires logging.path".to_string())
                })?;
                Arc::new(FileLogSink::new(path).map_err(|err| ConfigError::Io(err.to_string()))?)
            }
        };
        Ok(sink)
    }
}

/// Resolves the config path from explicit input or environment.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates path length and component lengths.
fn validate_path(path: &Path, label: &str) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{label} exceeds max length")));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{label} component too long")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
