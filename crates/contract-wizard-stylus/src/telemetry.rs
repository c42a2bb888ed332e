// crates/contract-wizard-stylus/src/telemetry.rs
// ============================================================================
// Module: Wizard Event Logging
// Description: Structured JSON-line events for generation and resolution.
// Purpose: Emit machine-readable progress without a logging framework.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Each event is a flat JSON object with an `event` label and a millisecond
//! timestamp. Sinks write one object per line; serialization or write
//! failures are dropped so logging never aborts a build.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::error::OptionsError;
use crate::generic::Kind;
use crate::sources::Subset;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Emitted after fixture sources are written.
#[derive(Debug, Clone, Serialize)]
pub struct SourcesGeneratedEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Output directory.
    pub directory: String,
    /// Number of files written.
    pub count: usize,
    /// Subset selection in effect.
    pub subset: Subset,
    /// Kind filter in effect.
    pub kind: Option<Kind>,
    /// Whether files were named `Contract<N>`.
    pub unique_name: bool,
}

impl SourcesGeneratedEvent {
    /// Creates the event.
    #[must_use]
    pub fn new(
        directory: &Path,
        count: usize,
        subset: Subset,
        kind: Option<Kind>,
        unique_name: bool,
    ) -> Self {
        Self {
            event: "sources_generated",
            timestamp_ms: now_ms(),
            directory: directory.display().to_string(),
            count,
            subset,
            kind,
            unique_name,
        }
    }
}

/// Emitted when an option record is rejected and skipped.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSkippedEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Fixture identifier of the rejected record.
    pub id: String,
    /// Kind of the rejected record.
    pub kind: Kind,
    /// Rejected fields and messages.
    pub fields: BTreeMap<String, String>,
}

impl OptionSkippedEvent {
    /// Creates the event.
    #[must_use]
    pub fn new(id: &str, kind: Kind, err: &OptionsError) -> Self {
        Self {
            event: "option_skipped",
            timestamp_ms: now_ms(),
            id: id.to_string(),
            kind,
            fields: err.fields.clone(),
        }
    }
}

/// Emitted after a contract's library sources are resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ImportsResolvedEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Contract identifier.
    pub contract: String,
    /// Library root module.
    pub library_root: String,
    /// Number of resolved sources.
    pub sources: usize,
}

impl ImportsResolvedEvent {
    /// Creates the event.
    #[must_use]
    pub fn new(contract: &str, library_root: &str, sources: usize) -> Self {
        Self {
            event: "imports_resolved",
            timestamp_ms: now_ms(),
            contract: contract.to_string(),
            library_root: library_root.to_string(),
            sources,
        }
    }
}

/// Milliseconds since the Unix epoch; zero when the clock is before it.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Destination for wizard events.
pub trait WizardLogSink: Send + Sync {
    /// Records a sources-generated event.
    fn record_sources_generated(&self, event: &SourcesGeneratedEvent);

    /// Records an option-skipped event.
    fn record_option_skipped(&self, event: &OptionSkippedEvent);

    /// Records an imports-resolved event.
    fn record_imports_resolved(&self, event: &ImportsResolvedEvent);
}

/// Writes events to stderr.
pub struct StderrLogSink;

impl StderrLogSink {
    /// Writes one event line to stderr.
    fn emit<T: Serialize>(event: &T) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

impl WizardLogSink for StderrLogSink {
    fn record_sources_generated(&self, event: &SourcesGeneratedEvent) {
        Self::emit(event);
    }

    fn record_option_skipped(&self, event: &OptionSkippedEvent) {
        Self::emit(event);
    }

    fn record_imports_resolved(&self, event: &ImportsResolvedEvent) {
        Self::emit(event);
    }
}

/// Appends events to a file.
pub struct FileLogSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileLogSink {
    /// Opens the log file in append mode, creating it when absent.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one event line.
    fn emit<T: Serialize>(&self, event: &T) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

impl WizardLogSink for FileLogSink {
    fn record_sources_generated(&self, event: &SourcesGeneratedEvent) {
        self.emit(event);
    }

    fn record_option_skipped(&self, event: &OptionSkippedEvent) {
        self.emit(event);
    }

    fn record_imports_resolved(&self, event: &ImportsResolvedEvent) {
        self.emit(event);
    }
}

/// Discards every event.
pub struct NoopLogSink;

impl WizardLogSink for NoopLogSink {
    fn record_sources_generated(&self, _event: &SourcesGeneratedEvent) {}

    fn record_option_skipped(&self, _event: &OptionSkippedEvent) {}

    fn record_imports_resolved(&self, _event: &ImportsResolvedEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
