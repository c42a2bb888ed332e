// crates/contract-wizard-stylus/src/sources/tests.rs
// ============================================================================
// Module: Fixture Sources Unit Tests
// Description: Unit coverage for building, selecting and writing fixtures.
// Purpose: Ensure skipped records are reported and output names are stable.
// Dependencies: contract-wizard-core, contract-wizard-stylus, tempfile
// ============================================================================

//! ## Overview
//! Uses a recording sink to observe skipped records and the final
//! generation event.

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

use std::collections::BTreeSet;
use std::fs;
use std::sync::Mutex;

use crate::erc20::Erc20Options;
use crate::generic::GenericOptions;
use crate::generic::Kind;
use crate::sources::GenerationParams;
use crate::sources::Subset;
use crate::sources::build_contracts;
use crate::sources::cover_tags;
use crate::sources::fixture_id;
use crate::sources::generate_contract_subset;
use crate::sources::generate_sources;
use crate::sources::write_generated_sources;
use crate::telemetry::ImportsResolvedEvent;
use crate::telemetry::OptionSkippedEvent;
use crate::telemetry::SourcesGeneratedEvent;
use crate::telemetry::WizardLogSink;

/// Sink that keeps event labels and payload summaries.
#[derive(Default)]
struct RecordingSink {
    /// Recorded `label:detail` entries.
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Returns the recorded entries.
    fn entries(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Records one entry.
    fn push(&self, entry: String) {
        self.events.lock().unwrap().push(entry);
    }
}

impl WizardLogSink for RecordingSink {
    fn record_sources_generated(&self, event: &SourcesGeneratedEvent) {
        self.push(format!("{}:{}", event.event, event.count));
    }

    fn record_option_skipped(&self, event: &OptionSkippedEvent) {
        self.push(format!("{}:{}", event.event, event.id));
    }

    fn record_imports_resolved(&self, event: &ImportsResolvedEvent) {
        self.push(format!("{}:{}", event.event, event.contract));
    }
}

/// ERC-20 record with the given premint.
fn erc20_with_premint(premint: &str) -> GenericOptions {
    GenericOptions::Erc20(Erc20Options {
        premint: premint.to_string(),
        ..Erc20Options::default()
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn rejected_records_are_skipped_and_reported() {
    let sink = RecordingSink::default();
    let bad = erc20_with_premint("1.2.3");
    let bad_id = fixture_id(&bad).unwrap();
    let built =
        build_contracts(vec![erc20_with_premint("5"), bad], Subset::All, &sink).unwrap();

    assert_eq!(built.len(), 1);
    assert_eq!(sink.entries(), vec![format!("option_skipped:{bad_id}")]);
}

#[test]
fn fixture_ids_are_hex_sha256_and_distinct() {
    let first = fixture_id(&erc20_with_premint("1")).unwrap();
    let second = fixture_id(&erc20_with_premint("2")).unwrap();
    assert_eq!(first.len(), 64);
    assert!(first.chars().all(|ch| ch.is_ascii_hexdigit()));
    assert_ne!(first, second);
    assert_eq!(first, fixture_id(&erc20_with_premint("1")).unwrap());
}

#[test]
fn minimal_cover_keeps_every_tag() {
    let sink = RecordingSink::default();
    let all = generate_contract_subset(Subset::All, Some(Kind::Erc1155), false, &sink).unwrap();
    let cover =
        generate_contract_subset(Subset::MinimalCover, Some(Kind::Erc1155), false, &sink)
            .unwrap();

    assert!(!cover.is_empty());
    assert!(cover.len() < all.len());
    let expected: BTreeSet<String> = all.iter().flat_map(cover_tags).collect();
    let covered: BTreeSet<String> = cover.iter().flat_map(cover_tags).collect();
    assert_eq!(covered, expected);
}

#[test]
fn unique_names_rebuild_each_contract() {
    let sink = RecordingSink::default();
    let params = GenerationParams {
        subset: Subset::MinimalCover,
        kind: Some(Kind::Erc721),
        unique_name: true,
        ..GenerationParams::default()
    };
    let sources = generate_sources(&params, &sink).unwrap();
    for (index, generated) in sources.iter().enumerate() {
        let name = format!("Contract{}", index + 1);
        assert_eq!(generated.contract.name().identifier, name);
        assert!(generated.source.contains(&format!("impl {name} {{")));
        assert!(!generated.source.contains("MyToken"));
    }
}

#[test]
fn forced_generation_keeps_flags_on() {
    let sink = RecordingSink::default();
    let params = GenerationParams {
        kind: Some(Kind::Erc721),
        force_true: true,
        ..GenerationParams::default()
    };
    let sources = generate_sources(&params, &sink).unwrap();
    assert_eq!(sources.len(), 6);
    for generated in &sources {
        let GenericOptions::Erc721(opts) = &generated.options else {
            panic!("expected ERC721 records");
        };
        assert!(opts.burnable && opts.enumerable && opts.pausable && opts.mintable);
        assert!(opts.incremental);
    }
}

#[test]
fn written_files_are_named_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("generated");
    let sink = RecordingSink::default();
    let params = GenerationParams {
        subset: Subset::MinimalCover,
        kind: Some(Kind::Erc20),
        ..GenerationParams::default()
    };

    let names = write_generated_sources(&out, &params, &sink).unwrap();
    assert!(!names.is_empty());
    for name in &names {
        assert_eq!(name.len(), 64);
        let source = fs::read_to_string(out.join(format!("{name}.rs"))).unwrap();
        assert!(source.starts_with("// SPDX-License-Identifier: "));
    }
    assert_eq!(sink.entries().last(), Some(&format!("sources_generated:{}", names.len())));
}
