// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests of the bound search, sequential and parallel.

mod common;

use wirtinger_trunk::{
    compute_bound, search_bound, SearchOptions, SearchReport, StrandStructure, TrunkBound,
    TrunkError,
};

fn sequential(structure: &StrandStructure) -> SearchReport {
    search_bound(structure, &SearchOptions::default()).unwrap()
}

fn parallel(structure: &StrandStructure, chunk_size: usize, threads: Option<usize>) -> SearchReport {
    let options = SearchOptions {
        parallel: true,
        threads,
        chunk_size,
    };
    search_bound(structure, &options).unwrap()
}

#[test]
fn test_link_bound_is_six() {
    let structure = common::two_component_link();
    assert_eq!(compute_bound(&structure).unwrap(), TrunkBound::Six);

    let report = sequential(&structure);
    let witness = report.witness.as_ref().unwrap();
    assert_eq!(witness.triple, ["A", "B", "G"].map(String::from));
    assert_eq!(witness.augmentation, "F");
    assert_eq!(report.triples_evaluated, 5);
    assert_eq!(report.promising_triples, 4);
    assert_eq!(report.augmentations_tried, 18);
    assert_eq!(report.multicolored_triples, 4);
    assert_eq!(report.separating_triples, 0);
}

#[test]
fn test_search_is_deterministic() {
    let structure = common::two_component_link();
    assert_eq!(sequential(&structure), sequential(&structure));
}

#[test]
fn test_torus_knot_tries_every_triple() {
    let structure = common::torus_knot();
    let report = sequential(&structure);
    assert_eq!(report.bound, TrunkBound::Eight);
    assert!(report.witness.is_none());
    // C(5, 3): every triple is promising but leaves nothing to augment with.
    assert_eq!(report.triples_evaluated, 10);
    assert_eq!(report.promising_triples, 10);
    assert_eq!(report.augmentations_tried, 0);
    // Coverage needs an augmentation, so a triple that already colors
    // everything still leaves the bound at 8.
    assert_eq!(report.multicolored_triples, 10);
    assert_eq!(report.separating_triples, 0);
}

#[test]
fn test_hopf_link_is_eight() {
    assert_eq!(compute_bound(&common::hopf_link()).unwrap(), TrunkBound::Eight);
}

#[test]
fn test_parallel_single_chunk_matches_sequential() {
    let structure = common::two_component_link();
    assert_eq!(parallel(&structure, 1000, None), sequential(&structure));
}

#[test]
fn test_parallel_agrees_on_bound() {
    let structure = common::two_component_link();
    for chunk_size in [1, 2, 7] {
        let report = parallel(&structure, chunk_size, Some(2));
        assert_eq!(report.bound, TrunkBound::Six, "chunk size {chunk_size}");
        assert!(report.witness.is_some());
    }

    let torus = common::torus_knot();
    let report = parallel(&torus, 3, Some(2));
    assert_eq!(report.bound, TrunkBound::Eight);
    assert_eq!(report.triples_evaluated, 10);
}

#[test]
fn test_report_json() {
    let report = sequential(&common::two_component_link());
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["bound"], 6);
    assert_eq!(json["witness"]["augmentation"], "F");
    assert_eq!(json["triples_evaluated"], 5);
    assert_eq!(json["multicolored_triples"], 4);

    let report = sequential(&common::torus_knot());
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["bound"], 8);
    assert!(json["witness"].is_null());
}

#[test]
fn test_bad_structures_are_rejected() {
    assert!(matches!(
        StrandStructure::from_json("{ not json"),
        Err(TrunkError::Json(_))
    ));
    assert!(matches!(
        StrandStructure::from_json(r#"{ "A": { "arc_sequence": [-1, 2, -1], "over_crossings": [["A", "Z"]] } }"#),
        Err(TrunkError::Json(_)) | Err(TrunkError::MalformedStructure { .. })
    ));
    assert!(matches!(
        StrandStructure::from_json("{}"),
        Err(TrunkError::Json(_)) | Err(TrunkError::MalformedStructure { .. })
    ));
}
