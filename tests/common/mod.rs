// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::path::PathBuf;

use proptest::prelude::*;

use wirtinger_trunk::diagram::{StrandRecord, StrandStructure};

/// Load a structure from `tests/fixtures/<name>.json`.
pub fn fixture(name: &str) -> StrandStructure {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", &format!("{name}.json")]
        .iter()
        .collect();
    let file = File::open(&path).unwrap_or_else(|err| panic!("{}: {}", path.display(), err));
    StrandStructure::from_reader(file).unwrap()
}

/// Two-component link with ten strands; bound 6.
pub fn two_component_link() -> StrandStructure {
    fixture("two_component_link")
}

/// (2,5) torus knot; every triple colors all five strands, bound 8.
pub fn torus_knot() -> StrandStructure {
    fixture("torus_knot_5_2")
}

/// Hopf link drawn with one strand per component.
pub fn hopf_link() -> StrandStructure {
    fixture("hopf_link")
}

pub fn record(arc: &[i32], over: &[(&str, &str)]) -> StrandRecord {
    StrandRecord {
        arc_sequence: arc.to_vec(),
        over_crossings: over
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    }
}

/// Zero-padded so that label order is index order.
pub fn label(i: usize) -> String {
    format!("s{i:02}")
}

/// Random, not necessarily planar, structures: 1 to 12 strands, each with a
/// short arc sequence and up to three crossings naming arbitrary strands.
pub fn structure_strategy() -> impl Strategy<Value = StrandStructure> {
    (1usize..=12).prop_flat_map(|n| {
        let strand = (
            prop::collection::vec(prop_oneof![-12i32..=-1, 1i32..=12], 1..5),
            prop::collection::vec((0..n, 0..n), 0..4),
        );
        prop::collection::vec(strand, n).prop_map(|strands| {
            let records = strands.into_iter().enumerate().map(|(i, (arc, over))| {
                let record = StrandRecord {
                    arc_sequence: arc,
                    over_crossings: over.into_iter().map(|(a, b)| (label(a), label(b))).collect(),
                };
                (label(i), record)
            });
            StrandStructure::from_records(records).unwrap()
        })
    })
}

/// A structure together with a non-empty set of distinct seed indices.
pub fn seeded_structure_strategy() -> impl Strategy<Value = (StrandStructure, Vec<usize>)> {
    structure_strategy().prop_flat_map(|structure| {
        let n = structure.len();
        let seeds = prop::sample::subsequence((0..n).collect::<Vec<_>>(), 1..=n.min(4));
        (Just(structure), seeds)
    })
}
