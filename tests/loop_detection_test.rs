// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for separating component detection.

mod common;

use wirtinger_trunk::coloring::{
    assemble_chain, extend_labels, find_separating_component, has_separating_component,
};
use wirtinger_trunk::diagram::StrandStructure;
use wirtinger_trunk::{ColorId, TrunkError};

use common::record;

#[test]
fn test_hopf_components_separate() {
    let structure = common::hopf_link();
    let coloring = extend_labels(&["X", "Y"], &structure).unwrap();

    let component = find_separating_component(&coloring, &structure).unwrap();
    assert_eq!(component.color, ColorId::new(0));
    assert_eq!(component.sequence, vec![-2, 1, -2]);
    assert!(has_separating_component(&coloring, &structure));
}

#[test]
fn test_one_color_is_never_separating() {
    let structure = common::hopf_link();
    let coloring = extend_labels(&["Y"], &structure).unwrap();
    assert!(!has_separating_component(&coloring, &structure));
}

#[test]
fn test_link_triples_have_no_separating_component() {
    let structure = common::two_component_link();
    for triple in [["A", "B", "G"], ["A", "F", "H"], ["E", "F", "G"], ["H", "I", "J"]] {
        let coloring = extend_labels(&triple, &structure).unwrap();
        assert!(
            !has_separating_component(&coloring, &structure),
            "{}",
            coloring.describe(&structure)
        );
    }
}

#[test]
fn test_color_closing_into_a_loop() {
    // A and B join into the loop -1, 4, -2, 5, -1, passing under 1 and 2.
    // C passes over both, so once C is colored the loop separates.
    let structure = StrandStructure::from_records([
        ("A", record(&[-1, 4, -2], &[("C", "C")])),
        ("B", record(&[-2, 5, -1], &[("C", "C")])),
        ("C", record(&[-3, 1, 2, -3], &[("B", "A"), ("A", "B")])),
    ])
    .unwrap();

    let coloring = extend_labels(&["A", "C"], &structure).unwrap();
    // C passes over (B, A), handing B the color of A.
    assert_eq!(coloring.color_of(structure.lookup("B").unwrap()), Some(ColorId::new(0)));

    let chain = assemble_chain(coloring.members(ColorId::new(0)), &structure);
    assert!(chain.is_closed());
    assert_eq!(chain.under_crossings(), vec![1, 2]);

    let component = find_separating_component(&coloring, &structure).unwrap();
    assert_eq!(component.color, ColorId::new(0));
    assert_eq!(component.sequence, vec![-1, 4, -2, 5, -1]);
}

#[test]
fn test_open_chain_does_not_separate() {
    let structure = StrandStructure::from_records([
        ("A", record(&[-1, 3, -2], &[])),
        ("B", record(&[-2, 4, -5], &[])),
        ("C", record(&[-6, -6], &[])),
    ])
    .unwrap();
    let chain = assemble_chain(
        &[structure.lookup("A").unwrap(), structure.lookup("B").unwrap()],
        &structure,
    );
    assert!(chain.unconsumed.is_empty());
    assert!(!chain.is_closed());
}

#[test]
fn test_extreme_crossing_numbers_never_reach_the_detector() {
    // Negating i32::MIN while collecting under-crossings would overflow.
    let result = StrandStructure::from_records([
        ("X", record(&[i32::MIN, i32::MIN], &[])),
        ("Y", record(&[-7, -7], &[])),
    ]);
    assert!(matches!(result, Err(TrunkError::MalformedStructure { .. })));

    let structure = StrandStructure::from_records([
        ("X", record(&[-i32::MAX, -i32::MAX], &[])),
        ("Y", record(&[-7, -7], &[])),
    ])
    .unwrap();
    let coloring = extend_labels(&["X", "Y"], &structure).unwrap();
    assert!(!has_separating_component(&coloring, &structure));
}
