// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multicolored crossing detection.
//!
//! Crossings are visited only through the `over_crossings` of colored
//! strands, so each crossing is examined once, from its over-strand.

use crate::coloring::Coloring;
use crate::diagram::{Crossing, CrossingKind, StrandStructure};

/// Crossings under a colored over-strand whose under-arcs carry two
/// different colors.
pub fn multicolored_crossings(coloring: &Coloring, structure: &StrandStructure) -> Vec<Crossing> {
    let mut result = Vec::new();
    for color in coloring.colors() {
        for &strand in coloring.members(color) {
            for crossing in structure.strand(strand).over_crossings() {
                if coloring.classify(crossing) == CrossingKind::Multicolored {
                    result.push(*crossing);
                }
            }
        }
    }
    result
}

/// Number of multicolored crossings; 0 means the coloring is consistent at
/// every examined crossing.
pub fn count_multicolored(coloring: &Coloring, structure: &StrandStructure) -> usize {
    multicolored_crossings(coloring, structure).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::extend_labels;
    use crate::diagram::StrandRecord;

    fn record(arc: &[i32], over: &[(&str, &str)]) -> StrandRecord {
        StrandRecord {
            arc_sequence: arc.to_vec(),
            over_crossings: over
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_no_crossings_means_no_obstruction() {
        let structure = StrandStructure::from_records([
            ("A", record(&[-1, -2], &[])),
            ("B", record(&[-2, -3], &[])),
            ("C", record(&[-3, -1], &[])),
        ])
        .unwrap();
        let coloring = extend_labels(&["A", "B", "C"], &structure).unwrap();
        assert_eq!(count_multicolored(&coloring, &structure), 0);
    }

    #[test]
    fn test_trefoil_triple_is_fully_obstructed() {
        let structure = StrandStructure::from_records([
            ("a", record(&[-2, 3, -1], &[("c", "b")])),
            ("b", record(&[-1, 2, -3], &[("a", "c")])),
            ("c", record(&[-3, 1, -2], &[("b", "a")])),
        ])
        .unwrap();
        let coloring = extend_labels(&["a", "b", "c"], &structure).unwrap();
        assert_eq!(count_multicolored(&coloring, &structure), 3);
        let crossings = multicolored_crossings(&coloring, &structure);
        assert_eq!(crossings[0].over, structure.lookup("a").unwrap());
    }

    #[test]
    fn test_uncolored_over_strand_not_visited() {
        // The crossing under C has two differently colored arcs, but C itself
        // is never colored, so it is not examined.
        let structure = StrandStructure::from_records([
            ("A", record(&[-1, -2], &[])),
            ("B", record(&[-2, -1], &[])),
            ("C", record(&[-3, 1, -3], &[("A", "B")])),
        ])
        .unwrap();
        let coloring = extend_labels(&["A", "B"], &structure).unwrap();
        assert_eq!(count_multicolored(&coloring, &structure), 0);

        let coloring = extend_labels(&["A", "B", "C"], &structure).unwrap();
        assert_eq!(count_multicolored(&coloring, &structure), 1);
    }
}
