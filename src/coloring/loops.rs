// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Separating component detection.
//!
//! A color class is a separating component when its strands join, end to
//! start, into a single closed loop of the diagram, and every crossing the
//! loop passes under has a colored over-strand.
//!
//! # Algorithm Overview
//!
//! For each color, in order:
//!
//! 1. Start a chain from the color's seed (its `arc_sequence`).
//! 2. Take any remaining strand of the color that starts where the chain ends
//!    (append, dropping the shared endpoint) or ends where the chain starts
//!    (prepend, likewise). Repeat until no remaining strand extends the chain.
//! 3. The color closes when nothing is left over and the chain's first and
//!    last entries are equal. A stalled chain with leftover strands does not
//!    close.
//! 4. For a closed chain, the negative entries (minus the repeated closing
//!    entry) are the crossings the loop passes under. Each such crossing `k`
//!    must appear as `+k` in the arc sequence of some colored strand, of any
//!    color.
//!
//! A coloring with fewer than two colors never has a separating component.

use std::collections::{HashSet, VecDeque};

use crate::coloring::{ColorId, Coloring};
use crate::diagram::{StrandId, StrandStructure};

/// Result of joining a color's strands end to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub sequence: VecDeque<i32>,
    /// Strands of the color that could not be attached.
    pub unconsumed: Vec<StrandId>,
}

impl Chain {
    /// Whether all strands were used and the chain returns to its start.
    pub fn is_closed(&self) -> bool {
        self.unconsumed.is_empty() && self.sequence.front() == self.sequence.back()
    }

    /// Crossings the loop passes under, without the repeated closing entry.
    pub fn under_crossings(&self) -> Vec<i32> {
        let len = self.sequence.len().saturating_sub(1);
        self.sequence
            .iter()
            .take(len)
            .filter(|&&entry| entry < 0)
            .map(|&entry| -entry)
            .collect()
    }
}

/// A color whose strands close into a loop with all its over-strands colored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatingComponent {
    pub color: ColorId,
    pub sequence: Vec<i32>,
}

/// Join `strands` into a chain, starting from the first one.
///
/// # Panics
///
/// Panics if `strands` is empty.
pub fn assemble_chain(strands: &[StrandId], structure: &StrandStructure) -> Chain {
    let (&first, rest) = strands.split_first().expect("chain needs a strand");
    let mut sequence: VecDeque<i32> = structure.strand(first).arc_sequence().iter().copied().collect();
    let mut pool: Vec<StrandId> = rest.to_vec();

    loop {
        let Some(pos) = pool.iter().position(|&candidate| {
            let strand = structure.strand(candidate);
            Some(&strand.start()) == sequence.back() || Some(&strand.end()) == sequence.front()
        }) else {
            break;
        };
        let arc = structure.strand(pool.remove(pos)).arc_sequence();
        if Some(&arc[0]) == sequence.back() {
            sequence.extend(&arc[1..]);
        } else {
            for &entry in arc[..arc.len() - 1].iter().rev() {
                sequence.push_front(entry);
            }
        }
    }

    Chain {
        sequence,
        unconsumed: pool,
    }
}

/// First color forming a separating component, if any.
pub fn find_separating_component(
    coloring: &Coloring,
    structure: &StrandStructure,
) -> Option<SeparatingComponent> {
    if coloring.num_colors() < 2 {
        return None;
    }

    let colored_nodes: HashSet<i32> = coloring
        .colored()
        .iter()
        .flat_map(|strand| structure.strand(strand).arc_sequence().iter().copied())
        .collect();

    coloring.colors().find_map(|color| {
        let chain = assemble_chain(coloring.members(color), structure);
        if !chain.is_closed() {
            return None;
        }
        chain
            .under_crossings()
            .iter()
            .all(|node| colored_nodes.contains(node))
            .then(|| SeparatingComponent {
                color,
                sequence: chain.sequence.into_iter().collect(),
            })
    })
}

/// Whether some color of `coloring` is a separating component.
pub fn has_separating_component(coloring: &Coloring, structure: &StrandStructure) -> bool {
    find_separating_component(coloring, structure).is_some()
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

    fn hopf() -> StrandStructure {
        StrandStructure::from_records([
            ("X", record(&[-2, 1, -2], &[("Y", "Y")])),
            ("Y", record(&[-1, 2, -1], &[("X", "X")])),
        ])
        .unwrap()
    }

    fn ids(structure: &StrandStructure, labels: &[&str]) -> Vec<StrandId> {
        structure.resolve_seeds(labels).unwrap()
    }

    #[test]
    fn test_hopf_components_separate() {
        let structure = hopf();
        let coloring = extend_labels(&["X", "Y"], &structure).unwrap();
        let component = find_separating_component(&coloring, &structure).unwrap();
        assert_eq!(component.color, ColorId::new(0));
        assert_eq!(component.sequence, vec![-2, 1, -2]);
    }

    #[test]
    fn test_single_color_never_separates() {
        let structure = hopf();
        let coloring = extend_labels(&["X"], &structure).unwrap();
        assert!(!has_separating_component(&coloring, &structure));
    }

    #[test]
    fn test_chain_appends_and_prepends() {
        let structure = StrandStructure::from_records([
            ("A", record(&[-1, 5, -2], &[])),
            ("B", record(&[-2, -3], &[])),
            ("C", record(&[-3, 6, -1], &[])),
            ("D", record(&[-9, -9], &[])),
        ])
        .unwrap();

        // Start from B: A prepends, then C appends.
        let chain = assemble_chain(&ids(&structure, &["B", "A", "C"]), &structure);
        assert_eq!(Vec::from(chain.sequence.clone()), vec![-1, 5, -2, -3, 6, -1]);
        assert!(chain.is_closed());
        assert_eq!(chain.under_crossings(), vec![1, 2, 3]);

        // Start from C: B prepends, nothing else is left.
        let chain = assemble_chain(&ids(&structure, &["C", "B"]), &structure);
        assert_eq!(Vec::from(chain.sequence.clone()), vec![-2, -3, 6, -1]);
        assert!(!chain.is_closed());
    }

    #[test]
    fn test_stalled_chain_does_not_close() {
        let structure = StrandStructure::from_records([
            ("A", record(&[-1, -1], &[])),
            ("B", record(&[-4, -5], &[])),
        ])
        .unwrap();
        let chain = assemble_chain(&ids(&structure, &["A", "B"]), &structure);
        assert_eq!(chain.unconsumed, ids(&structure, &["B"]));
        assert!(!chain.is_closed());
    }

    #[test]
    fn test_uncolored_over_strand_blocks_separation() {
        // X closes on its own, but the crossing it passes under (2) is
        // crossed over by Z, which is never colored.
        let structure = StrandStructure::from_records([
            ("X", record(&[-2, -2], &[])),
            ("Y", record(&[-7, -7], &[])),
            ("Z", record(&[-8, 2, -8], &[("X", "X")])),
        ])
        .unwrap();
        let coloring = extend_labels(&["X", "Y"], &structure).unwrap();
        assert_eq!(coloring.color_of(structure.lookup("Z").unwrap()), None);
        // Y closes too, and passes under 7, which nothing crosses over.
        assert!(!has_separating_component(&coloring, &structure));

        let coloring = extend_labels(&["X", "Z"], &structure).unwrap();
        assert!(has_separating_component(&coloring, &structure));
    }
}
