// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state, owned by one search context.
//!
//! Each seed triple gets a fresh coloring; nothing is carried from one triple
//! to the next except the statistics.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::coloring::Coloring;
use crate::diagram::StrandId;
use crate::error::TrunkError;

/// Why a triple was considered worth augmenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Obstruction {
    pub multicolored: usize,
    pub separating: bool,
}

impl Obstruction {
    pub fn is_promising(self) -> bool {
        self.multicolored > 0 || self.separating
    }
}

/// A seed triple plus one strand whose four-seed coloring covers the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WitnessIds {
    /// Position of the triple in the lexicographic enumeration.
    pub triple_index: usize,
    pub triple: [StrandId; 3],
    pub augmentation: StrandId,
}

#[derive(Debug, Default)]
pub struct SearchState {
    /// Index into `memo.triples` of the triple being evaluated.
    pub triple_index: Option<usize>,

    /// Maximal coloring of the current triple.
    pub coloring: Option<Coloring>,

    pub obstruction: Obstruction,

    /// Uncolored strands of the current coloring, candidates for a fourth seed.
    pub candidates: Vec<StrandId>,

    /// Maximal coloring of the current triple plus one candidate.
    pub augmented: Option<(StrandId, Coloring)>,

    pub witness: Option<WitnessIds>,

    /// First error met; the search suspends as soon as one is recorded.
    pub failure: Option<TrunkError>,
}
