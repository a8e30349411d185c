// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bound search: decide whether the Wirtinger trunk bound is 6 or 8.
//!
//! Seed triples are tried in lexicographic order. A triple whose maximal
//! coloring has a multicolored crossing or a separating component is
//! augmented by each uncolored strand in turn; the first four-seed coloring
//! covering every strand is a witness for 6 and ends the search. Without a
//! witness the bound is 8.
//!
//! The result is only meaningful for diagrams known to have bridge number
//! four with a lower-bound coloring count of four; neither is checked here.
//!
//! # Example
//!
//! ```
//! use wirtinger_trunk::diagram::StrandStructure;
//! use wirtinger_trunk::search::{compute_bound, TrunkBound};
//!
//! let torus = StrandStructure::from_json(r#"{
//!     "P": { "arc_sequence": [-2, 3, -4], "over_crossings": [["R", "S"]] },
//!     "Q": { "arc_sequence": [-4, 5, -1], "over_crossings": [["S", "T"]] },
//!     "R": { "arc_sequence": [-1, 2, -3], "over_crossings": [["T", "P"]] },
//!     "S": { "arc_sequence": [-3, 4, -5], "over_crossings": [["P", "Q"]] },
//!     "T": { "arc_sequence": [-5, 1, -2], "over_crossings": [["Q", "R"]] }
//! }"#).unwrap();
//!
//! assert_eq!(compute_bound(&torus).unwrap(), TrunkBound::Eight);
//! ```

pub mod parallel;

use std::fmt;
use std::ops::Range;

use log::info;
use serde::Serialize;

use crate::context::{DiagramMemo, SearchContext};
use crate::diagram::StrandStructure;
use crate::engine::EngineBuilder;
use crate::error::Result;
use crate::predicates::{
    AugmentPredicate, CoveragePredicate, ObstructionPredicate, SeedTriplePredicate,
    SuspendPredicate,
};
use crate::state::{Counters, Statistics, WitnessIds};

/// The two possible outcomes of the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum TrunkBound {
    /// A seed triple plus one strand colors the whole diagram.
    Six,
    /// No witness found; the guaranteed bound.
    Eight,
}

impl TrunkBound {
    pub fn value(self) -> u8 {
        match self {
            TrunkBound::Six => 6,
            TrunkBound::Eight => 8,
        }
    }
}

impl From<TrunkBound> for u8 {
    fn from(bound: TrunkBound) -> u8 {
        bound.value()
    }
}

impl fmt::Display for TrunkBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Knobs for [`search_bound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Split the triples over a rayon pool.
    pub parallel: bool,
    /// Worker threads for the parallel search; rayon's default when None.
    pub threads: Option<usize>,
    /// Seed triples per parallel work unit.
    pub chunk_size: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            chunk_size: 32,
        }
    }
}

/// The seed labels that prove the bound 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Witness {
    pub triple: [String; 3],
    pub augmentation: String,
}

impl Witness {
    fn from_ids(ids: &WitnessIds, structure: &StrandStructure) -> Self {
        let label = |id| structure.label(id).to_string();
        Self {
            triple: ids.triple.map(label),
            augmentation: label(ids.augmentation),
        }
    }
}

/// Outcome of a bound search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub bound: TrunkBound,
    pub witness: Option<Witness>,
    pub triples_evaluated: u64,
    pub promising_triples: u64,
    /// Evaluated triples with at least one multicolored crossing.
    pub multicolored_triples: u64,
    /// Evaluated triples with a separating component.
    pub separating_triples: u64,
    pub augmentations_tried: u64,
}

impl SearchReport {
    fn new(structure: &StrandStructure, witness: Option<&WitnessIds>, statistics: &Statistics) -> Self {
        Self {
            bound: if witness.is_some() {
                TrunkBound::Six
            } else {
                TrunkBound::Eight
            },
            witness: witness.map(|ids| Witness::from_ids(ids, structure)),
            triples_evaluated: statistics.get(Counters::TriplesEvaluated),
            promising_triples: statistics.get(Counters::PromisingTriples),
            multicolored_triples: statistics.get(Counters::MulticoloredTriples),
            separating_triples: statistics.get(Counters::SeparatingTriples),
            augmentations_tried: statistics.get(Counters::AugmentationsTried),
        }
    }
}

/// The Wirtinger trunk bound (6 or 8) of a diagram.
pub fn compute_bound(structure: &StrandStructure) -> Result<TrunkBound> {
    Ok(search_bound(structure, &SearchOptions::default())?.bound)
}

/// Run the bound search, sequentially or in parallel per `options`.
pub fn search_bound(structure: &StrandStructure, options: &SearchOptions) -> Result<SearchReport> {
    if options.parallel {
        return parallel::search_bound(structure, options);
    }

    let memo = DiagramMemo::new(structure.clone());
    let range = 0..memo.triples.len();
    let outcome = run_range(SearchContext::with_memo(memo), range)?;
    let report = SearchReport::new(structure, outcome.witness.as_ref(), &outcome.statistics);
    info!(
        "bound {} after {} of {} seed triples",
        report.bound,
        report.triples_evaluated,
        binomial3(structure.len())
    );
    Ok(report)
}

/// What one context found over its slice of the triples.
#[derive(Debug)]
pub(crate) struct RangeOutcome {
    pub witness: Option<WitnessIds>,
    pub statistics: Statistics,
}

/// Run the bound search program over `range` of the context's triples.
pub(crate) fn run_range(ctx: SearchContext, range: Range<usize>) -> Result<RangeOutcome> {
    let mut ctx = ctx.with_range(range);
    let mut engine = EngineBuilder::new()
        .add(Box::new(SeedTriplePredicate))
        .add(Box::new(ObstructionPredicate))
        .add(Box::new(AugmentPredicate))
        .add(Box::new(CoveragePredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    // Suspending means a witness or a failure; either ends this range.
    engine.search(&mut ctx);

    if let Some(failure) = ctx.state.failure.take() {
        return Err(failure);
    }
    Ok(RangeOutcome {
        witness: ctx.state.witness,
        statistics: ctx.statistics,
    })
}

fn binomial3(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}
