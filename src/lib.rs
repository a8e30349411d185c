// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Upper bound on the Wirtinger trunk of bridge number four links.
//!
//! A link diagram is given as a [`StrandStructure`]: one record per strand
//! (over-arc), holding the arc sequence it traverses and the crossings it
//! passes over. The bound search decides whether the Wirtinger trunk of the
//! diagram is at most 6, or only the guaranteed 8, by coloring from seeds.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once per diagram:
//! - The validated strand structure, with dense strand ids in label order
//! - All seed triples, in lexicographic order
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Per search context:
//! - The current seed triple and its maximal coloring
//! - The obstruction found in that coloring, and the augmentation candidates
//! - Statistics and, once found, the witness
//!
//! # Search Algorithm
//!
//! The search is a predicate program run by the backtracking [`SearchEngine`]:
//!
//! 1. **SeedTriplePredicate**: choose a seed triple and propagate its coloring
//! 2. **ObstructionPredicate**: keep triples with a multicolored crossing or a
//!    separating component
//! 3. **AugmentPredicate**: choose a fourth seed among the uncolored strands
//! 4. **CoveragePredicate**: accept if the four seeds color every strand
//!
//! The first accepted augmentation proves the bound 6; exhausting every
//! choice gives 8.
//!
//! # Parallelization
//!
//! With [`SearchOptions::parallel`], the triples are split into chunks run
//! by independent contexts on a rayon pool, sharing a cancellation flag.
//!
//! # Example
//!
//! ```
//! use wirtinger_trunk::{compute_bound, StrandStructure, TrunkBound};
//!
//! let structure = StrandStructure::from_json(r#"{
//!     "A": { "arc_sequence": [-1, 3, -2], "over_crossings": [["B", "C"]] },
//!     "B": { "arc_sequence": [-2, -3] },
//!     "C": { "arc_sequence": [-3, -4] },
//!     "D": { "arc_sequence": [-4, -1] }
//! }"#).unwrap();
//!
//! assert_eq!(compute_bound(&structure).unwrap(), TrunkBound::Six);
//! ```

pub mod coloring;
pub mod context;
pub mod diagram;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use coloring::{count_multicolored, extend, extend_labels, has_separating_component, ColorId, Coloring};
pub use context::SearchContext;
pub use diagram::{Crossing, CrossingKind, StrandId, StrandSet, StrandStructure};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{Result, TrunkError};
pub use search::{compute_bound, search_bound, SearchOptions, SearchReport, TrunkBound, Witness};
