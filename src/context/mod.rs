// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - Tier 1 (MEMO): the strand structure and the seed triples to try,
//!   computed once per diagram and never changed by the search
//! - Tier 2 (DYNAMIC): the current triple, its coloring, and the witness
//!
//! Several contexts can run over clones of the same MEMO data, which is how
//! the parallel search splits the triple range.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::diagram::{StrandId, StrandStructure};
use crate::state::{SearchState, Statistics};

/// Immutable precomputed data (Tier 1: MEMO).
#[derive(Debug, Clone)]
pub struct DiagramMemo {
    pub structure: StrandStructure,

    /// All 3-element strand combinations, in lexicographic id order.
    pub triples: Vec<[StrandId; 3]>,
}

impl DiagramMemo {
    pub fn new(structure: StrandStructure) -> Self {
        let triples = seed_triples(structure.len());
        Self { structure, triples }
    }
}

/// Every 3-combination of the ids 0..n, lexicographically ordered.
pub fn seed_triples(n: usize) -> Vec<[StrandId; 3]> {
    let id = |i: usize| StrandId::new(i as u8);
    let mut triples = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                triples.push([id(a), id(b), id(c)]);
            }
        }
    }
    triples
}

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     memo: DiagramMemo,       // Tier 1: Immutable
///     state: SearchState,      // Tier 2: Mutable, owned
///     statistics: Statistics,  // counters for this context
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    pub memo: DiagramMemo,
    pub state: SearchState,
    pub statistics: Statistics,

    /// Slice of `memo.triples` this context is responsible for.
    pub triple_range: Range<usize>,

    /// Set by whichever context finds a witness first.
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchContext {
    pub fn new(structure: StrandStructure) -> Self {
        Self::with_memo(DiagramMemo::new(structure))
    }

    /// Create a search context over existing MEMO data, covering every triple.
    pub fn with_memo(memo: DiagramMemo) -> Self {
        let triple_range = 0..memo.triples.len();
        Self {
            memo,
            state: SearchState::default(),
            statistics: Statistics::new(),
            triple_range,
            cancel: None,
        }
    }

    /// Restrict the context to part of the triple range.
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.triple_range = range;
        self
    }

    /// Share a cancellation flag with other contexts.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Tell every context sharing the flag to stop offering triples.
    pub fn cancel_others(&self) {
        if let Some(flag) = &self.cancel {
            flag.store(true, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial3(n: usize) -> usize {
        if n < 3 {
            0
        } else {
            n * (n - 1) * (n - 2) / 6
        }
    }

    #[test]
    fn test_seed_triples_count() {
        for n in 0..12 {
            assert_eq!(seed_triples(n).len(), binomial3(n), "n = {}", n);
        }
    }

    #[test]
    fn test_seed_triples_lexicographic_and_distinct() {
        let triples = seed_triples(6);
        assert!(triples.windows(2).all(|w| w[0] < w[1]));
        assert!(triples.iter().all(|t| t[0] < t[1] && t[1] < t[2]));
        assert_eq!(
            triples[0],
            [StrandId::new(0), StrandId::new(1), StrandId::new(2)]
        );
    }

    #[test]
    fn test_cancel_flag_shared() {
        let memo = DiagramMemo::new(
            StrandStructure::from_json(r#"{"A": {"arc_sequence": [-1, -1]}}"#).unwrap(),
        );
        let flag = Arc::new(AtomicBool::new(false));
        let a = SearchContext::with_memo(memo.clone()).with_cancel(flag.clone());
        let b = SearchContext::with_memo(memo).with_cancel(flag);
        assert!(!b.is_cancelled());
        a.cancel_others();
        assert!(b.is_cancelled());
    }
}
