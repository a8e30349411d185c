// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel bound search.
//!
//! The seed triples are cut into chunks of `options.chunk_size`; each chunk
//! runs the same predicate program in its own context, over a clone of the
//! MEMO data, on a rayon pool. All contexts share one "found" flag: the first
//! to find a witness (or an error) raises it, and every other context stops
//! offering new triples.
//!
//! The bound always matches the sequential search. The reported witness is
//! the one with the lowest triple index among those found before
//! cancellation, so it can differ from the sequential first witness; counters
//! are summed over all chunks.

use std::ops::Range;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::info;
use rayon::prelude::*;

use crate::context::{DiagramMemo, SearchContext};
use crate::diagram::StrandStructure;
use crate::error::Result;
use crate::state::Statistics;

use super::{run_range, RangeOutcome, SearchOptions, SearchReport};

/// Split `0..total` into consecutive ranges of at most `chunk_size` triples.
pub fn chunk_ranges(total: usize, chunk_size: usize) -> Vec<Range<usize>> {
    let chunk_size = chunk_size.max(1);
    (0..total)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(total))
        .collect()
}

/// Parallel counterpart of [`super::search_bound`].
pub fn search_bound(structure: &StrandStructure, options: &SearchOptions) -> Result<SearchReport> {
    let memo = DiagramMemo::new(structure.clone());
    let outcome = run_chunks(&memo, options)?;
    let report = SearchReport::new(structure, outcome.witness.as_ref(), &outcome.statistics);
    info!(
        "bound {} after {} seed triples in chunks of {}",
        report.bound, report.triples_evaluated, options.chunk_size
    );
    Ok(report)
}

/// Run every chunk of `memo.triples` and combine the outcomes in triple order.
///
/// The first error of any chunk fails the whole run.
pub(crate) fn run_chunks(memo: &DiagramMemo, options: &SearchOptions) -> Result<RangeOutcome> {
    let ranges = chunk_ranges(memo.triples.len(), options.chunk_size);
    let found = Arc::new(AtomicBool::new(false));

    let run = || -> Vec<Result<RangeOutcome>> {
        ranges
            .par_iter()
            .map(|range| {
                let ctx = SearchContext::with_memo(memo.clone()).with_cancel(found.clone());
                run_range(ctx, range.clone())
            })
            .collect()
    };

    let outcomes = match options.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(run),
        None => run(),
    };

    // Chunks are in triple order, so the first witness seen has the lowest index.
    let mut statistics = Statistics::new();
    let mut witness = None;
    for outcome in outcomes {
        let outcome = outcome?;
        statistics.merge(&outcome.statistics);
        if witness.is_none() {
            witness = outcome.witness;
        }
    }
    Ok(RangeOutcome {
        witness,
        statistics,
    })
}
