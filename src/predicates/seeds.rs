// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SeedTriplePredicate - choose three seed strands and color from them.

use crate::coloring::extend;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Counters, Obstruction};

use super::record_failure;

/// Offers one choice per seed triple in `ctx.triple_range`.
///
/// Choice `i` takes triple `triple_range.start + i` from the memo, builds its
/// maximal coloring and stores it in the state. Once the context's shared
/// cancellation flag is set, the remaining choices fail without coloring.
#[derive(Debug, Default)]
pub struct SeedTriplePredicate;

impl Predicate for SeedTriplePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        if ctx.triple_range.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(ctx.triple_range.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, choice: usize) -> PredicateResult {
        if ctx.is_cancelled() {
            return PredicateResult::Failure;
        }

        let index = ctx.triple_range.start + choice;
        let triple = ctx.memo.triples[index];
        ctx.statistics.increment_counter(Counters::TriplesEvaluated);

        ctx.state.triple_index = Some(index);
        ctx.state.obstruction = Obstruction::default();
        ctx.state.candidates.clear();
        ctx.state.augmented = None;

        match extend(&triple, &ctx.memo.structure) {
            Ok(coloring) => {
                ctx.state.coloring = Some(coloring);
                PredicateResult::Success
            }
            Err(failure) => {
                ctx.state.coloring = None;
                record_failure(ctx, failure)
            }
        }
    }

    fn name(&self) -> &str {
        "SeedTriple"
    }
}
