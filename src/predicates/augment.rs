// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Augmentation of a promising triple by a fourth seed.
//!
//! AugmentPredicate offers every strand left uncolored by the triple's
//! coloring, in ascending id order. CoveragePredicate accepts the resulting
//! four-seed coloring only if it colors the whole diagram.

use log::debug;

use crate::coloring::extend;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Counters, WitnessIds};

use super::record_failure;

#[derive(Debug, Default)]
pub struct AugmentPredicate;

impl Predicate for AugmentPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        let Some(coloring) = ctx.state.coloring.as_ref() else {
            return PredicateResult::Failure;
        };
        let uncolored = ctx.memo.structure.universe().difference(coloring.colored());
        ctx.state.candidates = uncolored.iter().collect();

        if ctx.state.candidates.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(ctx.state.candidates.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, choice: usize) -> PredicateResult {
        let Some(index) = ctx.state.triple_index else {
            return PredicateResult::Failure;
        };
        let [a, b, c] = ctx.memo.triples[index];
        let strand = ctx.state.candidates[choice];
        ctx.statistics.increment_counter(Counters::AugmentationsTried);

        match extend(&[a, b, c, strand], &ctx.memo.structure) {
            Ok(coloring) => {
                ctx.state.augmented = Some((strand, coloring));
                PredicateResult::Success
            }
            Err(failure) => {
                ctx.state.augmented = None;
                record_failure(ctx, failure)
            }
        }
    }

    fn name(&self) -> &str {
        "Augment"
    }
}

/// Succeeds, recording the witness, when the augmented coloring covers every
/// strand; fails otherwise. Suspends if a failure was recorded.
#[derive(Debug, Default)]
pub struct CoveragePredicate;

impl Predicate for CoveragePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        if ctx.state.failure.is_some() {
            return PredicateResult::Suspend;
        }
        let (Some(triple_index), Some((augmentation, coloring))) =
            (ctx.state.triple_index, ctx.state.augmented.as_ref())
        else {
            return PredicateResult::Failure;
        };
        if !coloring.covers(&ctx.memo.structure) {
            return PredicateResult::Failure;
        }

        let witness = WitnessIds {
            triple_index,
            triple: ctx.memo.triples[triple_index],
            augmentation: *augmentation,
        };
        debug!(
            "triple #{} plus {} covers the diagram: {}",
            triple_index,
            ctx.memo.structure.label(witness.augmentation),
            coloring.describe(&ctx.memo.structure)
        );
        ctx.state.witness = Some(witness);
        ctx.cancel_others();
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Coverage"
    }
}
