// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ObstructionPredicate - keep only triples worth augmenting.

use log::debug;

use crate::coloring::{count_multicolored, has_separating_component};
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Counters, Obstruction};

/// Succeeds when the current triple's coloring has a multicolored crossing
/// or a separating component; fails otherwise. Suspends if a failure was
/// recorded by the previous predicate.
#[derive(Debug, Default)]
pub struct ObstructionPredicate;

impl Predicate for ObstructionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
        if ctx.state.failure.is_some() {
            return PredicateResult::Suspend;
        }
        let Some(coloring) = ctx.state.coloring.as_ref() else {
            return PredicateResult::Failure;
        };

        let structure = &ctx.memo.structure;
        let obstruction = Obstruction {
            multicolored: count_multicolored(coloring, structure),
            separating: has_separating_component(coloring, structure),
        };
        ctx.state.obstruction = obstruction;

        if obstruction.multicolored > 0 {
            ctx.statistics.increment_counter(Counters::MulticoloredTriples);
        }
        if obstruction.separating {
            ctx.statistics.increment_counter(Counters::SeparatingTriples);
        }
        if !obstruction.is_promising() {
            return PredicateResult::Failure;
        }

        ctx.statistics.increment_counter(Counters::PromisingTriples);
        debug!(
            "promising triple {}: {} multicolored, separating {}",
            coloring.describe(structure),
            obstruction.multicolored,
            obstruction.separating
        );
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Obstruction"
    }
}
