// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates of the bound search program. Each
//! predicate represents one step of the search.
//!
//! # Organization
//!
//! - `seeds`: SeedTriplePredicate, a choice point over seed triples
//! - `obstruction`: ObstructionPredicate, keeps only promising triples
//! - `augment`: AugmentPredicate (choice of a fourth seed) and
//!   CoveragePredicate (full coverage check)
//! - Built-in terminal predicate: `SuspendPredicate`
//!
//! # Failures
//!
//! A predicate that hits an error inside `retry_pred` records it in
//! `ctx.state.failure` and succeeds; the next predicate's `try_pred` sees the
//! recorded failure and suspends, which ends the search.

pub mod augment;
pub mod obstruction;
pub mod seeds;

pub use augment::{AugmentPredicate, CoveragePredicate};
pub use obstruction::ObstructionPredicate;
pub use seeds::SeedTriplePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::error::TrunkError;

/// Record `failure` and hand over to the next predicate, which will suspend.
fn record_failure(ctx: &mut SearchContext, failure: TrunkError) -> PredicateResult {
    if ctx.state.failure.is_none() {
        ctx.state.failure = Some(failure);
    }
    ctx.cancel_others();
    PredicateResult::Success
}

/// Built-in suspend predicate: ends the search with the state preserved.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
