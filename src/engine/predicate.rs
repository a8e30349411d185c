// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! is a step of the search: it can offer choices, filter, or end the search.

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// - `Success`: Move to next predicate in the sequence
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Stop execution and return control to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Engine will call retry_pred(choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A predicate that ends a program: it never returns Success.
///
/// `EngineBuilder::terminal` only accepts terminal predicates, so every
/// program built with the builder ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for choice 0, 1, ... until one
///    succeeds; each later backtrack into this predicate tries the next choice
///
/// Predicates keep what they choose in `ctx.state`. A choice overwrites the
/// state left by the previous one, so no undo is needed on backtrack.
///
/// # Example
///
/// ```
/// use wirtinger_trunk::context::SearchContext;
/// use wirtinger_trunk::engine::{Predicate, PredicateResult};
///
/// #[derive(Debug)]
/// struct EveryStrand;
///
/// impl Predicate for EveryStrand {
///     fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult {
///         PredicateResult::Choices(ctx.memo.structure.len())
///     }
///
///     fn retry_pred(&mut self, _ctx: &mut SearchContext, _choice: usize) -> PredicateResult {
///         PredicateResult::Success
///     }
/// }
/// ```
pub trait Predicate: Debug {
    /// Try this predicate when the engine first reaches it.
    fn try_pred(&mut self, ctx: &mut SearchContext) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for choices in 0..n.
    /// Cannot return Choices or Suspend (we're already in choice mode).
    #[allow(unused)]
    fn retry_pred(&mut self, ctx: &mut SearchContext, choice: usize) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging; defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
