// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred on each predicate
//! 2. If Success: advance to next predicate
//! 3. If Choices(n): enter choice mode, call retry_pred(0..n-1)
//! 4. If Failure: backtrack to previous stack entry
//! 5. If Suspend: stop and return control to caller
//!
//! The bound search is one such program:
//!
//! ```text
//! SeedTriple -> Obstruction -> Augment -> Coverage -> Suspend
//! ```
//!
//! Suspending means a witness was found (or a failure recorded); exhausting
//! the program means no seed triple leads to full coverage.

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use log::trace;

use crate::context::SearchContext;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn call(predicate_index: usize) -> Self {
        Self {
            predicate_index,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }

    /// A deterministic success has no alternatives: backtracking into this
    /// entry pops it.
    fn settle(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    predicates: Vec<Box<dyn Predicate>>,
    stack: Vec<StackEntry>,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates are tried in the order given. Prefer [`EngineBuilder`],
    /// which guarantees the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        let stack = Vec::with_capacity(predicates.len());
        Self { predicates, stack }
    }

    /// Run the program until it suspends or is exhausted.
    ///
    /// Returns true if a predicate suspended, false once every choice has
    /// failed.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without a FAIL or
    /// SUSPEND predicate, or if retry_pred returns Choices or Suspend.
    pub fn search(&mut self, ctx: &mut SearchContext) -> bool {
        self.stack.clear();
        if self.predicates.is_empty() {
            return false;
        }
        self.stack.push(StackEntry::call(0));

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return false; // Search exhausted (all choices failed)
            };

            if !entry.in_choice_mode {
                let result = self.predicates[entry.predicate_index].try_pred(ctx);

                match result {
                    PredicateResult::Success => {
                        entry.settle();
                        self.push_next_predicate();
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                    }
                    PredicateResult::Suspend => {
                        trace!(
                            "suspended in {}",
                            self.predicates[entry.predicate_index].name()
                        );
                        return true;
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                let result = self.predicates[entry.predicate_index].retry_pred(ctx, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::call(next_index));
    }
}

/// Builds a predicate sequence that is guaranteed to end with a terminal
/// predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// An [`EngineBuilder`] whose sequence has been terminated.
pub struct TerminatedEngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedEngineBuilder {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedEngineBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
