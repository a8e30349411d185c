// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the context and incremented by the predicates as
//! the search visits seed triples and augmentations.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Seed triples whose coloring was built.
    TriplesEvaluated,
    /// Triples with a multicolored crossing or a separating component.
    PromisingTriples,
    MulticoloredTriples,
    SeparatingTriples,
    /// Four-seed colorings built while augmenting a promising triple.
    AugmentationsTried,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add another context's counters to these.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_merge() {
        let mut a = Statistics::new();
        a.increment_counter(Counters::TriplesEvaluated);
        a.increment_counter(Counters::TriplesEvaluated);
        a.increment_counter(Counters::AugmentationsTried);

        let mut b = Statistics::new();
        b.increment_counter(Counters::TriplesEvaluated);
        b.merge(&a);

        assert_eq!(b.get(Counters::TriplesEvaluated), 3);
        assert_eq!(b.get(Counters::AugmentationsTried), 1);
        assert_eq!(b.get(Counters::PromisingTriples), 0);
    }
}
