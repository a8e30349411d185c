// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StrandSet type for representing sets of strands as bitsets.
//!
//! Bit i is set when strand i is in the set. Used for the colored union of a
//! coloring and for the full-coverage check of the bound search.
//!
//! # Examples
//!
//! ```
//! use wirtinger_trunk::diagram::{StrandId, StrandSet};
//!
//! let mut set = StrandSet::empty();
//! set.insert(StrandId::new(0));
//! set.insert(StrandId::new(2));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{0,2}");
//! assert!(set.is_subset(StrandSet::full(3)));
//! ```

use crate::diagram::strand::{StrandId, MAX_STRANDS};
use std::fmt;

/// A set of strands represented as a bitset.
///
/// Provides O(1) insert and contains operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrandSet(u64);

impl StrandSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create the set of the first `n` strands (ids 0..n).
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_STRANDS`.
    pub fn full(n: usize) -> Self {
        assert!(n <= MAX_STRANDS, "Strand set too large: {}", n);
        if n == MAX_STRANDS {
            Self(u64::MAX)
        } else {
            Self((1u64 << n) - 1)
        }
    }

    pub fn from_strands(strands: &[StrandId]) -> Self {
        let mut set = Self::empty();
        for &strand in strands {
            set.insert(strand);
        }
        set
    }

    pub fn contains(self, strand: StrandId) -> bool {
        (self.0 >> strand.value()) & 1 != 0
    }

    pub fn insert(&mut self, strand: StrandId) {
        self.0 |= 1 << strand.value();
    }

    /// Get the number of strands in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over all strands in the set, in ascending id order.
    pub fn iter(self) -> impl Iterator<Item = StrandId> {
        StrandSetIter { bits: self.0 }
    }
}

struct StrandSetIter {
    bits: u64,
}

impl Iterator for StrandSetIter {
    type Item = StrandId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(StrandId::new(idx))
    }
}

impl fmt::Display for StrandSet {
    /// Format a strand set as "{0,2,5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, strand) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", strand.value())?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<StrandId> for StrandSet {
    fn from_iter<I: IntoIterator<Item = StrandId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for strand in iter {
            set.insert(strand);
        }
        set
    }
}
