// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Strand identifiers.
//!
//! A strand is an oriented arc of the diagram running between two consecutive
//! under-crossings. Strands carry string labels in the input, but inside the
//! search they are addressed by a compact index assigned when the
//! [`StrandStructure`](super::StrandStructure) is built.

use std::fmt;

/// Maximum number of strands in one structure (capacity of a `StrandSet`).
pub const MAX_STRANDS: usize = 64;

/// Index of a strand within its structure, in the range 0..MAX_STRANDS.
///
/// Ids are assigned in lexicographic label order, so comparing ids compares
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrandId(u8);

impl StrandId {
    /// Create a new strand id, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_STRANDS`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < MAX_STRANDS, "Strand out of range: {}", value);
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the id as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
