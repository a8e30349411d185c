// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crossings of the diagram.
//!
//! A crossing is not stored on its own: it is the pair `(incoming, outgoing)`
//! recorded in the `over_crossings` of the strand passing over it. The
//! under-strand is split there into the arc arriving at the crossing and the
//! arc leaving it.

use crate::diagram::StrandId;

/// One crossing, as seen from its over-strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    /// The strand passing over the crossing.
    pub over: StrandId,
    /// Under-arc arriving at the crossing.
    pub incoming: StrandId,
    /// Under-arc leaving the crossing.
    pub outgoing: StrandId,
}

impl Crossing {
    pub fn new(over: StrandId, incoming: StrandId, outgoing: StrandId) -> Self {
        Self {
            over,
            incoming,
            outgoing,
        }
    }
}

/// Classification of a crossing relative to a coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingKind {
    /// Neither under-arc is colored.
    Uncolored,
    /// Exactly one under-arc is colored, or both carry the same color.
    Consistent,
    /// Both under-arcs are colored, with different colors. An obstruction.
    Multicolored,
}
