// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagram types consumed by the search.
//!
//! - StrandId: compact strand index
//! - StrandSet: bitset of strands
//! - Crossing: an over-strand with its two under-arcs
//! - StrandStructure: the immutable per-strand crossing structure

pub mod crossing;
pub mod strand;
pub mod strand_set;
pub mod structure;

pub use crossing::{Crossing, CrossingKind};
pub use strand::{StrandId, MAX_STRANDS};
pub use strand_set::StrandSet;
pub use structure::{Strand, StrandRecord, StrandStructure};
