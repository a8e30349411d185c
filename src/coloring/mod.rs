// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Colorings of strands.
//!
//! A coloring partitions some of the strands of a diagram into disjoint color
//! classes, each grown from one seed strand. Colorings are produced only by
//! [`extend`], which is also the only place that adds strands to a color; the
//! classifier and the loop detector read them by shared reference.
//!
//! # Invariants
//!
//! - every seed belongs to its own color
//! - colors are pairwise disjoint (a strand has at most one color)
//! - membership only grows during propagation, and a strand never changes color

pub mod classify;
pub mod loops;
pub mod propagate;

pub use classify::{count_multicolored, multicolored_crossings};
pub use loops::{assemble_chain, find_separating_component, has_separating_component, Chain, SeparatingComponent};
pub use propagate::{extend, extend_labels, extend_observed};

use crate::diagram::{Crossing, CrossingKind, StrandId, StrandSet, StrandStructure, MAX_STRANDS};
use std::fmt;

/// Index of a color within one coloring.
///
/// Color `i` was grown from the `i`-th seed (seeds in ascending id order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorId(u8);

impl ColorId {
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < MAX_STRANDS, "Color out of range: {}", value);
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A partial coloring of a diagram's strands.
///
/// Keeps a reverse index (strand to color) in sync with the per-color member
/// lists, so color lookups are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    seeds: Vec<StrandId>,
    members: Vec<Vec<StrandId>>,
    color_of: [Option<ColorId>; MAX_STRANDS],
    colored: StrandSet,
}

impl Coloring {
    /// One singleton color per seed. Seeds must be distinct.
    pub(crate) fn from_seeds(seeds: &[StrandId]) -> Self {
        let mut coloring = Self {
            seeds: seeds.to_vec(),
            members: Vec::with_capacity(seeds.len()),
            color_of: [None; MAX_STRANDS],
            colored: StrandSet::empty(),
        };
        for (i, &seed) in seeds.iter().enumerate() {
            coloring.members.push(Vec::new());
            coloring.assign(seed, ColorId::new(i as u8));
        }
        coloring
    }

    /// Add an uncolored strand to a color.
    pub(crate) fn assign(&mut self, strand: StrandId, color: ColorId) {
        debug_assert!(
            self.color_of[strand.as_usize()].is_none(),
            "strand {} already colored",
            strand
        );
        self.color_of[strand.as_usize()] = Some(color);
        self.members[color.as_usize()].push(strand);
        self.colored.insert(strand);
    }

    pub fn num_colors(&self) -> usize {
        self.seeds.len()
    }

    pub fn colors(&self) -> impl Iterator<Item = ColorId> {
        (0..self.seeds.len()).map(|i| ColorId::new(i as u8))
    }

    /// The seed strand a color was grown from (the color's label).
    pub fn seed(&self, color: ColorId) -> StrandId {
        self.seeds[color.as_usize()]
    }

    /// Members of a color in the order they were colored, seed first.
    pub fn members(&self, color: ColorId) -> &[StrandId] {
        &self.members[color.as_usize()]
    }

    pub fn color_set(&self, color: ColorId) -> StrandSet {
        StrandSet::from_strands(self.members(color))
    }

    /// The color of a strand, or None when it is uncolored.
    pub fn color_of(&self, strand: StrandId) -> Option<ColorId> {
        self.color_of[strand.as_usize()]
    }

    /// Union of all color classes.
    pub fn colored(&self) -> StrandSet {
        self.colored
    }

    /// Whether every strand of the structure is colored.
    pub fn covers(&self, structure: &StrandStructure) -> bool {
        structure.universe().is_subset(self.colored)
    }

    /// Classify a crossing by the colors of its two under-arcs.
    pub fn classify(&self, crossing: &Crossing) -> CrossingKind {
        match (self.color_of(crossing.incoming), self.color_of(crossing.outgoing)) {
            (None, None) => CrossingKind::Uncolored,
            (Some(a), Some(b)) if a != b => CrossingKind::Multicolored,
            _ => CrossingKind::Consistent,
        }
    }

    /// Render by label, e.g. "A:{A,C} B:{B}".
    pub fn describe(&self, structure: &StrandStructure) -> String {
        self.colors()
            .map(|color| {
                format!(
                    "{}:{}",
                    structure.label(self.seed(color)),
                    structure.describe(self.color_set(color))
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", self.seed(color).value(), self.color_set(color))?;
        }
        Ok(())
    }
}
