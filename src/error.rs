// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for structure validation, coloring and bound search.

use thiserror::Error;

/// Errors that can occur while building a strand structure or searching it.
///
/// Any error aborts the whole bound computation: a malformed structure
/// invalidates every seed set, not just the one being evaluated.
#[derive(Debug, Error)]
pub enum TrunkError {
    /// A seed label does not name a strand of the structure.
    #[error("seed strand {label:?} is not in the structure")]
    InvalidSeed { label: String },

    /// The same strand was given twice as a seed.
    #[error("seed strand {label:?} given more than once")]
    DuplicateSeed { label: String },

    /// A coloring needs at least one seed.
    #[error("no seed strands given")]
    EmptySeeds,

    /// The structure is not closed under reference or is otherwise unusable.
    #[error("malformed strand structure: {reason}")]
    MalformedStructure { reason: String },

    /// The structure has more strands than a `StrandSet` can hold.
    #[error("structure has {count} strands (max {max})")]
    TooManyStrands { count: usize, max: usize },

    #[error("cannot read structure: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse structure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl TrunkError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TrunkError::MalformedStructure {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrunkError>;
