// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The per-strand crossing structure of a diagram.
//!
//! The structure is produced by an external diagram builder from a Gauss code
//! and consumed here as-is. Each strand records:
//!
//! - `arc_sequence`: the signed crossing numbers met along the strand. The
//!   first and last entries are the strand's endpoints, the under-crossings
//!   where it starts and stops (negative). Interior entries are crossings the
//!   strand passes over (positive).
//! - `over_crossings`: for every crossing the strand passes over, the pair
//!   `(incoming, outgoing)` of under-arc labels.
//!
//! # JSON form
//!
//! ```
//! use wirtinger_trunk::diagram::StrandStructure;
//!
//! let hopf = StrandStructure::from_json(r#"{
//!     "X": { "arc_sequence": [-2, 1, -2], "over_crossings": [["Y", "Y"]] },
//!     "Y": { "arc_sequence": [-1, 2, -1], "over_crossings": [["X", "X"]] }
//! }"#).unwrap();
//!
//! assert_eq!(hopf.len(), 2);
//! assert_eq!(hopf.label(hopf.lookup("Y").unwrap()), "Y");
//! ```

use crate::diagram::{Crossing, StrandId, StrandSet, MAX_STRANDS};
use crate::error::{Result, TrunkError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// A strand as delivered by the diagram builder, with crossings named by label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandRecord {
    pub arc_sequence: Vec<i32>,
    #[serde(default)]
    pub over_crossings: Vec<(String, String)>,
}

/// A strand with its crossings resolved to ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strand {
    label: String,
    arc_sequence: Vec<i32>,
    over_crossings: Vec<Crossing>,
}

impl Strand {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn arc_sequence(&self) -> &[i32] {
        &self.arc_sequence
    }

    /// Crossings this strand passes over, in record order.
    pub fn over_crossings(&self) -> &[Crossing] {
        &self.over_crossings
    }

    /// Endpoint the strand starts from.
    pub fn start(&self) -> i32 {
        self.arc_sequence[0]
    }

    /// Endpoint the strand runs into.
    pub fn end(&self) -> i32 {
        self.arc_sequence[self.arc_sequence.len() - 1]
    }
}

/// Immutable strand-crossing structure of one diagram.
///
/// Strand ids follow lexicographic label order. Every label referenced by an
/// `over_crossings` pair is guaranteed to name a strand of the structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, StrandRecord>",
    into = "BTreeMap<String, StrandRecord>"
)]
pub struct StrandStructure {
    strands: Vec<Strand>,
    index: HashMap<String, StrandId>,
}

impl StrandStructure {
    /// Build and validate a structure from labelled records.
    ///
    /// Fails with `MalformedStructure` when the structure is empty, a label is
    /// repeated, an arc sequence is empty or holds `0` or `i32::MIN`, or a
    /// crossing names an unknown strand; fails with `TooManyStrands` beyond
    /// `MAX_STRANDS` strands.
    pub fn from_records<I, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, StrandRecord)>,
        S: Into<String>,
    {
        let mut sorted: BTreeMap<String, StrandRecord> = BTreeMap::new();
        for (label, record) in records {
            let label = label.into();
            if sorted.contains_key(&label) {
                return Err(TrunkError::malformed(format!(
                    "strand {label} defined more than once"
                )));
            }
            sorted.insert(label, record);
        }
        Self::try_from(sorted)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Number of strands.
    pub fn len(&self) -> usize {
        self.strands.len()
    }

    /// Always false for a validated structure.
    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    pub fn strand(&self, id: StrandId) -> &Strand {
        &self.strands[id.as_usize()]
    }

    pub fn label(&self, id: StrandId) -> &str {
        &self.strands[id.as_usize()].label
    }

    pub fn lookup(&self, label: &str) -> Option<StrandId> {
        self.index.get(label).copied()
    }

    /// All strand ids, in label order.
    pub fn ids(&self) -> impl Iterator<Item = StrandId> + '_ {
        (0..self.strands.len()).map(|i| StrandId::new(i as u8))
    }

    /// The set of every strand; the target of the full-coverage check.
    pub fn universe(&self) -> StrandSet {
        StrandSet::full(self.strands.len())
    }

    /// Resolve seed labels to strand ids.
    ///
    /// Fails with `EmptySeeds`, `InvalidSeed` for an unknown label, or
    /// `DuplicateSeed` when a label is listed twice.
    pub fn resolve_seeds<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<StrandId>> {
        if labels.is_empty() {
            return Err(TrunkError::EmptySeeds);
        }
        let mut seen = StrandSet::empty();
        let mut ids = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            let id = self.lookup(label).ok_or_else(|| TrunkError::InvalidSeed {
                label: label.to_string(),
            })?;
            if seen.contains(id) {
                return Err(TrunkError::DuplicateSeed {
                    label: label.to_string(),
                });
            }
            seen.insert(id);
            ids.push(id);
        }
        Ok(ids)
    }

    /// Render a set of strands by label, e.g. "{A,C}".
    pub fn describe(&self, set: StrandSet) -> String {
        let labels: Vec<&str> = set.iter().map(|id| self.label(id)).collect();
        format!("{{{}}}", labels.join(","))
    }
}

impl TryFrom<BTreeMap<String, StrandRecord>> for StrandStructure {
    type Error = TrunkError;

    fn try_from(records: BTreeMap<String, StrandRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(TrunkError::malformed("structure has no strands"));
        }
        if records.len() > MAX_STRANDS {
            return Err(TrunkError::TooManyStrands {
                count: records.len(),
                max: MAX_STRANDS,
            });
        }

        let index: HashMap<String, StrandId> = records
            .keys()
            .enumerate()
            .map(|(i, label)| (label.clone(), StrandId::new(i as u8)))
            .collect();

        let resolve = |owner: &str, label: &str| {
            index.get(label).copied().ok_or_else(|| {
                TrunkError::malformed(format!(
                    "strand {owner} crosses over unknown strand {label}"
                ))
            })
        };

        let mut strands = Vec::with_capacity(records.len());
        for (i, (label, record)) in records.iter().enumerate() {
            if record.arc_sequence.is_empty() {
                return Err(TrunkError::malformed(format!(
                    "strand {label} has an empty arc sequence"
                )));
            }
            // Crossing numbers are signed and must negate without overflow.
            if let Some(entry) = record
                .arc_sequence
                .iter()
                .find(|&&entry| entry == 0 || entry == i32::MIN)
            {
                return Err(TrunkError::malformed(format!(
                    "strand {label} has crossing number {entry} in its arc sequence"
                )));
            }
            let over = StrandId::new(i as u8);
            let over_crossings = record
                .over_crossings
                .iter()
                .map(|(incoming, outgoing)| {
                    Ok(Crossing::new(
                        over,
                        resolve(label, incoming)?,
                        resolve(label, outgoing)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            strands.push(Strand {
                label: label.clone(),
                arc_sequence: record.arc_sequence.clone(),
                over_crossings,
            });
        }

        Ok(Self { strands, index })
    }
}

impl From<StrandStructure> for BTreeMap<String, StrandRecord> {
    fn from(structure: StrandStructure) -> Self {
        let StrandStructure { strands, .. } = structure;
        let labels: Vec<String> = strands.iter().map(|s| s.label.clone()).collect();
        strands
            .into_iter()
            .map(|strand| {
                let over_crossings = strand
                    .over_crossings
                    .iter()
                    .map(|c| {
                        (
                            labels[c.incoming.as_usize()].clone(),
                            labels[c.outgoing.as_usize()].clone(),
                        )
                    })
                    .collect();
                (
                    strand.label,
                    StrandRecord {
                        arc_sequence: strand.arc_sequence,
                        over_crossings,
                    },
                )
            })
            .collect()
    }
}
