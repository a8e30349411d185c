// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximal color extension.
//!
//! Starting from one singleton color per seed, propagation repeatedly scans
//! every colored strand. For each crossing that strand passes over, if exactly
//! one under-arc is colored, the other joins its color. Scanning stops after a
//! pass that colors nothing.
//!
//! Every productive pass colors at least one new strand, so there are at most
//! `|strands|` passes. Colors are scanned in seed order and members in the
//! order they joined; a strand added during a pass is scanned in that same
//! pass.

use log::trace;

use crate::coloring::Coloring;
use crate::diagram::{StrandId, StrandSet, StrandStructure};
use crate::error::{Result, TrunkError};

/// Compute the maximal coloring grown from `seeds`.
///
/// Seeds are sorted by id first, so the result depends only on the seed set.
///
/// Fails with `EmptySeeds`, with `InvalidSeed` when a seed is not a strand of
/// `structure`, or with `DuplicateSeed`.
///
/// # Example
///
/// ```
/// use wirtinger_trunk::coloring::extend;
/// use wirtinger_trunk::diagram::StrandStructure;
///
/// let hopf = StrandStructure::from_json(r#"{
///     "X": { "arc_sequence": [-2, 1, -2], "over_crossings": [["Y", "Y"]] },
///     "Y": { "arc_sequence": [-1, 2, -1], "over_crossings": [["X", "X"]] }
/// }"#).unwrap();
///
/// let x = hopf.lookup("X").unwrap();
/// let coloring = extend(&[x], &hopf).unwrap();
/// assert_eq!(coloring.colored().len(), 1);
/// ```
pub fn extend(seeds: &[StrandId], structure: &StrandStructure) -> Result<Coloring> {
    extend_observed(seeds, structure, |_, _| {})
}

/// [`extend`] with seeds given by label.
pub fn extend_labels<S: AsRef<str>>(labels: &[S], structure: &StrandStructure) -> Result<Coloring> {
    let seeds = structure.resolve_seeds(labels)?;
    extend(&seeds, structure)
}

/// [`extend`], calling `observer(pass, coloring)` after every pass.
///
/// Pass numbers start at 1; the last observed pass is the one that found
/// nothing new.
pub fn extend_observed<F>(
    seeds: &[StrandId],
    structure: &StrandStructure,
    mut observer: F,
) -> Result<Coloring>
where
    F: FnMut(usize, &Coloring),
{
    let seeds = canonical_seeds(seeds, structure)?;
    let mut coloring = Coloring::from_seeds(&seeds);

    let mut pass = 0;
    loop {
        pass += 1;
        let mut changed = false;

        for color in 0..coloring.num_colors() {
            let mut i = 0;
            while i < coloring.members[color].len() {
                let strand = coloring.members[color][i];
                for crossing in structure.strand(strand).over_crossings() {
                    match (
                        coloring.color_of(crossing.incoming),
                        coloring.color_of(crossing.outgoing),
                    ) {
                        (Some(c), None) => {
                            coloring.assign(crossing.outgoing, c);
                            changed = true;
                        }
                        (None, Some(c)) => {
                            coloring.assign(crossing.incoming, c);
                            changed = true;
                        }
                        _ => {}
                    }
                }
                i += 1;
            }
        }

        trace!("pass {}: {} strands colored", pass, coloring.colored().len());
        observer(pass, &coloring);

        if !changed {
            return Ok(coloring);
        }
    }
}

fn canonical_seeds(seeds: &[StrandId], structure: &StrandStructure) -> Result<Vec<StrandId>> {
    if seeds.is_empty() {
        return Err(TrunkError::EmptySeeds);
    }
    let mut seen = StrandSet::empty();
    for &seed in seeds {
        if seed.as_usize() >= structure.len() {
            return Err(TrunkError::InvalidSeed {
                label: seed.to_string(),
            });
        }
        if seen.contains(seed) {
            return Err(TrunkError::DuplicateSeed {
                label: structure.label(seed).to_string(),
            });
        }
        seen.insert(seed);
    }
    Ok(seen.iter().collect())
}
