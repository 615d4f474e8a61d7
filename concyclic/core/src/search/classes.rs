//! Per-chord equivalence classes
//!
//! For a chord `(points[i], points[j])`, every earlier point `points[k]`
//! (`k < j`) is measured against the chord and grouped with the others that
//! measure the same. A class of size `m` means the chord plus those `m` points
//! share one circle.

use crate::geometry::{inscribed_tangent, InscribedTangent, Point};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Earlier points sharing one inscribed tangent relative to a chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordClass {
    pub tangent: InscribedTangent,
    /// Indices into the point sequence, ascending
    pub members: Vec<usize>,
}

impl ChordClass {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Lowest member index, where the class is first seen in a scan
    pub fn first(&self) -> usize {
        self.members[0]
    }
}

/// Group `points[..j]` by their measure relative to the chord `points[i]`–`points[j]`
///
/// Classes come out in order of first occurrence.
///
/// # Panics
/// If `i` or `j` is out of bounds for `points`.
pub fn chord_classes(points: &[Point], i: usize, j: usize) -> Vec<ChordClass> {
    let (a, b) = (points[i], points[j]);

    let mut slots: FxHashMap<InscribedTangent, usize> = FxHashMap::default();
    let mut classes: Vec<ChordClass> = Vec::new();

    for (k, &c) in points[..j].iter().enumerate() {
        let tangent = inscribed_tangent(a, b, c);
        match slots.entry(tangent) {
            Entry::Occupied(slot) => classes[*slot.get()].members.push(k),
            Entry::Vacant(slot) => {
                slot.insert(classes.len());
                classes.push(ChordClass {
                    tangent,
                    members: vec![k],
                });
            }
        }
    }

    classes
}
