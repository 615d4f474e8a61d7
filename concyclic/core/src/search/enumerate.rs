//! Lazy circle enumeration
//!
//! `CircleEnumerator` walks the same chords as [`count_circles`](super::count_circles)
//! from the top down: `i` from `N-1` to `3`, `j` from `i-1` to `2`, and within
//! a chord the classes by descending first index. A class of two yields a
//! descriptor; a class of three marks its two lowest members so the pair is
//! not yielded again later in the same `i` pass.

use super::classes::{chord_classes, ChordClass};
use crate::geometry::{CircleInfo, Point};
use rustc_hash::FxHashSet;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Cursor over the circles through at least four of a point sequence
///
/// Owns its copy of the points. Restarting means building a new one.
#[derive(Debug, Clone)]
pub struct CircleEnumerator {
    points: Vec<Point>,
    /// Chord whose classes are in `pending`
    chord: (usize, usize),
    /// Chord to classify once `pending` runs dry
    next_chord: Option<(usize, usize)>,
    /// Classes of `chord` still to visit; popped from the back
    pending: Vec<ChordClass>,
    /// Pair keys `first * i + second` already covered by a larger class in this `i` pass
    covered: FxHashSet<usize>,
    yielded: usize,
}

impl CircleEnumerator {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let points = points.into();
        let n = points.len();
        let next_chord = (n >= 4).then(|| (n - 1, n - 2));
        debug!(points = n, "starting circle enumeration");

        Self {
            points,
            chord: (0, 0),
            next_chord,
            pending: Vec::new(),
            covered: FxHashSet::default(),
            yielded: 0,
        }
    }

    /// Points being enumerated, in input order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of descriptors produced so far
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    fn advance_chord(&mut self) -> Option<(usize, usize)> {
        let (i, j) = self.next_chord?;
        self.next_chord = if j > 2 {
            Some((i, j - 1))
        } else if i > 3 {
            Some((i - 1, i - 2))
        } else {
            None
        };
        Some((i, j))
    }
}

impl Iterator for CircleEnumerator {
    type Item = CircleInfo;

    fn next(&mut self) -> Option<CircleInfo> {
        loop {
            let (i, j) = self.chord;

            while let Some(class) = self.pending.pop() {
                match class.members.as_slice() {
                    &[first, second] => {
                        if !self.covered.contains(&(first * i + second)) {
                            self.yielded += 1;
                            return Some(CircleInfo::new(
                                self.points[i],
                                self.points[j],
                                class.tangent,
                            ));
                        }
                    }
                    &[first, second, _] => {
                        self.covered.insert(first * i + second);
                    }
                    _ => {}
                }
            }

            let Some((next_i, next_j)) = self.advance_chord() else {
                trace!(circles = self.yielded, "enumeration exhausted");
                return None;
            };
            if next_i != i {
                self.covered.clear();
            }
            self.chord = (next_i, next_j);
            self.pending = chord_classes(&self.points, next_i, next_j);
            trace!(i = next_i, j = next_j, classes = self.pending.len(), "chord classified");
        }
    }
}

impl FusedIterator for CircleEnumerator {}

/// Start a fresh enumeration over `points`
pub fn enumerate_circles(points: &[Point]) -> CircleEnumerator {
    CircleEnumerator::new(points.to_vec())
}
