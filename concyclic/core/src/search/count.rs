//! Circle counting
//!
//! Every chord `(j, i)` with `2 <= j < i` is classified against the points
//! before `j`. A class of two certifies a four-point circle (+1); a class of
//! three corrects for the extra certification a larger circle picks up (-1).
//!
//! For a circle through `n >= 4` points the chords whose lower endpoint is its
//! third member contribute `n - 3`, those whose lower endpoint is its fourth
//! member contribute `-(n - 4)`, and nothing else contributes, so each circle
//! nets exactly one regardless of size.

use super::classes::chord_classes;
use crate::geometry::Point;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};

/// Number of distinct circles (or lines) through at least four of `points`
///
/// Points are expected to be distinct.
pub fn count_circles(points: &[Point]) -> i64 {
    let never = AtomicBool::new(false);
    count_circles_until(points, &never).unwrap_or(0)
}

/// [`count_circles`] that gives up once `cancel` is set
///
/// The flag is checked before each upper chord endpoint `i`. Returns `None`
/// when the count was abandoned.
pub fn count_circles_until(points: &[Point], cancel: &AtomicBool) -> Option<i64> {
    let mut discovered: i64 = 0;

    for i in 3..points.len() {
        if cancel.load(Ordering::Relaxed) {
            debug!(points = points.len(), reached = i, "count cancelled");
            return None;
        }
        for j in 2..i {
            for class in chord_classes(points, i, j) {
                match class.len() {
                    2 => discovered += 1,
                    3 => discovered -= 1,
                    _ => {}
                }
            }
            trace!(i, j, discovered, "chord classified");
        }
    }

    debug!(points = points.len(), circles = discovered, "counted circles");
    Some(discovered)
}
