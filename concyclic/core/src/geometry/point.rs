//! Lattice points
//!
//! Integer coordinates only; equality is exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point of the integer lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the point falls inside a board of side `bound`
    ///
    /// The board grows right and down from the origin: `x < bound` and `y > -bound`.
    pub fn is_visible(&self, bound: i32) -> bool {
        self.x < bound && self.y > -bound
    }

    /// Vector from `self` to `other`, widened so products never overflow
    pub(crate) fn delta(&self, other: &Point) -> (i128, i128) {
        (
            other.x as i128 - self.x as i128,
            other.y as i128 - self.y as i128,
        )
    }

    /// Euclidean distance to a real-valued position
    pub fn distance_to(&self, (x, y): (f64, f64)) -> f64 {
        let dx = x - self.x as f64;
        let dy = y - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
