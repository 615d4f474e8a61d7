//! Inscribed-angle measure
//!
//! The tangent of the signed angle a chord A–B subtends at a third point C.
//! Because tan has period π, both arcs of a circle through A and B give the
//! same value, so "C1 and C2 lie on one circle with A and B" is plain equality
//! of two measures. Points collinear with the chord measure exactly zero.
//!
//! The value is kept as a reduced fraction rather than an `f64` so equality
//! never depends on rounding.

use super::point::Point;
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact inscribed-angle tangent
///
/// `Finite` is always normalized: `den > 0` and `gcd(num, den) == 1`, with zero
/// stored as `0/1`. Structural equality is therefore rational equality, and the
/// type can key hash maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InscribedTangent {
    Finite { num: i128, den: i128 },
    /// The chord is seen at a right angle: it is a diameter of the circle
    Infinite,
}

impl InscribedTangent {
    pub const ZERO: InscribedTangent = InscribedTangent::Finite { num: 0, den: 1 };

    /// Build `cross / dot`, mapping a zero denominator to the infinite sentinel
    pub fn from_ratio(cross: i128, dot: i128) -> Self {
        if dot == 0 {
            return InscribedTangent::Infinite;
        }
        let g = cross.gcd(&dot);
        let (mut num, mut den) = (cross / g, dot / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        InscribedTangent::Finite { num, den }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, InscribedTangent::Infinite)
    }

    /// Zero means the certified points are collinear with the chord
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn to_f64(&self) -> f64 {
        match *self {
            InscribedTangent::Finite { num, den } => num as f64 / den as f64,
            InscribedTangent::Infinite => f64::INFINITY,
        }
    }
}

impl fmt::Display for InscribedTangent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InscribedTangent::Finite { num, den: 1 } => write!(f, "{}", num),
            InscribedTangent::Finite { num, den } => write!(f, "{}/{}", num, den),
            InscribedTangent::Infinite => write!(f, "inf"),
        }
    }
}

/// Tangent of the angle subtended at `c` by the chord `a`–`b`
///
/// `dot = (c-a)·(c-b)` and `cross = (c.y-a.y)(c.x-b.x) - (c.x-a.x)(c.y-b.y)`;
/// the measure is `cross / dot`, or `Infinite` when `dot == 0`. A point
/// coinciding with either chord endpoint also lands on `Infinite`.
pub fn inscribed_tangent(a: Point, b: Point, c: Point) -> InscribedTangent {
    let (ax, ay) = a.delta(&c);
    let (bx, by) = b.delta(&c);

    let dot = ax * bx + ay * by;
    let cross = ay * bx - ax * by;

    InscribedTangent::from_ratio(cross, dot)
}
