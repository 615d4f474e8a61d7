//! Circle descriptors
//!
//! A `CircleInfo` is a witness, not a membership list: it names a chord and
//! the inscribed tangent every other member shares with respect to it.

use super::point::Point;
use super::tangent::{inscribed_tangent, InscribedTangent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One circle (or line) through at least four of the input points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircleInfo {
    /// Higher-index chord endpoint
    pub p1: Point,
    /// Lower-index chord endpoint
    pub p2: Point,
    /// Measure shared by the other members relative to `p1`–`p2`
    pub tangent: InscribedTangent,
}

/// The figure certified by a `CircleInfo`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Locus {
    /// Zero tangent: every member is collinear with the chord
    Line { through: (Point, Point) },
    Circle { center: (f64, f64), radius: f64 },
}

impl CircleInfo {
    pub fn new(p1: Point, p2: Point, tangent: InscribedTangent) -> Self {
        Self { p1, p2, tangent }
    }

    /// Whether `point` lies on the described circle
    pub fn contains(&self, point: Point) -> bool {
        point == self.p1
            || point == self.p2
            || inscribed_tangent(self.p1, self.p2, point) == self.tangent
    }

    /// Members of `points` lying on the described circle, in input order
    pub fn members(&self, points: &[Point]) -> Vec<Point> {
        points.iter().copied().filter(|p| self.contains(*p)).collect()
    }

    /// Centre and radius, or the supporting line when the tangent is zero
    ///
    /// The centre sits on the perpendicular bisector of the chord, offset from
    /// its midpoint by `(d.y, -d.x) / 2t` where `d = p2 - p1`. An infinite
    /// tangent puts it on the midpoint itself.
    pub fn locus(&self) -> Locus {
        let (dx, dy) = self.p1.delta(&self.p2);
        let (mx, my) = (
            self.p1.x as f64 + dx as f64 / 2.0,
            self.p1.y as f64 + dy as f64 / 2.0,
        );

        let center = match self.tangent {
            InscribedTangent::Finite { num: 0, .. } => {
                return Locus::Line {
                    through: (self.p1, self.p2),
                };
            }
            InscribedTangent::Finite { num, den } => {
                let scale = den as f64 / (2.0 * num as f64);
                (mx + dy as f64 * scale, my - dx as f64 * scale)
            }
            InscribedTangent::Infinite => (mx, my),
        };

        Locus::Circle {
            center,
            radius: self.p1.distance_to(center),
        }
    }
}

impl fmt::Display for CircleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chord {} {} tangent {}", self.p1, self.p2, self.tangent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn assert_circle(locus: Locus, cx: f64, cy: f64, r: f64) {
        match locus {
            Locus::Circle { center, radius } => {
                assert!((center.0 - cx).abs() < 1e-9, "center.x = {}", center.0);
                assert!((center.1 - cy).abs() < 1e-9, "center.y = {}", center.1);
                assert!((radius - r).abs() < 1e-9, "radius = {}", radius);
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_contains_uses_chord_and_tangent() {
        let a = p(1, 1);
        let b = p(0, 1);
        let info = CircleInfo::new(a, b, inscribed_tangent(a, b, p(0, 0)));

        assert!(info.contains(p(1, 1)));
        assert!(info.contains(p(0, 1)));
        assert!(info.contains(p(0, 0)));
        assert!(info.contains(p(1, 0)));
        assert!(!info.contains(p(2, 2)));
    }

    #[test]
    fn test_members_keep_input_order() {
        let points = [p(0, 0), p(1, 0), p(5, 5), p(0, 1), p(1, 1)];
        let info = CircleInfo::new(p(1, 1), p(0, 1), InscribedTangent::from_ratio(-1, 1));
        assert_eq!(
            info.members(&points),
            vec![p(0, 0), p(1, 0), p(0, 1), p(1, 1)]
        );
    }

    #[test]
    fn test_locus_of_unit_square() {
        let info = CircleInfo::new(p(1, 1), p(0, 1), InscribedTangent::from_ratio(-1, 1));
        assert_circle(info.locus(), 0.5, 0.5, std::f64::consts::FRAC_1_SQRT_2);
    }

    #[test]
    fn test_locus_from_general_chord() {
        // Circle through (0,0), (2,0), (0,2): centre (1,1)
        let a = p(0, 0);
        let b = p(2, 0);
        let info = CircleInfo::new(a, b, inscribed_tangent(a, b, p(0, 2)));
        assert_circle(info.locus(), 1.0, 1.0, 2f64.sqrt());
    }

    #[test]
    fn test_locus_of_diameter_chord() {
        let info = CircleInfo::new(p(-5, 0), p(5, 0), InscribedTangent::Infinite);
        assert_circle(info.locus(), 0.0, 0.0, 5.0);
    }

    #[test]
    fn test_zero_tangent_is_a_line() {
        let info = CircleInfo::new(p(3, 0), p(2, 0), InscribedTangent::ZERO);
        assert_eq!(
            info.locus(),
            Locus::Line {
                through: (p(3, 0), p(2, 0))
            }
        );
    }
}
