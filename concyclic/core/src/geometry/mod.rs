//! Geometry module - Pure lattice geometry
//!
//! Points, the exact inscribed-angle predicate, and circle descriptors.
//! No search logic here, just the membership test everything else is built on.

pub mod point;
pub mod tangent;
pub mod circle;

pub use point::*;
pub use tangent::*;
pub use circle::*;
