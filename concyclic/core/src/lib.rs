//! Concyclic core
//!
//! Exact detection and enumeration of circles through four or more lattice points

pub mod geometry; // Points, inscribed-angle predicate, circle descriptors
pub mod search;   // Chord classification, counting and lazy enumeration
pub mod session;  // Board state driving both engines
pub mod loader;   // JSON point sets

pub use geometry::{inscribed_tangent, CircleInfo, InscribedTangent, Locus, Point};
pub use search::{chord_classes, count_circles, count_circles_until, enumerate_circles, ChordClass, CircleEnumerator};
pub use session::{ConfigError, CountState, Session, SessionConfig, SessionError};
pub use loader::{load_point_set, load_point_sets, LoadError, LoadResult, PointSet};
