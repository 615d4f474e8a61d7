//! Search module - Counting and enumerating concyclic sets
//!
//! Both engines classify the same chords with [`chord_classes`] and must agree:
//! `count_circles(p) == enumerate_circles(p).count()`.

pub mod classes;
pub mod count;
pub mod enumerate;

pub use classes::*;
pub use count::*;
pub use enumerate::*;
