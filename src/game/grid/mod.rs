//! Grid model.
//!
//! Owns the square tile array and point-addressed reads and writes.

pub mod grid;

pub use grid::*;
