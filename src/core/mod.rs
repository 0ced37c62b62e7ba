//! Board primitives: squares, cells, and the 5x5 grid value.
//!
//! - [`coord`]: board squares and the 8 compass steps.
//! - [`cell`]: cell contents and the two sides.
//! - [`board`]: the `Copy` grid with text rendering and parsing.

pub mod board;
pub mod cell;
pub mod coord;
