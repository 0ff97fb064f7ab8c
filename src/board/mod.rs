//! Board snapshot and quadrant geometry.
//!
//! The evaluator works on `Grid`, a plain 6×6 copy of the pieces taken
//! from the board collaborator. Quadrant swaps derive new grids; the
//! collaborator's own board is never mutated.

pub mod grid;
pub mod quadrant;
pub mod swap;

pub use grid::{Grid, ParseGridError};
pub use quadrant::{Quadrant, QuadrantPair};
pub use swap::{swap_variants, swap_variants_where, SwapVariants};

/// Board size (6×6).
pub const BOARD_SIZE: usize = 6;

/// Quadrant size (3×3).
pub const QUADRANT_SIZE: usize = BOARD_SIZE / 2;
