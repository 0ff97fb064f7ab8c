//! Pentago-Swap: place a piece, then exchange two quadrants.
//!
//! - 6×6 board split into four 3×3 quadrants
//! - Player 0 plays White and moves first
//! - A move places the mover's piece on an empty cell, then swaps one
//!   unordered pair of quadrants
//! - Five in a row, column or diagonal wins; five for both sides after the
//!   same move, or a full board, is a draw

mod game;

pub use game::{MoveError, PentagoMove, PentagoSwapState};
