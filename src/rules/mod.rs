//! Board collaborator contract.
//!
//! Games implement `BoardState` to provide:
//! - Legal moves for the player to move
//! - How a move modifies the board
//! - Win/draw detection and piece lookup
//!
//! The search calls into `BoardState` but never interprets
//! game-specific moves directly.

pub mod engine;

pub use engine::{BoardState, Winner};
