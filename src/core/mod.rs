//! Core types: players, pieces and deterministic RNG.
//!
//! These are shared by the board snapshot, the evaluator and the
//! reference game.

pub mod piece;
pub mod player;
pub mod rng;

pub use piece::Piece;
pub use player::PlayerId;
pub use rng::GameRng;
