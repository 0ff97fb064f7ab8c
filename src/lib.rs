//! # pentago-swap-ai
//!
//! Move selection for Pentago-Swap: a 6×6 five-in-a-row game where each
//! move places a piece and then exchanges two of the four 3×3 quadrants.
//!
//! ## Design Principles
//!
//! 1. **Board-Agnostic Search**: The engine talks to the game only through
//!    the [`BoardState`] trait. Any board that can list moves, apply them on
//!    a copy and report a winner can be searched.
//!
//! 2. **Scores in `[0, 1]`**: Every leaf value, terminal or heuristic, is
//!    the searching player's estimated chance of winning.
//!
//! 3. **Configuration Over Convention**: Depth tiers and the heuristic list
//!    live in a serializable [`SearchConfig`].
//!
//! ## Modules
//!
//! - `core`: Players, pieces, deterministic RNG
//! - `rules`: `BoardState` trait for game implementations
//! - `board`: Grid snapshots, quadrants, swap variants
//! - `eval`: Line scanner, pattern heuristics, composite evaluator
//! - `search`: Alpha-beta minimax with an adaptive depth limit
//! - `agent`: Agents built on the search, plus a random baseline
//! - `games`: Reference Pentago-Swap rules

pub mod core;
pub mod rules;
pub mod board;
pub mod eval;
pub mod search;
pub mod agent;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, Piece, PlayerId};

pub use crate::rules::{BoardState, Winner};

pub use crate::board::{swap_variants, Grid, Quadrant, QuadrantPair};

pub use crate::eval::{
    CompositeEvaluator, FourAndOneEmptyOrFive, Heuristic, HeuristicKind, Position,
    ThreeAndTwoEmpty,
};

pub use crate::search::{
    AlphaBetaSearch, DepthPolicy, SearchConfig, SearchError, SearchResult, SearchStats,
};

pub use crate::agent::{play_match, Agent, AlphaBetaAgent, RandomAgent};

pub use crate::games::pentago_swap::{PentagoMove, PentagoSwapState};
