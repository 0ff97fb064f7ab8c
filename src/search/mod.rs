//! Adversarial search for the move decision.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning over boards supplied by a
//! [`BoardState`](crate::rules::BoardState) collaborator:
//!
//! - **Adaptive depth**: chosen once per search from the root's legal-move
//!   count (4 plies at ≤24 moves, 3 at ≤60, otherwise 2 by default)
//! - **Bounded leaves**: every leaf score lies in `[0, 1]`
//! - **No retained tree**: children are expanded lazily on the call stack
//! - **Configurable heuristics**: leaf evaluation is built from
//!   `SearchConfig::heuristics`
//!
//! ## Usage
//!
//! ```rust
//! use pentago_swap_ai::core::PlayerId;
//! use pentago_swap_ai::games::pentago_swap::PentagoSwapState;
//! use pentago_swap_ai::rules::BoardState;
//! use pentago_swap_ai::search::{AlphaBetaSearch, SearchConfig};
//!
//! let state = PentagoSwapState::new();
//!
//! // One ply keeps the example quick; the default policy picks 2 to 4.
//! let mut search = AlphaBetaSearch::new(SearchConfig::default().with_fixed_depth(1));
//! let result = search.search(&state, PlayerId::FIRST).unwrap();
//!
//! assert!(state.legal_moves().contains(&result.best_move));
//! assert!((0.0..=1.0).contains(&result.score));
//! ```

pub mod alphabeta;
pub mod config;
pub mod error;
pub mod node;
pub mod stats;

pub use alphabeta::{AlphaBetaSearch, SearchResult};
pub use config::{ConfigError, DepthPolicy, DepthTier, SearchConfig};
pub use error::{NoMoveReason, SearchError};
pub use node::{terminal_score, SearchNode};
pub use stats::SearchStats;
