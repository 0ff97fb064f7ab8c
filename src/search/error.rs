//! Search errors.

use thiserror::Error;

use crate::rules::Winner;

use super::config::ConfigError;

/// Why a search could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMoveReason {
    /// The game on the board has already ended.
    GameOver(Winner),
    /// The board reports no legal moves.
    NoLegalMoves,
}

impl std::fmt::Display for NoMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoMoveReason::GameOver(winner) => write!(f, "game is over ({})", winner),
            NoMoveReason::NoLegalMoves => write!(f, "no legal moves"),
        }
    }
}

/// Search error type.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Search was invoked on a finished game or a board without moves.
    #[error("no move available: {0}")]
    NoMoveAvailable(NoMoveReason),

    /// The board collaborator failed; the original error is kept as source.
    #[error("board error: {0}")]
    Board(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The search configuration is invalid.
    #[error("invalid search configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SearchError {
    /// Wrap a board collaborator error.
    pub fn board<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        SearchError::Board(Box::new(err))
    }

    /// Check if this is the "no move available" kind.
    #[must_use]
    pub fn is_no_move(&self) -> bool {
        matches!(self, SearchError::NoMoveAvailable(_))
    }
}
