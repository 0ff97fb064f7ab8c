//! Board collaborator trait.
//!
//! The search never owns the game rules. It asks the board for its legal
//! moves, applies them to clones, and reads back pieces, turn and outcome.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::{Piece, PlayerId};

/// Outcome of a position as reported by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Game still in progress.
    Nobody,
    /// Game ended without a winner.
    Draw,
    /// Game ended with a single winner.
    Player(PlayerId),
}

impl Winner {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_decided(self) -> bool {
        !matches!(self, Winner::Nobody)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self == Winner::Player(player)
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Nobody => write!(f, "in progress"),
            Winner::Draw => write!(f, "draw"),
            Winner::Player(p) => write!(f, "{} wins", p),
        }
    }
}

/// Board state contract consumed by the search.
///
/// `Clone` must yield an independent copy: applying a move to the clone
/// never affects the original.
///
/// ## Implementation Notes
///
/// - `legal_moves`: ordered; non-empty on a board whose winner is `Nobody`
/// - `apply_move`: places, rotates/swaps and passes the turn
/// - `piece_at`: row and column are both in `0..6`
pub trait BoardState: Clone {
    /// Opaque move token.
    type Move: Clone + Debug;

    /// Error returned when a move cannot be applied.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Enumerate the legal moves of the player to move, in a stable order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move to this board.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<(), Self::Error>;

    /// Current outcome of the game.
    fn winner(&self) -> Winner;

    /// The player whose turn it is.
    fn turn_player(&self) -> PlayerId;

    /// The piece at `(row, col)`.
    fn piece_at(&self, row: usize, col: usize) -> Piece;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.winner().is_decided()
    }
}
