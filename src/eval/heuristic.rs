//! Heuristic contract and the position snapshot heuristics score.
//!
//! Every heuristic returns a value in `[0, 1]` relative to a designated
//! player: 1 is a certain win for that player, 0 a certain loss and 0.5
//! carries no information.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Piece, PlayerId};
use crate::rules::BoardState;

use super::density::ThreeAndTwoEmpty;
use super::threat::FourAndOneEmptyOrFive;

/// Pieces plus the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub grid: Grid,
    pub turn: PlayerId,
}

impl Position {
    /// Create a position from a grid and the player to move.
    #[must_use]
    pub fn new(grid: Grid, turn: PlayerId) -> Self {
        Self { grid, turn }
    }

    /// Snapshot a board collaborator.
    #[must_use]
    pub fn from_state<S: BoardState>(state: &S) -> Self {
        Self {
            grid: Grid::from_state(state),
            turn: state.turn_player(),
        }
    }
}

/// Static evaluation strategy.
pub trait Heuristic: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Score `position` for `player`, in `[0, 1]`.
    fn score(&self, position: &Position, player: PlayerId) -> f64;
}

/// Score from the side to move, then express it for `player`.
///
/// `score_for_turn` receives the grid, the mover's piece and the other
/// piece. When the mover is `player`'s opponent the result is inverted.
pub fn from_turn_perspective(
    position: &Position,
    player: PlayerId,
    score_for_turn: impl FnOnce(&Grid, Piece, Piece) -> f64,
) -> f64 {
    let mine = player.piece();
    let theirs = player.opponent().piece();

    if position.turn == player {
        score_for_turn(&position.grid, mine, theirs)
    } else {
        1.0 - score_for_turn(&position.grid, theirs, mine)
    }
}

/// Serializable name of a built-in heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    /// Immediate win/loss threats across swap variants.
    FourAndOneEmptyOrFive,
    /// Building-line density across swap variants.
    ThreeAndTwoEmpty,
}

impl HeuristicKind {
    /// Instantiate the heuristic.
    #[must_use]
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::FourAndOneEmptyOrFive => Box::new(FourAndOneEmptyOrFive),
            HeuristicKind::ThreeAndTwoEmpty => Box::new(ThreeAndTwoEmpty),
        }
    }
}
