//! Pentago-Swap board state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Grid, ParseGridError, QuadrantPair, BOARD_SIZE};
use crate::core::{GameRng, Piece, PlayerId};
use crate::eval::scanner::{any_line, Condition};
use crate::rules::{BoardState, Winner};

/// A placement followed by a quadrant swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PentagoMove {
    pub row: u8,
    pub col: u8,
    pub swap: QuadrantPair,
}

impl PentagoMove {
    #[must_use]
    pub const fn new(row: u8, col: u8, swap: QuadrantPair) -> Self {
        Self { row, col, swap }
    }
}

impl std::fmt::Display for PentagoMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}", self.row, self.col, self.swap)
    }
}

/// Error returned when a move cannot be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("cell ({row}, {col}) is occupied")]
    Occupied { row: u8, col: u8 },
    #[error("game is over: {0}")]
    GameOver(Winner),
}

/// Full Pentago-Swap game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PentagoSwapState {
    grid: Grid,
    turn: PlayerId,
    turn_number: u32,
    winner: Winner,
}

impl Default for PentagoSwapState {
    fn default() -> Self {
        Self::new()
    }
}

impl PentagoSwapState {
    /// Empty board, first player to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_grid(Grid::new(), PlayerId::FIRST)
    }

    /// Position from an arbitrary grid. The turn number is the piece count.
    #[must_use]
    pub fn from_grid(grid: Grid, turn: PlayerId) -> Self {
        let turn_number = (BOARD_SIZE * BOARD_SIZE - grid.count(Piece::Empty)) as u32;
        Self {
            grid,
            turn,
            turn_number,
            winner: outcome(&grid),
        }
    }

    /// Position from text rows (`w`, `b`, `.`).
    pub fn from_rows(rows: &[&str], turn: PlayerId) -> Result<Self, ParseGridError> {
        Ok(Self::from_grid(Grid::from_rows(rows)?, turn))
    }

    /// Play uniformly random moves from this position, stopping after
    /// `plies` moves or when the game ends.
    #[must_use]
    pub fn random_playout(mut self, rng: &mut GameRng, plies: usize) -> Self {
        for _ in 0..plies {
            if self.winner.is_decided() {
                break;
            }
            let moves = self.legal_moves();
            let Some(&mv) = rng.choose(&moves) else {
                break;
            };
            if self.apply_move(&mv).is_err() {
                break;
            }
        }
        self
    }

    /// The current pieces.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of moves played.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }
}

/// Winner after a move: five for both is a draw, a full board is a draw.
fn outcome(grid: &Grid) -> Winner {
    let white = any_line(grid, Piece::White, Condition::Five);
    let black = any_line(grid, Piece::Black, Condition::Five);

    match (white, black) {
        (true, true) => Winner::Draw,
        (true, false) => Winner::Player(PlayerId::FIRST),
        (false, true) => Winner::Player(PlayerId::SECOND),
        (false, false) if grid.is_full() => Winner::Draw,
        (false, false) => Winner::Nobody,
    }
}

impl BoardState for PentagoSwapState {
    type Move = PentagoMove;
    type Error = MoveError;

    fn legal_moves(&self) -> Vec<PentagoMove> {
        if self.winner.is_decided() {
            return Vec::new();
        }
        self.grid
            .empty_cells()
            .flat_map(|(row, col)| {
                QuadrantPair::ALL
                    .iter()
                    .map(move |&swap| PentagoMove::new(row as u8, col as u8, swap))
            })
            .collect()
    }

    fn apply_move(&mut self, mv: &PentagoMove) -> Result<(), MoveError> {
        if self.winner.is_decided() {
            return Err(MoveError::GameOver(self.winner));
        }
        let (row, col) = (mv.row as usize, mv.col as usize);
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.grid.get(row, col) != Piece::Empty {
            return Err(MoveError::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }

        self.grid.set(row, col, self.turn.piece());
        self.grid.swap_quadrants(mv.swap);
        self.turn = self.turn.opponent();
        self.turn_number += 1;
        self.winner = outcome(&self.grid);
        Ok(())
    }

    fn winner(&self) -> Winner {
        self.winner
    }

    fn turn_player(&self) -> PlayerId {
        self.turn
    }

    fn piece_at(&self, row: usize, col: usize) -> Piece {
        self.grid.get(row, col)
    }
}

impl std::fmt::Display for PentagoSwapState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)?;
        match self.winner {
            Winner::Nobody => writeln!(f, "turn {}: {} to move", self.turn_number, self.turn),
            outcome => writeln!(f, "turn {}: {}", self.turn_number, outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = PentagoSwapState::new();
        assert_eq!(state.turn_player(), PlayerId::FIRST);
        assert_eq!(state.winner(), Winner::Nobody);
        assert_eq!(state.legal_moves().len(), 36 * 6);
    }

    #[test]
    fn test_legal_move_order() {
        let moves = PentagoSwapState::new().legal_moves();
        assert_eq!(moves[0], PentagoMove::new(0, 0, QuadrantPair::TopLeftTopRight));
        assert_eq!(moves[5], PentagoMove::new(0, 0, QuadrantPair::BottomLeftBottomRight));
        assert_eq!(moves[6], PentagoMove::new(0, 1, QuadrantPair::TopLeftTopRight));
    }

    #[test]
    fn test_apply_places_then_swaps() {
        let mut state = PentagoSwapState::new();
        state
            .apply_move(&PentagoMove::new(0, 0, QuadrantPair::TopLeftBottomRight))
            .unwrap();

        assert_eq!(state.piece_at(0, 0), Piece::Empty);
        assert_eq!(state.piece_at(3, 3), Piece::White);
        assert_eq!(state.turn_player(), PlayerId::SECOND);
        assert_eq!(state.turn_number(), 1);
    }

    #[test]
    fn test_apply_rejects_bad_moves() {
        let mut state = PentagoSwapState::new();
        let mv = PentagoMove::new(1, 1, QuadrantPair::TopRightBottomLeft);
        state.apply_move(&mv).unwrap();

        assert_eq!(
            state.apply_move(&mv),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(
            state.apply_move(&PentagoMove::new(6, 0, QuadrantPair::TopLeftTopRight)),
            Err(MoveError::OutOfBounds { row: 6, col: 0 })
        );
    }

    #[test]
    fn test_five_wins() {
        let mut state = PentagoSwapState::from_rows(
            &["wwww..", "bbbb..", "......", "......", "......", "......"],
            PlayerId::FIRST,
        )
        .unwrap();

        // The bottom swap leaves the top rows alone.
        state
            .apply_move(&PentagoMove::new(0, 4, QuadrantPair::BottomLeftBottomRight))
            .unwrap();

        assert_eq!(state.winner(), Winner::Player(PlayerId::FIRST));
        assert!(state.legal_moves().is_empty());
        assert!(matches!(
            state.apply_move(&PentagoMove::new(5, 5, QuadrantPair::TopLeftTopRight)),
            Err(MoveError::GameOver(_))
        ));
    }

    #[test]
    fn test_double_five_is_draw() {
        let state = PentagoSwapState::from_rows(
            &["wwwww.", "bbbbb.", "......", "......", "......", "......"],
            PlayerId::FIRST,
        )
        .unwrap();
        assert_eq!(state.winner(), Winner::Draw);
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        let state = PentagoSwapState::from_rows(
            &["wwbbww", "bbwwbb", "wwbbww", "bbwwbb", "wwbbww", "bbwwbb"],
            PlayerId::FIRST,
        )
        .unwrap();
        assert_eq!(state.winner(), Winner::Draw);
    }

    #[test]
    fn test_random_playout_is_deterministic() {
        let a = PentagoSwapState::new().random_playout(&mut GameRng::new(7), 10);
        let b = PentagoSwapState::new().random_playout(&mut GameRng::new(7), 10);
        assert_eq!(a, b);
        assert!(a.turn_number() <= 10);
        assert!(a.turn_number() >= 1);
    }

    #[test]
    fn test_display() {
        let text = PentagoSwapState::new().to_string();
        assert!(text.ends_with("turn 0: Player 0 to move\n"));
    }
}
