//! Fixed-size 6×6 board snapshot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Piece;
use crate::rules::BoardState;

use super::{QuadrantPair, BOARD_SIZE, QUADRANT_SIZE};

/// Error returned when parsing a grid from text rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected 6 cells, found {len}")]
    RowLength { row: usize, len: usize },
    #[error("row {row}: unknown cell symbol {symbol:?}")]
    Symbol { row: usize, symbol: char },
}

/// Immutable-by-convention copy of the pieces on a board.
///
/// `Grid` is `Copy`: deriving a variant never touches the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy every cell out of a board collaborator.
    #[must_use]
    pub fn from_state<S: BoardState>(state: &S) -> Self {
        let mut grid = Self::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                grid.cells[row][col] = state.piece_at(row, col);
            }
        }
        grid
    }

    /// Parse six rows of `w`, `b` and `.` (spaces are ignored).
    ///
    /// ```
    /// use pentago_swap_ai::board::Grid;
    /// use pentago_swap_ai::core::Piece;
    ///
    /// let grid = Grid::from_rows(&[
    ///     "w.....",
    ///     "......",
    ///     "......",
    ///     "......",
    ///     "......",
    ///     ".....b",
    /// ]).unwrap();
    /// assert_eq!(grid.get(0, 0), Piece::White);
    /// assert_eq!(grid.get(5, 5), Piece::Black);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseGridError> {
        if rows.len() != BOARD_SIZE {
            return Err(ParseGridError::RowCount(rows.len()));
        }

        let mut grid = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(ParseGridError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                grid.cells[row][col] =
                    Piece::from_symbol(symbol).ok_or(ParseGridError::Symbol { row, symbol })?;
            }
        }
        Ok(grid)
    }

    /// Get the piece at `(row, col)`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    /// Set the piece at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece;
    }

    /// Number of cells holding `piece`.
    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&p| p == piece)
            .count()
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count(Piece::Empty) == 0
    }

    /// Exchange the contents of two quadrants in place, cell by cell.
    pub fn swap_quadrants(&mut self, pair: QuadrantPair) {
        let (a, b) = pair.quadrants();
        let (ar, ac) = a.origin();
        let (br, bc) = b.origin();

        for i in 0..QUADRANT_SIZE {
            for j in 0..QUADRANT_SIZE {
                let tmp = self.cells[ar + i][ac + j];
                self.cells[ar + i][ac + j] = self.cells[br + i][bc + j];
                self.cells[br + i][bc + j] = tmp;
            }
        }
    }

    /// A copy of this grid with two quadrants exchanged.
    #[must_use]
    pub fn swapped(&self, pair: QuadrantPair) -> Self {
        let mut grid = *self;
        grid.swap_quadrants(pair);
        grid
    }

    /// Iterate over `(row, col)` of every empty cell in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.cells[row][col] == Piece::Empty)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, piece) in cells.iter().enumerate() {
                if col == QUADRANT_SIZE {
                    write!(f, " ")?;
                }
                write!(f, "{}", piece.symbol())?;
            }
            writeln!(f)?;
            if row + 1 == QUADRANT_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
