//! Line scanning over the 32 five-cell windows of a 6×6 board.
//!
//! Windows:
//! - 12 horizontal: columns 0–4 and 1–5 of every row
//! - 12 vertical: rows 0–4 and 1–5 of every column
//! - 4 descending diagonals anchored at (0,0), (1,1), (0,1), (1,0)
//! - 4 ascending diagonals anchored at (5,0), (4,1), (4,0), (5,1)
//!
//! A window is classified only by how many cells hold the target piece and
//! how many are empty. Any opposing piece in the window lowers both
//! counts below every condition's totals, so mixed windows never match.

use serde::{Deserialize, Serialize};

use crate::board::{Grid, BOARD_SIZE};
use crate::core::Piece;

/// Cells in a winning line.
pub const LINE_LENGTH: usize = 5;

/// Number of distinct five-cell windows on the board.
pub const LINE_COUNT: usize = 32;

/// Coordinates `(row, col)` of one window.
pub type Line = [(u8, u8); LINE_LENGTH];

/// Every five-cell window, rows first, then columns, then diagonals.
pub static LINES: [Line; LINE_COUNT] = build_lines();

const DESCENDING_ANCHORS: [(usize, usize); 4] = [(0, 0), (1, 1), (0, 1), (1, 0)];
const ASCENDING_ANCHORS: [(usize, usize); 4] = [
    (BOARD_SIZE - 1, 0),
    (BOARD_SIZE - 2, 1),
    (BOARD_SIZE - 2, 0),
    (BOARD_SIZE - 1, 1),
];

const fn build_lines() -> [Line; LINE_COUNT] {
    let mut lines = [[(0u8, 0u8); LINE_LENGTH]; LINE_COUNT];
    let mut n = 0;

    // Rows and columns: two windows per line of six.
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut start = 0;
        while start + LINE_LENGTH <= BOARD_SIZE {
            let mut k = 0;
            while k < LINE_LENGTH {
                lines[n][k] = (i as u8, (start + k) as u8);
                lines[n + 2 * BOARD_SIZE][k] = ((start + k) as u8, i as u8);
                k += 1;
            }
            n += 1;
            start += 1;
        }
        i += 1;
    }
    n += 2 * BOARD_SIZE;

    let mut d = 0;
    while d < DESCENDING_ANCHORS.len() {
        let (r0, c0) = DESCENDING_ANCHORS[d];
        let mut k = 0;
        while k < LINE_LENGTH {
            lines[n][k] = ((r0 + k) as u8, (c0 + k) as u8);
            k += 1;
        }
        n += 1;
        d += 1;
    }

    let mut a = 0;
    while a < ASCENDING_ANCHORS.len() {
        let (r0, c0) = ASCENDING_ANCHORS[a];
        let mut k = 0;
        while k < LINE_LENGTH {
            lines[n][k] = ((r0 - k) as u8, (c0 + k) as u8);
            k += 1;
        }
        n += 1;
        a += 1;
    }

    lines
}

/// Piece and empty counts within one window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineCount {
    pub pieces: u8,
    pub empties: u8,
}

impl LineCount {
    /// Count `target` pieces and empty cells along `line`.
    #[must_use]
    pub fn of(grid: &Grid, line: &Line, target: Piece) -> Self {
        let mut count = Self::default();
        for &(row, col) in line {
            let piece = grid.get(row as usize, col as usize);
            if piece == target {
                count.pieces += 1;
            } else if piece == Piece::Empty {
                count.empties += 1;
            }
        }
        count
    }
}

/// Pattern a window is tested against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// Exactly 3 target pieces and 2 empty cells.
    ThreeAndTwoEmpty,
    /// Exactly 4 target pieces and 1 empty cell.
    FourAndOneEmpty,
    /// 4 target pieces and 1 empty cell, or a complete line.
    FourAndOneEmptyOrFive,
    /// A complete line of 5 target pieces.
    Five,
}

impl Condition {
    /// Check a window's counts against this condition.
    #[inline]
    #[must_use]
    pub fn matches(self, count: LineCount) -> bool {
        match self {
            Condition::ThreeAndTwoEmpty => count.pieces == 3 && count.empties == 2,
            Condition::FourAndOneEmpty => count.pieces == 4 && count.empties == 1,
            Condition::FourAndOneEmptyOrFive => {
                (count.pieces == 4 && count.empties == 1) || count.pieces == 5
            }
            Condition::Five => count.pieces == 5,
        }
    }
}

/// Check a single window.
#[inline]
#[must_use]
pub fn line_matches(grid: &Grid, line: &Line, target: Piece, condition: Condition) -> bool {
    condition.matches(LineCount::of(grid, line, target))
}

/// Check if any window of `grid` matches.
#[must_use]
pub fn any_line(grid: &Grid, target: Piece, condition: Condition) -> bool {
    LINES
        .iter()
        .any(|line| line_matches(grid, line, target, condition))
}

/// Count the windows of `grid` that match.
#[must_use]
pub fn count_lines(grid: &Grid, target: Piece, condition: Condition) -> usize {
    LINES
        .iter()
        .filter(|line| line_matches(grid, line, target, condition))
        .count()
}

/// Check if any window on any of `grids` matches.
#[must_use]
pub fn any_line_on_grids(grids: &[Grid], target: Piece, condition: Condition) -> bool {
    grids.iter().any(|grid| any_line(grid, target, condition))
}

/// Largest per-grid match count across `grids`; 0 when `grids` is empty.
#[must_use]
pub fn max_count_on_grids(grids: &[Grid], target: Piece, condition: Condition) -> usize {
    grids
        .iter()
        .map(|grid| count_lines(grid, target, condition))
        .max()
        .unwrap_or(0)
}
