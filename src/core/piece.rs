//! Cell contents.

use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    White,
    Black,
}

impl Piece {
    /// Single-character notation: `w`, `b` or `.`.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Piece::White => 'w',
            Piece::Black => 'b',
            Piece::Empty => '.',
        }
    }

    /// Parse the notation produced by [`Piece::symbol`].
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'w' | 'W' => Some(Piece::White),
            'b' | 'B' => Some(Piece::Black),
            '.' | '_' => Some(Piece::Empty),
            _ => None,
        }
    }
}
