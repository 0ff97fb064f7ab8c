//! Player identification for a two-player game.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Player 0 moves first and plays White,
//! player 1 plays Black.

use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// Player identifier for one of the two seats.
///
/// Player indices are 0-based: the first player is `PlayerId::FIRST`.
/// Only ids 0 and 1 exist; the field is private to keep it that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a seat index. Any odd index is the second
    /// player, any even one the first.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id & 1)
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// The piece this player places: White for the first player, Black otherwise.
    #[must_use]
    pub const fn piece(self) -> Piece {
        if self.0 == 0 {
            Piece::White
        } else {
            Piece::Black
        }
    }

    /// Iterate over both player IDs.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
