//! Search nodes and lazy child expansion.
//!
//! A node owns its board outright. Children are produced one at a time by
//! cloning the parent's board and applying a move to the clone, so only
//! the nodes on the active recursion path are alive at any moment.

use crate::core::PlayerId;
use crate::rules::{BoardState, Winner};

/// One position in the search tree.
#[derive(Clone, Debug)]
pub struct SearchNode<S: BoardState> {
    /// Move that produced this node; `None` at the root.
    pub previous_move: Option<S::Move>,

    /// Board after `previous_move`.
    pub state: S,

    /// Player the search maximizes for.
    pub player: PlayerId,

    /// Legal moves of `state`, cached at creation.
    pub legal_moves: Vec<S::Move>,

    /// Depth limit of the search this node belongs to.
    pub depth_limit: u32,
}

impl<S: BoardState> SearchNode<S> {
    /// Create a node, caching its legal moves.
    pub fn new(previous_move: Option<S::Move>, state: S, player: PlayerId, depth_limit: u32) -> Self {
        let legal_moves = if state.is_terminal() {
            Vec::new()
        } else {
            state.legal_moves()
        };

        Self {
            previous_move,
            state,
            player,
            legal_moves,
            depth_limit,
        }
    }

    /// Current outcome of the node's board.
    #[must_use]
    pub fn winner(&self) -> Winner {
        self.state.winner()
    }

    /// Check if the node's board is a finished game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Lazily expand children in legal-move order.
    ///
    /// Each item clones this node's board and applies one move to the clone.
    /// A move the board rejects yields its error; iteration may continue.
    pub fn children(&self) -> impl Iterator<Item = Result<SearchNode<S>, S::Error>> + '_ {
        self.legal_moves.iter().map(move |mv| {
            let mut state = self.state.clone();
            state.apply_move(mv)?;
            Ok(SearchNode::new(
                Some(mv.clone()),
                state,
                self.player,
                self.depth_limit,
            ))
        })
    }
}

/// Score of a finished game for `player`: 1 for a win, 0 for a loss,
/// 0.5 for a draw. `None` while the game is in progress.
#[must_use]
pub fn terminal_score(winner: Winner, player: PlayerId) -> Option<f64> {
    match winner {
        Winner::Nobody => None,
        Winner::Draw => Some(0.5),
        Winner::Player(_) if winner.is_winner(player) => Some(1.0),
        Winner::Player(_) => Some(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_score_values() {
        let me = PlayerId::FIRST;
        assert_eq!(terminal_score(Winner::Player(me), me), Some(1.0));
        assert_eq!(terminal_score(Winner::Player(me.opponent()), me), Some(0.0));
        assert_eq!(terminal_score(Winner::Draw, me), Some(0.5));
        assert_eq!(terminal_score(Winner::Nobody, me), None);
    }
}
