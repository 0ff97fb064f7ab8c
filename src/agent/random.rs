//! Uniform random baseline agent.

use crate::core::GameRng;
use crate::rules::BoardState;
use crate::search::{NoMoveReason, SearchError};

use super::Agent;

/// Agent that picks uniformly among legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<S: BoardState> Agent<S> for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        let winner = state.winner();
        if winner.is_decided() {
            return Err(SearchError::NoMoveAvailable(NoMoveReason::GameOver(winner)));
        }
        let moves = state.legal_moves();
        self.rng
            .choose(&moves)
            .cloned()
            .ok_or(SearchError::NoMoveAvailable(NoMoveReason::NoLegalMoves))
    }
}
