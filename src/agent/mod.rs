//! Move-choosing agents and a simple two-agent match loop.

mod alphabeta;
mod random;

pub use alphabeta::AlphaBetaAgent;
pub use random::RandomAgent;

use log::debug;

use crate::core::PlayerId;
use crate::rules::{BoardState, Winner};
use crate::search::SearchError;

/// Something that picks a move for the side to move on a board.
pub trait Agent<S: BoardState> {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Pick a move on `state`.
    fn choose_move(&mut self, state: &S) -> Result<S::Move, SearchError>;
}

/// Outcome of [`play_match`].
#[derive(Clone, Debug)]
pub struct MatchRecord<S: BoardState> {
    /// Moves in play order.
    pub moves: Vec<S::Move>,

    /// Board after the last move.
    pub final_state: S,

    /// Result; `Winner::Nobody` if `max_moves` ran out first.
    pub winner: Winner,
}

/// Play `first` against `second` from `state` until the game ends or
/// `max_moves` moves have been made.
///
/// `first` moves whenever the board's turn player is [`PlayerId::FIRST`].
pub fn play_match<S: BoardState>(
    mut state: S,
    first: &mut dyn Agent<S>,
    second: &mut dyn Agent<S>,
    max_moves: usize,
) -> Result<MatchRecord<S>, SearchError> {
    let mut moves = Vec::new();

    while !state.is_terminal() && moves.len() < max_moves {
        let agent: &mut dyn Agent<S> = if state.turn_player() == PlayerId::FIRST {
            &mut *first
        } else {
            &mut *second
        };
        let mv = agent.choose_move(&state)?;
        debug!("{} plays {:?}", agent.name(), mv);
        state.apply_move(&mv).map_err(SearchError::board)?;
        moves.push(mv);
    }

    let winner = state.winner();
    debug!("match over after {} moves: {}", moves.len(), winner);
    Ok(MatchRecord {
        moves,
        final_state: state,
        winner,
    })
}
