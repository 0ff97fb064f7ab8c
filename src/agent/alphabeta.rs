//! Agent backed by the alpha-beta search.

use crate::core::PlayerId;
use crate::rules::BoardState;
use crate::search::{AlphaBetaSearch, SearchConfig, SearchError, SearchStats};

use super::Agent;

/// Agent that plays the alpha-beta search's choice for a fixed player.
pub struct AlphaBetaAgent {
    player: PlayerId,
    search: AlphaBetaSearch,
}

impl AlphaBetaAgent {
    pub fn new(player: PlayerId, config: SearchConfig) -> Self {
        Self {
            player,
            search: AlphaBetaSearch::new(config),
        }
    }

    /// Wrap an existing search context, e.g. one with a custom evaluator.
    pub fn with_search(player: PlayerId, search: AlphaBetaSearch) -> Self {
        Self { player, search }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Statistics of the most recent move choice.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl<S: BoardState> Agent<S> for AlphaBetaAgent {
    fn name(&self) -> &str {
        "alpha-beta"
    }

    fn choose_move(&mut self, state: &S) -> Result<S::Move, SearchError> {
        self.search.best_move(state, self.player)
    }
}
