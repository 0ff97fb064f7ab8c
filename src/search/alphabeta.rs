//! Depth-limited minimax with alpha-beta pruning.
//!
//! ## Algorithm
//!
//! The root is a maximizing step for the searching player; plies then
//! alternate strictly between `max_value` and `min_value`. Children are
//! visited in the board's legal-move order with no reordering, and only a
//! strictly better child replaces the current best, so ties keep the
//! earliest move.
//!
//! Leaves are scored in `[0, 1]`:
//! - finished game: 1 (win), 0 (loss), 0.5 (draw)
//! - depth limit reached: composite evaluator
//!
//! The depth limit is chosen once per search from the root's legal-move
//! count via [`DepthPolicy`](super::DepthPolicy).

use std::time::Instant;

use log::{debug, trace, warn};

use crate::core::PlayerId;
use crate::eval::{CompositeEvaluator, Position};
use crate::rules::BoardState;

use super::config::SearchConfig;
use super::error::{NoMoveReason, SearchError};
use super::node::{terminal_score, SearchNode};
use super::stats::SearchStats;

/// Result of a completed search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    /// Best move for the searching player.
    pub best_move: M,

    /// Minimax value of `best_move`, in `[0, 1]`.
    pub score: f64,

    /// Depth limit the search ran with.
    pub depth_limit: u32,
}

/// Alpha-beta search context.
///
/// Owns the configuration and the leaf evaluator, and keeps the
/// statistics of the most recent search. Holds no tree between searches.
pub struct AlphaBetaSearch {
    /// Search configuration.
    config: SearchConfig,

    /// Leaf evaluator built from `config.heuristics`.
    evaluator: CompositeEvaluator,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl AlphaBetaSearch {
    /// Create a search context with the configured heuristics.
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = CompositeEvaluator::from_kinds(&config.heuristics);
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Replace the leaf evaluator with a custom one.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: CompositeEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the leaf evaluator.
    #[must_use]
    pub fn evaluator(&self) -> &CompositeEvaluator {
        &self.evaluator
    }

    /// Get statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for the best move for `player` and return only the move.
    pub fn best_move<S: BoardState>(
        &mut self,
        state: &S,
        player: PlayerId,
    ) -> Result<S::Move, SearchError> {
        self.search(state, player).map(|result| result.best_move)
    }

    /// Search for the best move for `player`.
    ///
    /// Fails with [`SearchError::NoMoveAvailable`] when the game on `state`
    /// is over or it has no legal moves. Board errors propagate unchanged.
    pub fn search<S: BoardState>(
        &mut self,
        state: &S,
        player: PlayerId,
    ) -> Result<SearchResult<S::Move>, SearchError> {
        self.config.validate()?;

        let start = Instant::now();
        self.stats.reset();

        let winner = state.winner();
        if winner.is_decided() {
            warn!("search requested on a finished game ({})", winner);
            return Err(SearchError::NoMoveAvailable(NoMoveReason::GameOver(winner)));
        }

        let legal_moves = state.legal_moves();
        if legal_moves.is_empty() {
            warn!("search requested on a board without legal moves");
            return Err(SearchError::NoMoveAvailable(NoMoveReason::NoLegalMoves));
        }

        let depth_limit = self.config.depth_policy.depth_limit(legal_moves.len());
        self.stats.depth_limit = depth_limit;
        self.stats.root_moves = legal_moves.len();

        let root = SearchNode {
            previous_move: None,
            state: state.clone(),
            player,
            legal_moves,
            depth_limit,
        };

        let (score, best_move) = self.max_value(&root, 0, f64::NEG_INFINITY, f64::INFINITY)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            "alpha-beta: depth {} over {} moves, score {:.4}, {} nodes ({} cutoffs) in {}us ({:.0} nodes/s)",
            depth_limit,
            self.stats.root_moves,
            score,
            self.stats.nodes_visited(),
            self.stats.cutoffs,
            self.stats.time_us,
            self.stats.nodes_per_second(),
        );

        let best_move = best_move.ok_or(SearchError::NoMoveAvailable(NoMoveReason::NoLegalMoves))?;
        Ok(SearchResult {
            best_move,
            score,
            depth_limit,
        })
    }

    /// Static score of a node for the searching player.
    ///
    /// Finished games score 1, 0 or 0.5; otherwise the composite evaluator
    /// decides.
    pub fn static_score<S: BoardState>(&mut self, node: &SearchNode<S>) -> f64 {
        match terminal_score(node.winner(), node.player) {
            Some(score) => {
                self.stats.terminal_leaves += 1;
                score
            }
            None => {
                self.stats.leaves_evaluated += 1;
                self.evaluator
                    .evaluate(&Position::from_state(&node.state), node.player)
            }
        }
    }

    fn is_leaf<S: BoardState>(node: &SearchNode<S>, depth: u32) -> bool {
        // A non-terminal board with no moves breaks the board contract; score it statically.
        depth >= node.depth_limit || node.is_terminal() || node.legal_moves.is_empty()
    }

    /// Maximizing step. Returns the value and the move leading to it.
    fn max_value<S: BoardState>(
        &mut self,
        node: &SearchNode<S>,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> Result<(f64, Option<S::Move>), SearchError> {
        if Self::is_leaf(node, depth) {
            return Ok((self.static_score(node), node.previous_move.clone()));
        }
        self.stats.nodes_expanded += 1;

        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = None;
        for child in node.children() {
            let child = child.map_err(SearchError::board)?;
            let (value, _) = self.min_value(&child, depth + 1, alpha, beta)?;

            if depth == 0 {
                trace!("root move {:?} -> {:.4}", child.previous_move, value);
            }

            if value > best_value {
                best_value = value;
                best_move = child.previous_move;
            }
            if best_value > alpha {
                alpha = best_value;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((best_value, best_move))
    }

    /// Minimizing step. Returns the value and the move leading to it.
    fn min_value<S: BoardState>(
        &mut self,
        node: &SearchNode<S>,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> Result<(f64, Option<S::Move>), SearchError> {
        if Self::is_leaf(node, depth) {
            return Ok((self.static_score(node), node.previous_move.clone()));
        }
        self.stats.nodes_expanded += 1;

        let mut best_value = f64::INFINITY;
        let mut best_move = None;
        for child in node.children() {
            let child = child.map_err(SearchError::board)?;
            let (value, _) = self.max_value(&child, depth + 1, alpha, beta)?;

            if value < best_value {
                best_value = value;
                best_move = child.previous_move;
            }
            if best_value < beta {
                beta = best_value;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((best_value, best_move))
    }
}

impl Default for AlphaBetaSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
