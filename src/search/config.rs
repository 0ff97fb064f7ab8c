//! Search configuration parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::HeuristicKind;

/// Error returned by [`SearchConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("depth policy tiers must have strictly increasing move thresholds (tier {0})")]
    UnorderedTiers(usize),
    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// One step of the depth policy: positions with at most
/// `max_legal_moves` legal moves are searched `depth` plies deep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthTier {
    pub max_legal_moves: usize,
    pub depth: u32,
}

impl DepthTier {
    #[must_use]
    pub const fn new(max_legal_moves: usize, depth: u32) -> Self {
        Self {
            max_legal_moves,
            depth,
        }
    }
}

/// Maps the root's legal-move count to a depth limit.
///
/// Fewer legal moves means a smaller branching factor, so the search
/// can afford more plies late in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthPolicy {
    /// Checked in order; the first tier whose threshold is not exceeded wins.
    pub tiers: Vec<DepthTier>,
    /// Depth used when every threshold is exceeded.
    pub fallback: u32,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        // Six swap choices per empty cell: 4 and 10 cells left to play.
        Self {
            tiers: vec![DepthTier::new(4 * 6, 4), DepthTier::new(10 * 6, 3)],
            fallback: 2,
        }
    }
}

impl DepthPolicy {
    /// A policy that always returns `depth`.
    #[must_use]
    pub fn fixed(depth: u32) -> Self {
        Self {
            tiers: Vec::new(),
            fallback: depth,
        }
    }

    /// Depth limit for a position with `legal_moves` legal moves.
    #[must_use]
    pub fn depth_limit(&self, legal_moves: usize) -> u32 {
        self.tiers
            .iter()
            .find(|tier| legal_moves <= tier.max_legal_moves)
            .map_or(self.fallback, |tier| tier.depth)
    }

    /// Check that tiers are ordered and every depth is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback == 0 || self.tiers.iter().any(|tier| tier.depth == 0) {
            return Err(ConfigError::ZeroDepth);
        }
        for (i, pair) in self.tiers.windows(2).enumerate() {
            if pair[1].max_legal_moves <= pair[0].max_legal_moves {
                return Err(ConfigError::UnorderedTiers(i + 1));
            }
        }
        Ok(())
    }
}

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth limit policy, applied once per search from the root.
    pub depth_policy: DepthPolicy,

    /// Leaf heuristics in evaluation order.
    /// Order matters: a 0 from an earlier heuristic hides later ones.
    pub heuristics: Vec<HeuristicKind>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_policy: DepthPolicy::default(),
            heuristics: vec![
                HeuristicKind::FourAndOneEmptyOrFive,
                HeuristicKind::ThreeAndTwoEmpty,
            ],
        }
    }
}

impl SearchConfig {
    /// Replace the depth policy.
    #[must_use]
    pub fn with_depth_policy(mut self, policy: DepthPolicy) -> Self {
        self.depth_policy = policy;
        self
    }

    /// Search every position to the same depth.
    #[must_use]
    pub fn with_fixed_depth(mut self, depth: u32) -> Self {
        self.depth_policy = DepthPolicy::fixed(depth);
        self
    }

    /// Replace the heuristic list.
    #[must_use]
    pub fn with_heuristics(mut self, heuristics: Vec<HeuristicKind>) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.depth_policy.validate()
    }
}
