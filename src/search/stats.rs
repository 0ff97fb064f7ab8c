//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one alpha-beta search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior nodes whose children were expanded.
    pub nodes_expanded: u64,

    /// Leaves scored by the composite evaluator.
    pub leaves_evaluated: u64,

    /// Leaves scored as finished games.
    pub terminal_leaves: u64,

    /// Sibling loops cut short by alpha-beta.
    pub cutoffs: u64,

    /// Depth limit chosen for the search.
    pub depth_limit: u32,

    /// Legal moves at the root.
    pub root_moves: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Every node visited: interior plus leaves.
    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_expanded + self.leaves_evaluated + self.terminal_leaves
    }

    /// Calculate visited nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited() as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
