//! Composite evaluator combining an ordered list of heuristics.

use crate::core::PlayerId;
use crate::rules::BoardState;

use super::heuristic::{Heuristic, HeuristicKind, Position};

/// Score returned when no heuristic is configured.
const NEUTRAL: f64 = 0.5;

/// Ordered list of heuristics folded into one score.
///
/// Evaluation walks the list in order:
/// - a heuristic returning exactly 0 ends evaluation with 0
/// - otherwise, if any returned exactly 1, the result is 1
/// - otherwise the result is the mean of all scores
///
/// An empty evaluator returns 0.5.
#[derive(Default)]
pub struct CompositeEvaluator {
    heuristics: Vec<Box<dyn Heuristic>>,
}

impl CompositeEvaluator {
    /// Create an evaluator with no heuristics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an evaluator from configured heuristic kinds, keeping their order.
    #[must_use]
    pub fn from_kinds(kinds: &[HeuristicKind]) -> Self {
        Self {
            heuristics: kinds.iter().map(|kind| kind.build()).collect(),
        }
    }

    /// Append a heuristic after the existing ones.
    #[must_use]
    pub fn with<H: Heuristic + 'static>(mut self, heuristic: H) -> Self {
        self.push(Box::new(heuristic));
        self
    }

    /// Append a boxed heuristic after the existing ones.
    pub fn push(&mut self, heuristic: Box<dyn Heuristic>) {
        self.heuristics.push(heuristic);
    }

    /// Number of configured heuristics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heuristics.len()
    }

    /// Check if no heuristic is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heuristics.is_empty()
    }

    /// Names of the configured heuristics, in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.heuristics.iter().map(|h| h.name())
    }

    /// Evaluate a position for `player`.
    #[must_use]
    pub fn evaluate(&self, position: &Position, player: PlayerId) -> f64 {
        if self.heuristics.is_empty() {
            return NEUTRAL;
        }

        let mut sum = 0.0;
        let mut certain_win = false;
        for heuristic in &self.heuristics {
            let score = heuristic.score(position, player);
            if score == 0.0 {
                return 0.0;
            }
            if score == 1.0 {
                certain_win = true;
            }
            sum += score;
        }

        if certain_win {
            1.0
        } else {
            sum / self.heuristics.len() as f64
        }
    }

    /// Snapshot a board collaborator and evaluate it for `player`.
    #[must_use]
    pub fn evaluate_state<S: BoardState>(&self, state: &S, player: PlayerId) -> f64 {
        self.evaluate(&Position::from_state(state), player)
    }
}

impl Heuristic for CompositeEvaluator {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn score(&self, position: &Position, player: PlayerId) -> f64 {
        self.evaluate(position, player)
    }
}

impl std::fmt::Debug for CompositeEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
