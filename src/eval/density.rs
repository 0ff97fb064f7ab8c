//! Density heuristic: building lines of three with two empty cells.

use crate::board::{swap_variants, Grid};
use crate::core::{Piece, PlayerId};

use super::heuristic::{from_turn_perspective, Heuristic, Position};
use super::scanner::{max_count_on_grids, Condition};

/// Score change per line of advantage.
const LINE_WEIGHT: f64 = 0.01;

/// Compares, over the six swap variants, the best count of
/// three-and-two-empty lines for each side.
///
/// Score for the side to move: `clamp(0.5 + 0.01 × (mine − theirs), 0, 1)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreeAndTwoEmpty;

impl ThreeAndTwoEmpty {
    fn score_for_turn(grid: &Grid, turn_piece: Piece, other_piece: Piece) -> f64 {
        let variants = swap_variants(grid);

        let turn_count = max_count_on_grids(&variants, turn_piece, Condition::ThreeAndTwoEmpty);
        let other_count = max_count_on_grids(&variants, other_piece, Condition::ThreeAndTwoEmpty);

        let diff = turn_count as f64 - other_count as f64;
        (0.5 + LINE_WEIGHT * diff).clamp(0.0, 1.0)
    }
}

impl Heuristic for ThreeAndTwoEmpty {
    fn name(&self) -> &'static str {
        "three-and-two-empty"
    }

    fn score(&self, position: &Position, player: PlayerId) -> f64 {
        from_turn_perspective(position, player, Self::score_for_turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(rows: &[&str], turn: PlayerId) -> Position {
        Position::new(Grid::from_rows(rows).unwrap(), turn)
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let pos = position(
            &["......", "......", "......", "......", "......", "......"],
            PlayerId::FIRST,
        );
        assert_eq!(ThreeAndTwoEmpty.score(&pos, PlayerId::FIRST), 0.5);
        assert_eq!(ThreeAndTwoEmpty.score(&pos, PlayerId::SECOND), 0.5);
    }

    #[test]
    fn test_own_building_line_scores_above_half() {
        let rows = ["www...", "......", "......", "......", "......", "......"];

        let own_turn = position(&rows, PlayerId::FIRST);
        let score = ThreeAndTwoEmpty.score(&own_turn, PlayerId::FIRST);
        assert!((score - 0.51).abs() < 1e-9, "score = {}", score);

        let their_turn = position(&rows, PlayerId::SECOND);
        let score = ThreeAndTwoEmpty.score(&their_turn, PlayerId::FIRST);
        assert!((score - 0.51).abs() < 1e-9, "score = {}", score);
    }

    #[test]
    fn test_opponent_building_lines_score_below_half() {
        let pos = position(
            &["bbb...", "......", "b.....", "b.....", "......", "......"],
            PlayerId::FIRST,
        );
        let score = ThreeAndTwoEmpty.score(&pos, PlayerId::FIRST);
        assert!(score < 0.5);
        assert!((score + ThreeAndTwoEmpty.score(&pos, PlayerId::SECOND) - 1.0).abs() < 1e-9);
    }
}
