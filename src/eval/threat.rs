//! Threat heuristic: four-with-one-empty and five-in-line patterns.
//!
//! Decides a position only when one side's threats hold under every
//! plausible quadrant move. Staged over the swap variants, from the side
//! to move:
//!
//! 1. Drop variants where the other side already has five. If none are
//!    left, every move hands the other side the game: 0.
//! 2. If a remaining variant gives the mover four-and-one-empty or five,
//!    the mover holds a winning threat: 1.
//! 3. Drop variants where the other side has four-and-one-empty or five.
//!    If none are left, the other side dominates every move: 0.
//! 4. Otherwise undecided: 0.5.

use crate::board::{swap_variants_where, Grid};
use crate::core::{Piece, PlayerId};

use super::heuristic::{from_turn_perspective, Heuristic, Position};
use super::scanner::{any_line, any_line_on_grids, Condition};

#[derive(Clone, Copy, Debug, Default)]
pub struct FourAndOneEmptyOrFive;

impl FourAndOneEmptyOrFive {
    fn score_for_turn(grid: &Grid, turn_piece: Piece, other_piece: Piece) -> f64 {
        let safe = swap_variants_where(grid, |v| !any_line(v, other_piece, Condition::Five));
        if safe.is_empty() {
            return 0.0;
        }

        if any_line_on_grids(&safe, turn_piece, Condition::FourAndOneEmptyOrFive) {
            return 1.0;
        }

        let unthreatened = safe
            .iter()
            .filter(|v| !any_line(v, other_piece, Condition::FourAndOneEmptyOrFive))
            .count();
        if unthreatened == 0 {
            return 0.0;
        }

        0.5
    }
}

impl Heuristic for FourAndOneEmptyOrFive {
    fn name(&self) -> &'static str {
        "four-and-one-empty-or-five"
    }

    fn score(&self, position: &Position, player: PlayerId) -> f64 {
        from_turn_perspective(position, player, Self::score_for_turn)
    }
}
