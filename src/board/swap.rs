//! Swap-variant generation.
//!
//! Each variant exchanges one unordered pair of quadrants. The six variants
//! stand in for the positions a single quadrant move can produce, which is
//! what the pattern heuristics score against.

use smallvec::SmallVec;

use super::{Grid, QuadrantPair};

/// The six swap variants of a grid, in [`QuadrantPair::ALL`] order.
///
/// Inline storage: a variant set never spills to the heap.
pub type SwapVariants = SmallVec<[Grid; 6]>;

/// Derive one grid per quadrant pair.
///
/// The source grid is left untouched.
#[must_use]
pub fn swap_variants(grid: &Grid) -> SwapVariants {
    QuadrantPair::ALL
        .iter()
        .map(|&pair| grid.swapped(pair))
        .collect()
}

/// Derive the swap variants for which `keep` holds.
#[must_use]
pub fn swap_variants_where(grid: &Grid, mut keep: impl FnMut(&Grid) -> bool) -> SwapVariants {
    QuadrantPair::ALL
        .iter()
        .map(|&pair| grid.swapped(pair))
        .filter(|variant| keep(variant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Quadrant, BOARD_SIZE};
    use crate::core::Piece;

    fn filled(fills: [(Quadrant, Piece); 2]) -> Grid {
        let mut grid = Grid::new();
        for (quadrant, piece) in fills {
            let (r0, c0) = quadrant.origin();
            for i in 0..3 {
                for j in 0..3 {
                    grid.set(r0 + i, c0 + j, piece);
                }
            }
        }
        grid
    }

    fn diff_cells(a: &Grid, b: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if a.get(row, col) != b.get(row, col) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn test_six_variants() {
        let grid = filled([(Quadrant::TopLeft, Piece::White), (Quadrant::TopRight, Piece::Black)]);
        assert_eq!(swap_variants(&grid).len(), 6);
    }

    #[test]
    fn test_each_variant_changes_exactly_its_pair() {
        for (index, pair) in QuadrantPair::ALL.iter().enumerate() {
            let (a, b) = pair.quadrants();
            let grid = filled([(a, Piece::White), (b, Piece::Black)]);
            let variants = swap_variants(&grid);

            let diff = diff_cells(&grid, &variants[index]);
            assert_eq!(diff.len(), 18, "pair {}", pair);
            for (row, col) in diff {
                assert!(pair.contains(Quadrant::containing(row, col)));
            }
        }
    }

    #[test]
    fn test_bottom_pair_is_a_genuine_exchange() {
        let grid = filled([
            (Quadrant::BottomLeft, Piece::White),
            (Quadrant::BottomRight, Piece::Black),
        ]);
        let variants = swap_variants(&grid);

        let bottom = &variants[5];
        assert_eq!(bottom.get(3, 0), Piece::Black);
        assert_eq!(bottom.get(5, 5), Piece::White);
        assert_eq!(bottom.count(Piece::Empty), 18);
        assert_ne!(variants[5], variants[2]);
    }

    #[test]
    fn test_variants_where_filters() {
        let grid = filled([(Quadrant::TopLeft, Piece::White), (Quadrant::TopRight, Piece::Black)]);
        let kept = swap_variants_where(&grid, |g| g.get(0, 0) == Piece::White);

        // Only swaps touching the top-left quadrant move white away from (0, 0).
        assert_eq!(kept.len(), 3);
    }
}
