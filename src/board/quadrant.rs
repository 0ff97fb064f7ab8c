//! Quadrants and unordered quadrant pairs.

use serde::{Deserialize, Serialize};

use super::QUADRANT_SIZE;

/// One of the four 3×3 sub-grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// `(row, col)` of the quadrant's top-left cell.
    #[inline]
    #[must_use]
    pub const fn origin(self) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, QUADRANT_SIZE),
            Quadrant::BottomLeft => (QUADRANT_SIZE, 0),
            Quadrant::BottomRight => (QUADRANT_SIZE, QUADRANT_SIZE),
        }
    }

    /// The quadrant containing `(row, col)`.
    #[must_use]
    pub const fn containing(row: usize, col: usize) -> Quadrant {
        match (row < QUADRANT_SIZE, col < QUADRANT_SIZE) {
            (true, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }

    /// Short label used in move notation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "TL",
            Quadrant::TopRight => "TR",
            Quadrant::BottomLeft => "BL",
            Quadrant::BottomRight => "BR",
        }
    }
}

/// An unordered pair of distinct quadrants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuadrantPair {
    TopLeftTopRight,
    TopLeftBottomLeft,
    TopLeftBottomRight,
    TopRightBottomRight,
    TopRightBottomLeft,
    BottomLeftBottomRight,
}

impl QuadrantPair {
    /// All six pairs in generation order.
    pub const ALL: [QuadrantPair; 6] = [
        QuadrantPair::TopLeftTopRight,
        QuadrantPair::TopLeftBottomLeft,
        QuadrantPair::TopLeftBottomRight,
        QuadrantPair::TopRightBottomRight,
        QuadrantPair::TopRightBottomLeft,
        QuadrantPair::BottomLeftBottomRight,
    ];

    /// The two quadrants exchanged by this pair.
    #[must_use]
    pub const fn quadrants(self) -> (Quadrant, Quadrant) {
        match self {
            QuadrantPair::TopLeftTopRight => (Quadrant::TopLeft, Quadrant::TopRight),
            QuadrantPair::TopLeftBottomLeft => (Quadrant::TopLeft, Quadrant::BottomLeft),
            QuadrantPair::TopLeftBottomRight => (Quadrant::TopLeft, Quadrant::BottomRight),
            QuadrantPair::TopRightBottomRight => (Quadrant::TopRight, Quadrant::BottomRight),
            QuadrantPair::TopRightBottomLeft => (Quadrant::TopRight, Quadrant::BottomLeft),
            QuadrantPair::BottomLeftBottomRight => (Quadrant::BottomLeft, Quadrant::BottomRight),
        }
    }

    /// Check if `quadrant` is one of the two exchanged.
    #[must_use]
    pub fn contains(self, quadrant: Quadrant) -> bool {
        let (a, b) = self.quadrants();
        a == quadrant || b == quadrant
    }
}

impl std::fmt::Display for QuadrantPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.quadrants();
        write!(f, "{}<->{}", a.label(), b.label())
    }
}
