//! Static position evaluation.
//!
//! ## Overview
//!
//! - `scanner`: five-cell window classification and counting
//! - `heuristic`: the `Heuristic` contract and `Position` snapshot
//! - `density`: three-and-two-empty line density
//! - `threat`: four-and-one-empty / five threats
//! - `composite`: ordered combination of heuristics
//!
//! Both pattern heuristics look at the six swap variants of a grid rather
//! than the grid itself, approximating the positions one quadrant move
//! away.

pub mod composite;
pub mod density;
pub mod heuristic;
pub mod scanner;
pub mod threat;

pub use composite::CompositeEvaluator;
pub use density::ThreeAndTwoEmpty;
pub use heuristic::{from_turn_perspective, Heuristic, HeuristicKind, Position};
pub use scanner::{Condition, LineCount, LINES, LINE_COUNT, LINE_LENGTH};
pub use threat::FourAndOneEmptyOrFive;
