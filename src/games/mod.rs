//! Reference game implementations.
//!
//! These implement [`BoardState`](crate::rules::BoardState) so the search
//! can be exercised end to end in tests, benchmarks and agent play.

pub mod pentago_swap;
