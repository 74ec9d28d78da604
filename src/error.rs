//! Errors returned when an operation breaks the rules.

use thiserror::Error;

use crate::types::{Pos, Side};

/// Rule violations reported by [`BoardState`](crate::BoardState).
///
/// Both leave the state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// Target occupied, walled, shrunk, outside the side's zone, or the
    /// side has no pieces left to place.
    #[error("illegal placement for {side:?} at {pos}")]
    IllegalPlacement { side: Side, pos: Pos },
    /// No live piece at the source, or the destination is not a legal step
    /// or jump.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Pos, to: Pos },
}
