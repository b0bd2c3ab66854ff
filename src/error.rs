//! Structured error types
//!
//! Three layers, surfaced synchronously and never swallowed:
//! - [`OutOfBounds`]: indexing beyond the grid, before game rules apply
//! - [`IllegalMove`]: placements rejected by the rule checks
//! - [`MoveError::Win`]: the terminal "five completed" outcome, reported
//!   from the very placement that caused it
//!
//! [`OpponentError`] covers opponent construction and move selection.

use crate::board::Stone;

/// Coordinates beyond the grid.
///
/// A lower-level indexing fault, distinct from the [`IllegalMove`] family:
/// it concerns the shape of the board, not the rules of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinates ({row}, {col}) fall outside the {size}x{size} board")]
pub struct OutOfBounds {
    pub row: i32,
    pub col: i32,
    pub size: usize,
}

/// Placements rejected by the validated path.
///
/// Variant order follows the validation order checked by
/// [`Board::place`](crate::board::Board::place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// A move must address exactly one cell; range and list selectors are
    /// reserved for the setup path.
    #[error("a move must address exactly one cell")]
    MalformedIndex,
    /// The target cell already holds a stone; cells are never overwritten.
    #[error("cell ({row}, {col}) already holds a stone")]
    NotEmpty { row: i32, col: i32 },
    /// The empty marker is not a playable color.
    #[error("the empty marker cannot be placed as a move")]
    CannotPlaceEmpty,
    /// Negative coordinates are rejected outright, as a distinct kind from
    /// "too large".
    #[error("negative coordinates ({row}, {col}) are not allowed")]
    NegativeIndex { row: i32, col: i32 },
    /// The same color may not move twice in a row.
    #[error("{stone:?} cannot move twice in a row")]
    RepeatedColor { stone: Stone },
    /// The first move of a game is reserved for the opening color.
    #[error("the opening move must be {expected:?}")]
    WrongOpeningColor { expected: Stone },
}

/// Failure-like outcomes of a placement call.
///
/// `Win` is not a rejected move: the stone was committed, the run reached
/// five, and the board stays in the winning state. Callers must treat it
/// as "game over".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error("{0:?} completed five in a row; the game is over")]
    Win(Stone),
}

/// Opponent construction and move-selection faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OpponentError {
    /// An opponent must be bound to a real color.
    #[error("an opponent cannot play the empty marker")]
    EmptyColorNotAllowed,
    /// Move selection finished with the board byte-identical to how it
    /// started.
    #[error("move selection left the board unchanged")]
    NoBoardChange,
    /// The selected placement was answered by the board, including the
    /// terminal `Win` outcome.
    #[error(transparent)]
    Move(#[from] MoveError),
}
