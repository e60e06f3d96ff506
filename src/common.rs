//! Shared outcome and error types.

use thiserror::Error;

use crate::coord::Coordinate;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot struck a ship segment that is still afloat.
    Hit,
    /// The shot struck only water.
    Miss,
    /// The shot destroyed the last intact segment of a ship.
    Sunk,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),
    /// The cell was already resolved by an earlier shot.
    #[error("cell {0} was already targeted")]
    AlreadyTargeted(Coordinate),
    /// Ship length outside the allowed range.
    #[error("ship length {0} is not allowed")]
    InvalidShipLength(usize),
    /// The ship would leave the board, or land on a cell occupied by or
    /// adjacent to another ship.
    #[error("ship leaves the board or touches another ship")]
    WrongPlacement,
}

/// Errors produced while reading a target coordinate from an input source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected two whitespace-separated numbers, got {0}")]
    TokenCount(usize),
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("{0} is outside the playable range 1..={1}")]
    OutOfRange(i64, usize),
    #[error("input stream closed")]
    Closed,
}
