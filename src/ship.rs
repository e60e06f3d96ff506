//! Ship geometry and remaining lives.

use crate::common::BoardError;
use crate::config::MAX_SHIP_LENGTH;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at its bow cell.
///
/// Occupied cells run from the bow along the column axis when horizontal
/// and along the row axis when vertical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Create a ship of `length` cells with all segments intact.
    /// Lengths outside `1..=MAX_SHIP_LENGTH` are rejected.
    pub fn new(
        length: usize,
        bow: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidShipLength(length));
        }
        Ok(Self {
            length,
            bow,
            orientation,
            lives: length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn lives(&self) -> usize {
        self.lives
    }

    /// Cells occupied by the ship, bow first.
    pub fn dots(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (row, col) = (self.bow.row(), self.bow.col());
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(row, col + i),
            Orientation::Vertical => Coordinate::new(row + i, col),
        })
    }

    /// Whether `dot` is one of the ship's cells.
    pub fn is_hit(&self, dot: Coordinate) -> bool {
        self.dots().any(|d| d == dot)
    }

    /// Remove one life, stopping at zero. Returns `true` when the last
    /// segment was just destroyed.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    /// Whether every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.lives == 0
    }
}
