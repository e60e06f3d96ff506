//! Grid coordinates.

use core::fmt;

use rand::Rng;

use crate::config::BOARD_SIZE;

/// A single cell position as a zero-based `(row, col)` pair.
///
/// Values are not range-checked on construction; the board rejects
/// out-of-bounds coordinates at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Uniformly random in-bounds coordinate.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        )
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// In-bounds cells of the 8-neighborhood around this one.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Coordinate { row, col })
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
