//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AutoPlayer: machine player firing at random cells
//! - HumanPlayer: interactive player parsing coordinates from an input source

use rand::rngs::SmallRng;

use crate::common::InputError;
use crate::coord::Coordinate;

/// Interface implemented by the two player kinds.
///
/// A player's single capability is naming the next target cell; shot
/// resolution and turn bookkeeping belong to the game loop, which feeds
/// the chosen coordinate to the opponent's board.
pub trait Player {
    /// Choose the next target coordinate.
    fn ask(&mut self, rng: &mut SmallRng) -> Result<Coordinate, InputError>;
}

// Re-export implementations
pub mod auto;
pub use auto::AutoPlayer;

pub mod human;
pub use human::{HumanPlayer, InputSource};
