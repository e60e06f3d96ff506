use rand::rngs::SmallRng;

use super::Player;
use crate::common::InputError;
use crate::coord::Coordinate;

/// Machine player that fires at a uniformly random in-bounds cell.
///
/// Repeat targets are possible; the game loop rejects them and asks again
/// without consuming the turn.
pub struct AutoPlayer;

impl AutoPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AutoPlayer {
    fn ask(&mut self, rng: &mut SmallRng) -> Result<Coordinate, InputError> {
        Ok(Coordinate::random(rng))
    }
}
