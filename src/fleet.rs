//! Randomized fleet placement with bounded retries.

use rand::rngs::SmallRng;
use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// Errors raised while populating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FleetError {
    /// The shared retry budget ran out before the fleet fit; the partial
    /// board is discarded, never returned.
    #[error("fleet placement gave up after {0} attempts")]
    AttemptsExhausted(u32),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Try to populate one board with the full fleet.
///
/// Ships are placed in fleet order by rejection sampling: draw a uniformly
/// random bow and orientation, attempt the placement, retry on rejection.
/// All rejections draw from one budget of [`MAX_PLACEMENT_ATTEMPTS`], so a
/// partial configuration that became unsatisfiable is abandoned instead of
/// repaired.
pub fn try_random_board(rng: &mut SmallRng, hidden: bool) -> Result<Board, FleetError> {
    let mut board = Board::new(hidden);
    let mut attempts: u32 = 0;
    for &length in FLEET.iter() {
        loop {
            let ship = Ship::new(length, Coordinate::random(rng), random_orientation(rng))?;
            match board.add_ship(ship) {
                Ok(()) => break,
                Err(BoardError::WrongPlacement) => {
                    attempts += 1;
                    if attempts > MAX_PLACEMENT_ATTEMPTS {
                        return Err(FleetError::AttemptsExhausted(attempts));
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    log::trace!("fleet placed after {} rejected placements", attempts);
    Ok(board)
}

/// Populate a board, restarting from an empty board whenever one attempt
/// exhausts its retry budget. For the fixed board and fleet parameters a
/// restart is rare.
pub fn random_board(rng: &mut SmallRng, hidden: bool) -> Board {
    let mut restarts = 0u32;
    loop {
        match try_random_board(rng, hidden) {
            Ok(board) => {
                if restarts > 0 {
                    log::debug!("fleet placed after {} board restarts", restarts);
                }
                return board;
            }
            Err(err) => {
                restarts += 1;
                log::debug!("{}, regenerating board", err);
            }
        }
    }
}

fn random_orientation(rng: &mut SmallRng) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NUM_SHIPS, TOTAL_SHIP_CELLS};
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn chebyshev(a: Coordinate, b: Coordinate) -> usize {
        a.row().abs_diff(b.row()).max(a.col().abs_diff(b.col()))
    }

    proptest! {
        #[test]
        fn generated_boards_hold_a_full_separated_fleet(seed in any::<u64>()) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let board = random_board(&mut rng, false);

            prop_assert_eq!(board.ships().len(), NUM_SHIPS);

            let mut occupied = Vec::new();
            for ship in board.ships() {
                prop_assert_eq!(ship.lives(), ship.length());
                for dot in ship.dots() {
                    prop_assert!(!board.out_of_bounds(dot));
                    occupied.push(dot);
                }
            }
            prop_assert_eq!(occupied.len(), TOTAL_SHIP_CELLS);

            // No two ships share a cell or touch, diagonals included.
            for (i, a) in board.ships().iter().enumerate() {
                for b in board.ships().iter().skip(i + 1) {
                    for da in a.dots() {
                        for db in b.dots() {
                            prop_assert!(chebyshev(da, db) >= 2);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn a_full_fleet_is_lost_only_after_every_ship_sinks() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut board = random_board(&mut rng, false);
        let targets: Vec<Coordinate> = board
            .ships()
            .iter()
            .flat_map(|ship| ship.dots().collect::<Vec<_>>())
            .collect();
        for dot in targets {
            assert!(!board.is_loser());
            board.shot(dot).unwrap();
        }
        assert!(board.is_loser());
        assert!(board.ships().iter().all(|ship| ship.is_destroyed()));
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_seed() {
        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        let a = random_board(&mut rng_a, false);
        let b = random_board(&mut rng_b, false);
        assert_eq!(a.view(), b.view());
        assert_eq!(a.ships(), b.ships());
    }
}
