//! Turn state machine over two players and their boards.

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::board::Board;
use crate::common::{BoardError, InputError, ShotOutcome};
use crate::coord::Coordinate;
use crate::player::Player;

/// The two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// The other seat.
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// Whose move is awaited, or who has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(Side),
    Finished(Side),
}

/// Why a move attempt was rejected. Never fatal: the same side is asked
/// again and no turn is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// What a single [`Game::step`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The move was invalid; the same side stays active.
    Rejected { by: Side, error: MoveError },
    /// A shot was resolved against the opponent board. Hits and sinkings
    /// retain the turn, a miss passes it.
    Resolved {
        by: Side,
        target: Coordinate,
        outcome: ShotOutcome,
    },
}

/// A match between two players, each owning one populated board and
/// granted shoot-only access to the other's.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    state: GameState,
}

impl Game {
    /// Pair two players with their populated boards. Side one moves first.
    pub fn new(
        one: Box<dyn Player>,
        board_one: Board,
        two: Box<dyn Player>,
        board_two: Board,
    ) -> Self {
        Self {
            players: [one, two],
            boards: [board_one, board_two],
            state: GameState::AwaitingMove(Side::One),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winning side, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::Finished(winner) => Some(winner),
            GameState::AwaitingMove(_) => None,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Ask the active player for a target, resolve it against the opponent
    /// board and advance the state machine. Returns `None` once the game
    /// is finished.
    pub fn step(&mut self, rng: &mut SmallRng) -> Option<TurnEvent> {
        let active = match self.state {
            GameState::AwaitingMove(side) => side,
            GameState::Finished(_) => return None,
        };
        let target = match self.players[active.index()].ask(rng) {
            Ok(target) => target,
            Err(err) => {
                return Some(TurnEvent::Rejected {
                    by: active,
                    error: err.into(),
                });
            }
        };
        let opponent = active.opponent();
        let outcome = match self.boards[opponent.index()].shot(target) {
            Ok(outcome) => outcome,
            Err(err) => {
                return Some(TurnEvent::Rejected {
                    by: active,
                    error: err.into(),
                });
            }
        };
        if self.boards[opponent.index()].is_loser() {
            log::debug!("{:?} wins", active);
            self.state = GameState::Finished(active);
        } else if outcome == ShotOutcome::Miss {
            self.state = GameState::AwaitingMove(opponent);
        }
        Some(TurnEvent::Resolved {
            by: active,
            target,
            outcome,
        })
    }

    /// Run the match to completion and return the winner. Meant for
    /// automated players whose `ask` cannot fail permanently.
    pub fn play_to_end(&mut self, rng: &mut SmallRng) -> Side {
        loop {
            if let GameState::Finished(winner) = self.state {
                return winner;
            }
            self.step(rng);
        }
    }
}
