//! Two-board sea battle engine: randomized fleet placement under a full
//! 8-neighborhood separation rule, and a shot loop in which hits retain
//! the turn and the first fleet destroyed loses.

mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod logging;
mod player;
mod ship;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use ui::*;
