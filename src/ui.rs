//! Console rendering and stdin input for interactive play.

use std::io::{self, Write};

use crate::board::{Board, CellState};
use crate::common::InputError;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::player::InputSource;

fn cell_char(cell: CellState) -> char {
    match cell {
        CellState::Unknown => '.',
        CellState::ShipUnrevealed => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
    }
}

/// Print a board view with 1-based row and column headers. Hidden boards
/// come out of [`Board::view`] with their intact ships already concealed.
pub fn print_board(board: &Board) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!(" {}", c + 1);
    }
    println!();
    for (r, row) in board.view().iter().enumerate() {
        print!(" {} ", r + 1);
        for &cell in row.iter() {
            print!(" {}", cell_char(cell));
        }
        println!();
    }
}

/// Format a coordinate the way the player types one: 1-based "row col".
pub fn format_target(dot: Coordinate) -> String {
    format!("{} {}", dot.row() + 1, dot.col() + 1)
}

/// Welcome banner with the rules and the expected input format.
pub fn greet() {
    println!("Welcome to Sea Battle: two 6x6 boards, seven ships each.");
    println!("Fleet: one 3-cell ship, two 2-cell ships and four 1-cell ships.");
    println!();
    println!("Ships are placed automatically. On your turn enter the target");
    println!("as two numbers from 1 to 6, row then column, separated by a");
    println!("space. A cell can be shot only once, and a hit grants another");
    println!("shot. The first fleet destroyed loses.");
    println!();
    println!("Symbols: S ship, X hit, o miss, . unknown water.");
}

/// [`InputSource`] backed by stdin, prompting before every read.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn request_line(&mut self) -> Result<String, InputError> {
        print!("Enter target (row col): ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => Err(InputError::Closed),
            Ok(_) => Ok(line),
        }
    }
}
