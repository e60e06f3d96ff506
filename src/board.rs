//! Board state: ship placement under the separation rule and shot resolution.

use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::ship::Ship;

/// Resolution state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Never targeted, no ship known to the viewer.
    Unknown,
    /// Occupied by an intact ship segment; exported as `Unknown` on
    /// hidden boards.
    ShipUnrevealed,
    /// A shot struck a ship segment here.
    Hit,
    /// A shot resolved as water, or the revealed boundary of a sunk ship.
    Miss,
}

/// Per-cell states of a whole board.
pub type CellGrid = [[CellState; BOARD_SIZE]; BOARD_SIZE];

/// One player's sea: a cell-state grid, the owned ships, the cells
/// reserved against placement, and the count of ships still afloat.
///
/// A board goes through two phases that never interleave: construction
/// (`add_ship`) and play (`shot`).
pub struct Board {
    cells: CellGrid,
    ships: Vec<Ship>,
    /// Cells unavailable to further placement: occupied or inside a halo.
    reserved: [[bool; BOARD_SIZE]; BOARD_SIZE],
    alive: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty board. `hidden` controls only how the board is
    /// exported for rendering, never shot resolution.
    pub fn new(hidden: bool) -> Self {
        Self {
            cells: [[CellState::Unknown; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            reserved: [[false; BOARD_SIZE]; BOARD_SIZE],
            alive: 0,
            hidden,
        }
    }

    /// True when `dot` falls outside the grid.
    pub fn out_of_bounds(&self, dot: Coordinate) -> bool {
        dot.row() >= BOARD_SIZE || dot.col() >= BOARD_SIZE
    }

    /// Ships placed so far.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships with at least one intact segment.
    pub fn ships_alive(&self) -> usize {
        self.alive
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// State of a single cell, `None` out of bounds.
    pub fn cell(&self, dot: Coordinate) -> Option<CellState> {
        (!self.out_of_bounds(dot)).then(|| self.cells[dot.row()][dot.col()])
    }

    /// Place `ship`, marking its cells and reserving its halo so that no
    /// later ship may touch it, diagonals included.
    ///
    /// Fails with [`BoardError::WrongPlacement`] when any cell leaves the
    /// grid or lands on a reserved cell; the board is left untouched on
    /// failure.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for dot in ship.dots() {
            if self.out_of_bounds(dot) || self.reserved[dot.row()][dot.col()] {
                return Err(BoardError::WrongPlacement);
            }
        }
        for dot in ship.dots() {
            self.cells[dot.row()][dot.col()] = CellState::ShipUnrevealed;
            self.reserved[dot.row()][dot.col()] = true;
            for n in dot.neighbors() {
                self.reserved[n.row()][n.col()] = true;
            }
        }
        self.alive += 1;
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `dot`.
    ///
    /// A cell can be shot exactly once; cells reserved by a halo but never
    /// targeted are still legal targets. Destroying a ship's last segment
    /// reveals its halo as misses and reports [`ShotOutcome::Sunk`].
    pub fn shot(&mut self, dot: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.out_of_bounds(dot) {
            return Err(BoardError::OutOfBounds(dot));
        }
        match self.cells[dot.row()][dot.col()] {
            CellState::Hit | CellState::Miss => {
                return Err(BoardError::AlreadyTargeted(dot));
            }
            CellState::Unknown | CellState::ShipUnrevealed => {}
        }
        for i in 0..self.ships.len() {
            if self.ships[i].is_hit(dot) {
                self.cells[dot.row()][dot.col()] = CellState::Hit;
                if self.ships[i].take_hit() {
                    self.alive -= 1;
                    self.reveal_halo(i);
                    return Ok(ShotOutcome::Sunk);
                }
                return Ok(ShotOutcome::Hit);
            }
        }
        self.cells[dot.row()][dot.col()] = CellState::Miss;
        Ok(ShotOutcome::Miss)
    }

    /// Mark the untouched cells around a sunk ship as misses, exposing the
    /// boundary no other ship can occupy.
    fn reveal_halo(&mut self, ship_index: usize) {
        let dots: Vec<Coordinate> = self.ships[ship_index].dots().collect();
        for dot in dots {
            for n in dot.neighbors() {
                let cell = &mut self.cells[n.row()][n.col()];
                if *cell == CellState::Unknown {
                    *cell = CellState::Miss;
                }
            }
        }
    }

    /// True once every ship on the board has been destroyed.
    pub fn is_loser(&self) -> bool {
        self.alive == 0
    }

    /// Per-cell states with the visibility flag applied: on a hidden board
    /// intact ship cells are exported as `Unknown`.
    pub fn view(&self) -> CellGrid {
        let mut view = self.cells;
        if self.hidden {
            for row in view.iter_mut() {
                for cell in row.iter_mut() {
                    if *cell == CellState::ShipUnrevealed {
                        *cell = CellState::Unknown;
                    }
                }
            }
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;

    fn ship(length: usize, row: usize, col: usize, orientation: Orientation) -> Ship {
        Ship::new(length, Coordinate::new(row, col), orientation).unwrap()
    }

    #[test]
    fn shot_outside_the_grid_is_rejected() {
        let mut board = Board::new(false);
        for dot in [
            Coordinate::new(BOARD_SIZE, 0),
            Coordinate::new(0, BOARD_SIZE),
            Coordinate::new(99, 99),
        ] {
            assert_eq!(board.shot(dot), Err(BoardError::OutOfBounds(dot)));
        }
    }

    #[test]
    fn add_ship_marks_cells_and_counts_the_ship() {
        let mut board = Board::new(false);
        board
            .add_ship(ship(2, 1, 1, Orientation::Vertical))
            .unwrap();
        assert_eq!(board.ships_alive(), 1);
        assert_eq!(
            board.cell(Coordinate::new(1, 1)),
            Some(CellState::ShipUnrevealed)
        );
        assert_eq!(
            board.cell(Coordinate::new(2, 1)),
            Some(CellState::ShipUnrevealed)
        );
        assert_eq!(board.cell(Coordinate::new(3, 1)), Some(CellState::Unknown));
    }

    #[test]
    fn ship_leaving_the_grid_is_rejected() {
        let mut board = Board::new(false);
        let err = board.add_ship(ship(3, 0, 4, Orientation::Horizontal));
        assert_eq!(err, Err(BoardError::WrongPlacement));
        let err = board.add_ship(ship(2, 5, 0, Orientation::Vertical));
        assert_eq!(err, Err(BoardError::WrongPlacement));
        assert!(board.ships().is_empty());
    }

    #[test]
    fn ship_inside_another_halo_is_rejected_without_side_effects() {
        let mut board = Board::new(false);
        board
            .add_ship(ship(3, 0, 0, Orientation::Horizontal))
            .unwrap();
        let before = board.view();

        // Diagonal contact at (1, 3) with the halo of the first ship.
        let err = board.add_ship(ship(1, 1, 3, Orientation::Horizontal));
        assert_eq!(err, Err(BoardError::WrongPlacement));
        assert_eq!(board.ships().len(), 1);
        assert_eq!(board.view(), before);

        // Two rows away is free.
        board
            .add_ship(ship(1, 2, 3, Orientation::Horizontal))
            .unwrap();
    }

    #[test]
    fn shooting_every_segment_sinks_the_ship_and_reveals_its_halo() {
        let mut board = Board::new(false);
        board
            .add_ship(ship(3, 0, 0, Orientation::Horizontal))
            .unwrap();

        assert_eq!(board.shot(Coordinate::new(0, 0)), Ok(ShotOutcome::Hit));
        assert_eq!(board.ships()[0].lives(), 2);
        assert_eq!(board.shot(Coordinate::new(0, 1)), Ok(ShotOutcome::Hit));
        assert_eq!(board.ships()[0].lives(), 1);
        assert_eq!(board.shot(Coordinate::new(0, 2)), Ok(ShotOutcome::Sunk));

        assert!(board.ships()[0].is_destroyed());
        assert_eq!(board.ships_alive(), 0);
        assert!(board.is_loser());
        for dot in [
            Coordinate::new(0, 3),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
            Coordinate::new(1, 3),
        ] {
            assert_eq!(board.cell(dot), Some(CellState::Miss));
        }
        for col in 0..3 {
            assert_eq!(board.cell(Coordinate::new(0, col)), Some(CellState::Hit));
        }
    }

    #[test]
    fn a_cell_can_be_shot_only_once() {
        let mut board = Board::new(false);
        board
            .add_ship(ship(2, 0, 0, Orientation::Horizontal))
            .unwrap();

        let miss = Coordinate::new(4, 4);
        assert_eq!(board.shot(miss), Ok(ShotOutcome::Miss));
        assert_eq!(board.shot(miss), Err(BoardError::AlreadyTargeted(miss)));

        let hit = Coordinate::new(0, 0);
        assert_eq!(board.shot(hit), Ok(ShotOutcome::Hit));
        assert_eq!(board.shot(hit), Err(BoardError::AlreadyTargeted(hit)));
    }

    #[test]
    fn halo_of_an_intact_ship_is_still_a_legal_target() {
        let mut board = Board::new(false);
        board
            .add_ship(ship(1, 0, 0, Orientation::Horizontal))
            .unwrap();
        assert_eq!(board.shot(Coordinate::new(1, 1)), Ok(ShotOutcome::Miss));
    }

    #[test]
    fn halo_revealed_by_a_sinking_blocks_later_shots() {
        let mut board = Board::new(false);
        board
            .add_ship(ship(1, 0, 0, Orientation::Horizontal))
            .unwrap();
        assert_eq!(board.shot(Coordinate::new(0, 0)), Ok(ShotOutcome::Sunk));
        let halo = Coordinate::new(1, 1);
        assert_eq!(board.cell(halo), Some(CellState::Miss));
        assert_eq!(board.shot(halo), Err(BoardError::AlreadyTargeted(halo)));
    }

    #[test]
    fn sinking_decrements_only_one_ship_from_the_counter() {
        let mut board = Board::new(false);
        board
            .add_ship(ship(1, 0, 0, Orientation::Horizontal))
            .unwrap();
        board
            .add_ship(ship(1, 3, 3, Orientation::Horizontal))
            .unwrap();
        assert_eq!(board.ships_alive(), 2);
        assert_eq!(board.shot(Coordinate::new(0, 0)), Ok(ShotOutcome::Sunk));
        assert_eq!(board.ships_alive(), 1);
        assert!(!board.is_loser());
        assert_eq!(board.shot(Coordinate::new(3, 3)), Ok(ShotOutcome::Sunk));
        assert!(board.is_loser());
    }

    #[test]
    fn hidden_boards_export_intact_ships_as_unknown() {
        let mut board = Board::new(true);
        board
            .add_ship(ship(2, 2, 2, Orientation::Horizontal))
            .unwrap();
        let view = board.view();
        assert_eq!(view[2][2], CellState::Unknown);
        assert_eq!(view[2][3], CellState::Unknown);

        // Hits and misses stay visible regardless of the flag.
        board.shot(Coordinate::new(2, 2)).unwrap();
        board.shot(Coordinate::new(5, 5)).unwrap();
        let view = board.view();
        assert_eq!(view[2][2], CellState::Hit);
        assert_eq!(view[5][5], CellState::Miss);
        assert_eq!(view[2][3], CellState::Unknown);
    }
}
