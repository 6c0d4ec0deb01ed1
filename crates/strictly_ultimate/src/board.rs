//! Nested board storage: an n×n main grid of n×n sub-boards.

use crate::grid::Grid;
use crate::types::{Cell, GridCoord, GridStatus, Player};
use tracing::{instrument, trace};

/// One n×n inner board of player marks.
pub type SubBoard = Grid<Cell>;

/// The main grid's record of each sub-board's status.
pub type MainGrid = Grid<GridStatus>;

/// Full ultimate tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    sub_boards: Grid<SubBoard>,
    status: MainGrid,
}

impl Board {
    /// Creates a board with every cell empty and every sub-board undecided.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            sub_boards: Grid::from_fn(size, |_| Grid::filled(size, Cell::Empty)),
            status: Grid::filled(size, GridStatus::Undecided),
        }
    }

    /// Side length shared by the main grid and every sub-board.
    pub fn size(&self) -> usize {
        self.status.size()
    }

    /// Returns the sub-board at `grid`.
    pub fn sub_board(&self, grid: GridCoord) -> Option<&SubBoard> {
        self.sub_boards.get(grid)
    }

    /// Returns the cell at `cell` inside the sub-board at `grid`.
    pub fn cell(&self, grid: GridCoord, cell: GridCoord) -> Option<Cell> {
        self.sub_board(grid)?.get(cell).copied()
    }

    /// Returns the main-grid status of the sub-board at `grid`.
    pub fn status(&self, grid: GridCoord) -> Option<GridStatus> {
        self.status.get(grid).copied()
    }

    /// Returns the main grid of sub-board statuses.
    pub fn main_grid(&self) -> &MainGrid {
        &self.status
    }

    /// Iterates over every sub-board with its main-grid coordinate.
    pub fn sub_boards(&self) -> impl Iterator<Item = (GridCoord, &SubBoard)> {
        self.sub_boards.iter()
    }

    /// Writes a mark. Returns false if either coordinate is out of range.
    pub(crate) fn place(&mut self, grid: GridCoord, cell: GridCoord, player: Player) -> bool {
        match self.sub_boards.get_mut(grid).and_then(|b| b.get_mut(cell)) {
            Some(slot) => {
                trace!(%grid, %cell, %player, "Mark placed");
                *slot = Cell::Occupied(player);
                true
            }
            None => false,
        }
    }

    /// Records a sub-board status. Returns false if `grid` is out of range.
    pub(crate) fn set_status(&mut self, grid: GridCoord, status: GridStatus) -> bool {
        match self.status.get_mut(grid) {
            Some(slot) => {
                *slot = status;
                true
            }
            None => false,
        }
    }
}
