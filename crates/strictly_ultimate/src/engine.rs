//! Game engine for ultimate tic-tac-toe.
//!
//! The engine owns the nested board, the main-grid statuses, the current
//! player and the move log. It performs no I/O: an orchestrator picks an
//! active grid, feeds in player moves and renders through the read-only
//! accessors.
//!
//! The fine-grained operations (`apply_move`, `check_sub_win`,
//! `mark_sub_grid_winner`, ...) leave turn order to the caller.
//! [`GameEngine::play`] runs the whole sequence for the current player.

use crate::action::{Move, MoveError};
use crate::board::{Board, SubBoard};
use crate::error::{EngineError, EngineErrorKind};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::phases::{EngineState, Outcome, Transition};
use crate::rng::GridRng;
use crate::rules;
use crate::types::{Cell, GridCoord, GridStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Ultimate tic-tac-toe engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    history: Vec<Move>,
    state: EngineState,
    rng: GridRng,
}

impl GameEngine {
    /// Creates an engine with a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Self::with_rng(size, GridRng::from_entropy())
    }

    /// Creates an engine whose active-grid selection is driven by `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    #[instrument]
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(size, GridRng::new(seed))
    }

    /// Creates an engine using the given random source.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn with_rng(size: usize, rng: GridRng) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::new(EngineErrorKind::EmptyBoard));
        }
        info!(size, seed = rng.seed(), "Starting new game");
        Ok(Self {
            board: Board::new(size),
            current_player: Player::X,
            history: Vec::new(),
            state: EngineState::AwaitingMove,
            rng,
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Read-only accessors
    // ─────────────────────────────────────────────────────────────

    /// Side length of the main grid and of every sub-board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Seed of the active-grid random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns the current player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the sub-board at `grid`.
    pub fn sub_board(&self, grid: GridCoord) -> Option<&SubBoard> {
        self.board.sub_board(grid)
    }

    /// Returns the cell at `cell` inside the sub-board at `grid`.
    pub fn cell(&self, grid: GridCoord, cell: GridCoord) -> Option<Cell> {
        self.board.cell(grid, cell)
    }

    /// Returns the main-grid status of the sub-board at `grid`.
    pub fn grid_status(&self, grid: GridCoord) -> Option<GridStatus> {
        self.board.status(grid)
    }

    /// Returns every accepted move in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the engine state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    // ─────────────────────────────────────────────────────────────
    //  Orchestrator operations
    // ─────────────────────────────────────────────────────────────

    /// Picks a random undecided sub-board for the next turn.
    ///
    /// Samples uniformly over the whole main grid and retries until an
    /// undecided sub-board comes up. Only the random source advances.
    /// Returns `None` when every sub-board is decided.
    #[instrument(skip(self))]
    pub fn select_active_grid(&mut self) -> Option<GridCoord> {
        if self.is_main_grid_exhausted() {
            warn!("No undecided sub-board left to select");
            return None;
        }

        let size = self.size();
        loop {
            let grid = GridCoord::new(self.rng.index(size), self.rng.index(size));
            if self.board.status(grid).is_some_and(GridStatus::is_undecided) {
                debug!(%grid, "Active grid selected");
                return Some(grid);
            }
        }
    }

    /// Validates a move into `cell` of the sub-board at `grid`.
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfRange` if either coordinate is outside the grid
    /// - `MoveError::GridDecided` if the sub-board was already won or drawn
    /// - `MoveError::CellOccupied` if the cell already holds a mark
    #[instrument(skip(self))]
    pub fn validate_move(&self, grid: GridCoord, cell: GridCoord) -> Result<(), MoveError> {
        let size = self.size();
        let status = self
            .board
            .status(grid)
            .ok_or(MoveError::OutOfRange { coord: grid, size })?;

        if !status.is_undecided() {
            return Err(MoveError::GridDecided { grid, status });
        }

        match self.board.cell(grid, cell) {
            None => Err(MoveError::OutOfRange { coord: cell, size }),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(cell)),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Returns true if a mark may be placed at `cell` of the sub-board at `grid`.
    pub fn is_valid_move(&self, grid: GridCoord, cell: GridCoord) -> bool {
        self.validate_move(grid, cell).is_ok()
    }

    /// Places the move's mark and records it in the history.
    ///
    /// Does not toggle the player or evaluate wins.
    ///
    /// # Errors
    ///
    /// Returns the [`GameEngine::validate_move`] error if the move is not valid.
    #[instrument(skip_all, fields(mv = %mv))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.validate_move(mv.grid, mv.cell)?;
        if !self.board.place(mv.grid, mv.cell, mv.player) {
            return Err(MoveError::OutOfRange {
                coord: mv.cell,
                size: self.size(),
            });
        }
        self.history.push(mv);
        debug!(moves = self.history.len(), "Move applied");
        Ok(())
    }

    /// Checks if `player` completed a line in the sub-board at `grid`.
    #[instrument(skip(self))]
    pub fn check_sub_win(&self, grid: GridCoord, player: Player) -> bool {
        self.board
            .sub_board(grid)
            .is_some_and(|sub| rules::sub_board_won(sub, player))
    }

    /// Checks if the sub-board at `grid` is full with no completed line.
    #[instrument(skip(self))]
    pub fn check_sub_draw(&self, grid: GridCoord) -> bool {
        self.board.sub_board(grid).is_some_and(rules::is_sub_board_drawn)
    }

    /// Records `player` as the winner of the sub-board at `grid`, freezing it.
    #[instrument(skip(self))]
    pub fn mark_sub_grid_winner(&mut self, grid: GridCoord, player: Player) {
        self.set_status(grid, GridStatus::Won(player));
    }

    /// Records the sub-board at `grid` as drawn, freezing it.
    #[instrument(skip(self))]
    pub fn mark_sub_grid_drawn(&mut self, grid: GridCoord) {
        self.set_status(grid, GridStatus::Drawn);
    }

    /// Checks if `player` won a full line of sub-boards.
    #[instrument(skip(self))]
    pub fn check_main_grid_win(&self, player: Player) -> bool {
        rules::main_grid_won(self.board.main_grid(), player)
    }

    /// Checks if every sub-board has been decided.
    pub fn is_main_grid_exhausted(&self) -> bool {
        rules::is_exhausted(self.board.main_grid())
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.current_player))]
    pub fn toggle_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Plays a move for the current player and resolves its consequences.
    ///
    /// Validates and applies the move, settles the sub-board if it was won
    /// or filled, checks the main grid and hands the turn over unless the
    /// game ended.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the game has finished
    /// - any [`GameEngine::validate_move`] error; nothing changes in that case
    /// - `MoveError::InvariantViolation` if the resulting state is inconsistent
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, grid: GridCoord, cell: GridCoord) -> Result<Transition, MoveError> {
        if self.state.is_finished() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.apply_move(Move::new(player, grid, cell))?;

        let transition = if self.check_sub_win(grid, player) {
            self.mark_sub_grid_winner(grid, player);
            info!(%grid, %player, "Sub-grid won");
            if self.check_main_grid_win(player) {
                self.finish(Outcome::Winner(player));
                Transition::GameWon { grid, player }
            } else if self.is_main_grid_exhausted() {
                self.finish(Outcome::Draw);
                Transition::GameDrawn { grid }
            } else {
                Transition::SubGridWon { grid, player }
            }
        } else if self.check_sub_draw(grid) {
            self.mark_sub_grid_drawn(grid);
            info!(%grid, "Sub-grid drawn");
            if self.is_main_grid_exhausted() {
                self.finish(Outcome::Draw);
                Transition::GameDrawn { grid }
            } else {
                Transition::SubGridDrawn { grid }
            }
        } else {
            Transition::Continue
        };

        if !transition.is_terminal() {
            self.toggle_player();
        }

        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        Ok(transition)
    }

    fn set_status(&mut self, grid: GridCoord, status: GridStatus) {
        if self.board.set_status(grid, status) {
            debug!(%grid, %status, "Sub-grid status recorded");
        } else {
            warn!(%grid, size = self.size(), "Ignoring status for out-of-range grid");
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, moves = self.history.len(), "Game over");
        self.state = EngineState::Finished(outcome);
    }
}
