//! Game orchestration between the console and the engine.

use crate::config::{GameConfig, validate_size};
use crate::console::Console;
use crate::render::{label, render_board};
use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use strictly_ultimate::{
    EngineError, GameEngine, GridCoord, MoveError, Player, Transition,
};
use tracing::{debug, info, instrument, warn};

/// How a console game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// A player owns a full line of sub-boards.
    Won(Player),
    /// Every sub-board was decided with no line.
    Drawn,
    /// The player typed quit or input ran out.
    Quit,
    /// The board size was missing or too small.
    InvalidSize,
}

/// Failure while running a console game.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),
    /// The engine could not be created.
    #[display("Could not start engine: {}", _0)]
    Engine(EngineError),
    /// The engine rejected a move for a reason the console cannot recover from.
    #[display("Engine rejected move: {}", _0)]
    Move(MoveError),
}

/// One parsed reply to the move prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Quit,
    Cell(GridCoord),
    Invalid,
}

/// Runs a whole console game: resolves the board size, creates the engine
/// and plays until someone wins, the board is drawn or the player quits.
///
/// # Errors
///
/// Returns an error if console I/O fails or the engine misbehaves.
#[instrument(skip(console))]
pub fn run_session<R: BufRead, W: Write>(
    config: &GameConfig,
    console: &mut Console<R, W>,
) -> Result<GameEnd, SessionError> {
    let size = match config.size() {
        Some(size) => Some(*size),
        None => ask_size(console)?,
    };

    let Some(size) = size.filter(|size| validate_size(*size).is_ok()) else {
        warn!(?size, "Rejected board size");
        console.say("Invalid size. Exiting.")?;
        return Ok(GameEnd::InvalidSize);
    };

    let mut engine = match config.seed() {
        Some(seed) => GameEngine::with_seed(size, *seed)?,
        None => GameEngine::new(size)?,
    };
    info!(size, seed = engine.seed(), "Game session started");

    run_game(&mut engine, console)
}

/// Prompts for the board size. Unparsable input counts as no size.
fn ask_size<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<usize>> {
    console.prompt("Enter the size of the board (n > 3): ")?;
    Ok(console.next_token()?.and_then(|token| token.parse().ok()))
}

/// Plays turns on `engine` until the game ends or the player quits.
///
/// Each turn a new active sub-board is drawn at random, the board is
/// rendered and the current player is asked for a cell in that sub-board.
///
/// # Errors
///
/// Returns an error if console I/O fails or the engine reports a broken
/// invariant.
#[instrument(skip_all, fields(size = engine.size()))]
pub fn run_game<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    console: &mut Console<R, W>,
) -> Result<GameEnd, SessionError> {
    let n = engine.size();

    loop {
        let Some(grid) = engine.select_active_grid() else {
            console.say("No open grids remain. The game is a draw.")?;
            return Ok(GameEnd::Drawn);
        };

        console.say(format!("\nCurrent grid: ({}, {})", grid.row + 1, grid.col + 1))?;
        console.prompt(render_board(engine, grid))?;
        console.prompt(format!(
            "Player {}, enter your move (row and column 1 to {}, or 'Quit' to end): ",
            engine.current_player(),
            n
        ))?;

        let cell = match read_reply(console)? {
            Reply::Quit => {
                info!("Game ended by player");
                console.say("\nGame ended by player. Thanks for playing!")?;
                return Ok(GameEnd::Quit);
            }
            Reply::Invalid => {
                console.discard_line();
                console.say("Invalid input. Please enter two numbers or 'Quit'.")?;
                continue;
            }
            Reply::Cell(cell) => cell,
        };

        let player = engine.current_player();
        match engine.play(grid, cell) {
            Ok(Transition::Continue) => {}
            Ok(Transition::SubGridWon { grid, player }) => {
                console.prompt(render_board(engine, grid))?;
                console.say(format!("Player {} wins grid ({})!", player, label(grid)))?;
            }
            Ok(Transition::SubGridDrawn { grid }) => {
                console.say(format!("Grid ({}) is a draw.", label(grid)))?;
            }
            Ok(Transition::GameWon { grid, player }) => {
                console.prompt(render_board(engine, grid))?;
                console.say(format!("Player {} wins grid ({})!", player, label(grid)))?;
                console.prompt(render_board(engine, grid))?;
                console.say(format!("Player {} wins the entire game!", player))?;
                return Ok(GameEnd::Won(player));
            }
            Ok(Transition::GameDrawn { grid }) => {
                console.prompt(render_board(engine, grid))?;
                console.say("The game is a draw.")?;
                return Ok(GameEnd::Drawn);
            }
            Err(err @ (MoveError::GameOver | MoveError::InvariantViolation(_))) => {
                return Err(err.into());
            }
            Err(err) => {
                debug!(%player, %err, "Move rejected");
                console.say(rejection_message(&err, n))?;
                console.say("Invalid move. Try again.")?;
            }
        }
    }
}

/// Explains a rejected move in the 1-based terms the player typed.
fn rejection_message(err: &MoveError, n: usize) -> String {
    match err {
        MoveError::GridDecided { status, .. } => match status.winner() {
            Some(owner) => format!("This grid has already been won by Player {}!", owner),
            None => "This grid is already a draw.".to_string(),
        },
        MoveError::CellOccupied(cell) => format!("Cell ({}) is already taken.", label(*cell)),
        MoveError::OutOfRange { .. } => {
            format!("Row and column must be between 1 and {}.", n)
        }
        other => other.to_string(),
    }
}

/// Reads "quit" or a 1-based row and column.
fn read_reply<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Reply> {
    let Some(first) = console.next_token()? else {
        return Ok(Reply::Quit);
    };
    if first.eq_ignore_ascii_case("quit") {
        return Ok(Reply::Quit);
    }

    let Some(row) = parse_index(&first) else {
        return Ok(Reply::Invalid);
    };
    let Some(second) = console.next_token()? else {
        return Ok(Reply::Quit);
    };
    match parse_index(&second) {
        Some(col) => Ok(Reply::Cell(GridCoord::new(row, col))),
        None => Ok(Reply::Invalid),
    }
}

/// Converts a typed 1-based number to a zero-based index.
///
/// Zero and negative numbers map past any grid, so the engine reports
/// them as out of range.
fn parse_index(token: &str) -> Option<usize> {
    let number: i64 = token.parse().ok()?;
    Some(
        number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .unwrap_or(usize::MAX),
    )
}
