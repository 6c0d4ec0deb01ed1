//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over sub-boards and the main grid. Rules are kept apart
//! from board storage so the engine and the invariants share them.

pub mod draw;
pub mod win;

pub use draw::{is_exhausted, is_full, is_sub_board_drawn};
pub use win::{main_grid_won, sub_board_won};
