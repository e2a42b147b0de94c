//! Game rules for four-in-a-row on a 5x5 board
//!
//! Any empty cell may be played. A player wins by completing a line of
//! four; a full board without a line is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, evaluate, is_board_full, winning_line, Outcome};
