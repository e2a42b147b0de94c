//! Four-in-a-row on a 5x5 board
//!
//! A small connect-four style game:
//! - 5x5 board, pieces go into any empty cell
//! - Four in a row (horizontal, vertical or diagonal) wins
//! - A full board without a line is a draw
//! - Local two-player games or a game against a heuristic computer opponent
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win and draw detection
//! - [`history`]: Move stack for undo
//! - [`engine`]: Single-ply computer opponent
//! - [`session`]: Game session and phase state machine
//! - [`setup`]: Mode and city/colour choice for both players
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use four_in_row::{GameMode, Outcome, Piece, PlayerLabels, Pos, Session};
//!
//! let mut session = Session::new();
//! session.start(GameMode::TwoPlayer, PlayerLabels::default());
//!
//! for col in 0..3 {
//!     session.apply_move(Pos::new(0, col)).unwrap();
//!     session.apply_move(Pos::new(4, col)).unwrap();
//! }
//! let last = session.apply_move(Pos::new(0, 3)).unwrap();
//! assert_eq!(last.result, Some(Outcome::Win(Piece::One)));
//! ```
//!
//! # Computer Priority
//!
//! The computer opponent follows this priority:
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Center cell
//! 4. Random empty corner
//! 5. Random empty cell

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod rules;
pub mod session;
pub mod setup;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Pos, BOARD_SIZE, TOTAL_CELLS, WIN_LENGTH};
pub use config::AppConfig;
pub use engine::{AiEngine, Selection, SelectionKind};
pub use error::{ConfigError, Rejection};
pub use history::{History, MoveRecord};
pub use rules::Outcome;
pub use session::{GameMode, MoveOutcome, Phase, Session, Status};
pub use setup::{PlayerLabels, SetupFlow};
