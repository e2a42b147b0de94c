//! Computer opponent
//!
//! A single-ply heuristic. Rules are tried in priority order and the first
//! one that produces a cell wins:
//!
//! 1. **Immediate win**: first empty cell (row-major) that completes a line
//! 2. **Block**: first empty cell where the opponent would complete a line
//! 3. **Center**: the middle cell if it is empty
//! 4. **Corner**: a random empty corner
//! 5. **Random**: a random empty cell
//!
//! # Example
//!
//! ```
//! use four_in_row::{AiEngine, Board, Piece, Pos, SelectionKind};
//!
//! let board = Board::from_rows(&["OOO..", "XX...", "X....", ".....", "....."]);
//! let mut engine = AiEngine::with_seed(7);
//!
//! let selection = engine.select(&board, Piece::Two).unwrap();
//! assert_eq!(selection.pos, Pos::new(0, 3));
//! assert_eq!(selection.kind, SelectionKind::ImmediateWin);
//! ```

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Piece, Pos};
use crate::rules::check_win;

/// Which rule produced the computer's move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Completes a line for the computer
    ImmediateWin,
    /// Stops the opponent from completing a line
    Block,
    /// Took the empty center cell
    Center,
    /// Random empty corner
    Corner,
    /// Random empty cell
    Random,
}

/// A chosen cell together with the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub pos: Pos,
    pub kind: SelectionKind,
}

/// First empty cell in row-major order where `piece` would complete a line.
///
/// Each candidate is tried on a copy of the board, so the caller's board
/// is never touched.
pub fn find_winning_move(board: &Board, piece: Piece) -> Option<Pos> {
    board.empty_cells().find(|&pos| {
        let mut trial = *board;
        trial.place(pos, piece);
        check_win(&trial, pos) == Some(piece)
    })
}

/// Heuristic move selector with an injectable random source.
///
/// Only the corner and random fallbacks consume randomness, so a fixed seed
/// makes every choice reproducible.
pub struct AiEngine<R: Rng = StdRng> {
    rng: R,
}

impl AiEngine<StdRng> {
    /// Engine seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for tests and reproducible games
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for AiEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AiEngine<R> {
    /// Engine drawing from a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a cell for `piece`. Returns `None` only when the board is full.
    pub fn get_move(&mut self, board: &Board, piece: Piece) -> Option<Pos> {
        self.select(board, piece).map(|s| s.pos)
    }

    /// Pick a cell for `piece` and report which rule chose it
    pub fn select(&mut self, board: &Board, piece: Piece) -> Option<Selection> {
        let selection = self.select_inner(board, piece)?;
        debug!(
            "computer ({:?}) picks {} via {:?}",
            piece, selection.pos, selection.kind
        );
        Some(selection)
    }

    fn select_inner(&mut self, board: &Board, piece: Piece) -> Option<Selection> {
        if let Some(pos) = find_winning_move(board, piece) {
            return Some(Selection {
                pos,
                kind: SelectionKind::ImmediateWin,
            });
        }

        if let Some(pos) = find_winning_move(board, piece.opponent()) {
            return Some(Selection {
                pos,
                kind: SelectionKind::Block,
            });
        }

        if board.is_empty(Pos::CENTER) {
            return Some(Selection {
                pos: Pos::CENTER,
                kind: SelectionKind::Center,
            });
        }

        let corners: Vec<Pos> = Pos::CORNERS
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        if let Some(&pos) = corners.choose(&mut self.rng) {
            return Some(Selection {
                pos,
                kind: SelectionKind::Corner,
            });
        }

        let empty: Vec<Pos> = board.empty_cells().collect();
        empty.choose(&mut self.rng).map(|&pos| Selection {
            pos,
            kind: SelectionKind::Random,
        })
    }
}
