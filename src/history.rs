//! Move history for undo

use crate::board::{Piece, Pos, TOTAL_CELLS};

/// One recorded move. Never modified after it is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub piece: Piece,
}

impl MoveRecord {
    pub fn new(pos: Pos, piece: Piece) -> Self {
        Self { pos, piece }
    }
}

/// Stack of moves played in the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Append a move.
    ///
    /// Every move occupies a distinct cell, so the stack can never outgrow
    /// the board.
    pub fn record(&mut self, record: MoveRecord) {
        debug_assert!(self.moves.len() < TOTAL_CELLS, "history longer than the board");
        self.moves.push(record);
    }

    /// Remove and return the most recent move
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    /// Most recent move
    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Undo is offered exactly when something has been played
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Moves in the order they were played
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }
}
