//! Board structure

use super::bitboard::Bitboard;
use super::{Piece, Pos, TOTAL_CELLS};

/// Game board: one bitboard per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Board {
    /// Player 1 pieces
    pub one: Bitboard,
    /// Player 2 pieces
    pub two: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            one: Bitboard::new(),
            two: Bitboard::new(),
        }
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Piece {
        if self.one.get(pos) {
            Piece::One
        } else if self.two.get(pos) {
            Piece::Two
        } else {
            Piece::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.one.get(pos) && !self.two.get(pos)
    }

    /// Place a piece without any rule checks.
    /// Callers must make sure the cell is empty.
    #[inline]
    pub fn place(&mut self, pos: Pos, piece: Piece) {
        debug_assert!(self.is_empty(pos), "placing on occupied cell {pos}");
        match piece {
            Piece::One => self.one.set(pos),
            Piece::Two => self.two.set(pos),
            Piece::Empty => {}
        }
    }

    /// Remove a piece
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.one.clear(pos);
        self.two.clear(pos);
    }

    /// Get bitboard for a piece (returns None for Empty)
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Option<&Bitboard> {
        match piece {
            Piece::One => Some(&self.one),
            Piece::Two => Some(&self.two),
            Piece::Empty => None,
        }
    }

    /// Occupied cells as a bitboard
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.one.union(self.two)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> {
        self.occupied().complement().iter_ones()
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.one.count() + self.two.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.one.is_empty() && self.two.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.piece_count() as usize == TOTAL_CELLS
    }

    /// Build a board from rows of characters: `X` for player 1, `O` for
    /// player 2, anything else empty. Used by tests and doc examples.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let Some(pos) = Pos::try_new(r, c) else {
                    continue;
                };
                match ch {
                    'X' => board.place(pos, Piece::One),
                    'O' => board.place(pos, Piece::Two),
                    _ => {}
                }
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pos in Pos::all() {
            let ch = match self.get(pos) {
                Piece::One => 'X',
                Piece::Two => 'O',
                Piece::Empty => '.',
            };
            write!(f, "{ch}")?;
            if pos.col as usize == super::BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
