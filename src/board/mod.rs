//! Board representation for the 5x5 four-in-a-row game

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (5x5)
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 25

/// Contiguous run length that wins the game
pub const WIN_LENGTH: usize = 4;

/// Cell occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    /// Player 1, always moves first
    One,
    /// Player 2 (the computer in vs-computer games)
    Two,
}

impl Piece {
    /// Get opponent piece
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::One => Piece::Two,
            Piece::Two => Piece::One,
            Piece::Empty => Piece::Empty,
        }
    }

    /// Player number shown to users (1 or 2), 0 for empty
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Piece::Empty => 0,
            Piece::One => 1,
            Piece::Two => 2,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Center cell, the computer's preferred fallback
    pub const CENTER: Pos = Pos { row: 2, col: 2 };

    /// Corner cells in row-major order
    pub const CORNERS: [Pos; 4] = [
        Pos { row: 0, col: 0 },
        Pos { row: 0, col: 4 },
        Pos { row: 4, col: 0 },
        Pos { row: 4, col: 4 },
    ];

    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the core
    #[inline]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// All cells in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
