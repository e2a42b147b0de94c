//! Win and draw detection
//!
//! Win condition: four or more pieces of one player in a contiguous line
//! (horizontal, vertical or either diagonal). Longer runs also win.
//! A full board with no winner is a draw.

use crate::board::{Board, Piece, Pos, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Piece),
    Draw,
}

/// Count same-colored pieces from `pos` (exclusive) along one direction.
///
/// Stops at the first foreign or empty cell, at the board edge, or once
/// `WIN_LENGTH - 1` pieces are found.
#[inline]
fn count_direction(board: &Board, pos: Pos, piece: Piece, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    for i in 1..WIN_LENGTH as i32 {
        let r = pos.row as i32 + dr * i;
        let c = pos.col as i32 + dc * i;
        if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != piece {
            break;
        }
        count += 1;
    }
    count
}

/// Check whether the piece at `pos` completes a winning line.
///
/// Returns the owner of `pos` if a run of at least [`WIN_LENGTH`] passes
/// through it, `None` otherwise (including when `pos` is empty). Pure, so
/// the AI can call it on speculative placements.
pub fn check_win(board: &Board, pos: Pos) -> Option<Piece> {
    let piece = board.get(pos);
    if piece == Piece::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let count = 1
            + count_direction(board, pos, piece, dr, dc)
            + count_direction(board, pos, piece, -dr, -dc);
        if count >= WIN_LENGTH {
            return Some(piece);
        }
    }
    None
}

/// Find the full winning line through `pos`, ordered from one end to the other.
///
/// Unlike [`check_win`] the run is followed to its real ends, so a five
/// along a row is returned whole.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let piece = board.get(pos);
    if piece == Piece::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let (mut r, mut c) = (pos.row as i32 - dr, pos.col as i32 - dc);
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == piece {
            line.insert(0, Pos::new(r as u8, c as u8));
            r -= dr;
            c -= dc;
        }

        // Extend in positive direction
        let (mut r, mut c) = (pos.row as i32 + dr, pos.col as i32 + dc);
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == piece {
            line.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}

/// Check if no empty cell remains
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

/// Evaluate the position right after a piece was placed at `pos`.
///
/// A win takes priority over a draw when the last empty cell completes a line.
pub fn evaluate(board: &Board, pos: Pos) -> Option<Outcome> {
    if let Some(winner) = check_win(board, pos) {
        Some(Outcome::Win(winner))
    } else if is_board_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    #[test]
    fn test_four_in_row_horizontal() {
        let board = Board::from_rows(&[".....", ".XXXX", ".....", ".....", "....."]);
        assert_eq!(check_win(&board, Pos::new(1, 1)), Some(Piece::One));
        assert_eq!(check_win(&board, Pos::new(1, 3)), Some(Piece::One));
    }

    #[test]
    fn test_four_in_row_vertical() {
        let board = Board::from_rows(&["....O", "....O", "....O", "....O", "....."]);
        assert_eq!(check_win(&board, Pos::new(3, 4)), Some(Piece::Two));
    }

    #[test]
    fn test_four_in_row_diagonals() {
        let se = Board::from_rows(&[".....", ".X...", "..X..", "...X.", "....X"]);
        assert_eq!(check_win(&se, Pos::new(2, 2)), Some(Piece::One));

        let sw = Board::from_rows(&["...O.", "..O..", ".O...", "O....", "....."]);
        assert_eq!(check_win(&sw, Pos::new(0, 3)), Some(Piece::Two));
    }

    #[test]
    fn test_three_in_row_not_win() {
        let board = Board::from_rows(&["XXX..", ".....", ".....", ".....", "....."]);
        assert_eq!(check_win(&board, Pos::new(0, 1)), None);
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = Board::from_rows(&["XX.XX", ".....", ".....", ".....", "....."]);
        assert_eq!(check_win(&board, Pos::new(0, 1)), None);
        assert_eq!(check_win(&board, Pos::new(0, 3)), None);
    }

    #[test]
    fn test_opponent_piece_breaks_run() {
        let board = Board::from_rows(&["XXOXX", ".....", ".....", ".....", "....."]);
        assert_eq!(check_win(&board, Pos::new(0, 0)), None);
    }

    #[test]
    fn test_five_in_row_also_wins() {
        let board = Board::from_rows(&[".....", ".....", "OOOOO", ".....", "....."]);
        assert_eq!(check_win(&board, Pos::new(2, 0)), Some(Piece::Two));
        let line = winning_line(&board, Pos::new(2, 3)).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(2, 0));
        assert_eq!(line[4], Pos::new(2, 4));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::from_rows(&["XX.XX", ".....", ".....", ".....", "....."]);
        assert_eq!(check_win(&board, Pos::new(0, 2)), None);
        assert_eq!(winning_line(&board, Pos::new(0, 2)), None);
    }

    #[test]
    fn test_win_through_other_cell_not_reported() {
        // A finished line elsewhere is not seen from an unrelated piece
        let board = Board::from_rows(&["XXXX.", ".....", ".....", ".....", "....O"]);
        assert_eq!(check_win(&board, Pos::new(4, 4)), None);
    }

    #[test]
    fn test_sequential_placements_win_on_fourth() {
        let mut board = Board::new();
        for col in 0..3 {
            let pos = Pos::new(0, col);
            board.place(pos, Piece::One);
            assert_eq!(evaluate(&board, pos), None);
        }
        let pos = Pos::new(0, 3);
        board.place(pos, Piece::One);
        assert_eq!(evaluate(&board, pos), Some(Outcome::Win(Piece::One)));
    }

    #[test]
    fn test_full_board_without_four_is_draw() {
        let board = Board::from_rows(&["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"]);
        assert!(is_board_full(&board));
        for pos in Pos::all() {
            assert_eq!(check_win(&board, pos), None, "unexpected win at {pos}");
        }
        assert_eq!(evaluate(&board, Pos::new(4, 4)), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut board = Board::from_rows(&["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXXX."]);
        let pos = Pos::new(4, 4);
        board.place(pos, Piece::Two);
        assert!(is_board_full(&board));
        assert_eq!(evaluate(&board, Pos::new(4, 3)), Some(Outcome::Win(Piece::One)));
        assert_eq!(evaluate(&board, pos), Some(Outcome::Draw));
    }

    #[test]
    fn test_is_board_full_iff_no_empty_cells() {
        let mut board = Board::new();
        for (i, pos) in Pos::all().enumerate() {
            assert_eq!(is_board_full(&board), board.empty_cells().count() == 0);
            board.place(pos, if i % 3 == 0 { Piece::Two } else { Piece::One });
        }
        assert!(is_board_full(&board));
        assert_eq!(board.piece_count() as usize, TOTAL_CELLS);
    }

    /// Brute-force reference: scan every window of WIN_LENGTH cells that
    /// contains `pos` and check that all of them belong to the same player.
    fn brute_force_win(board: &Board, pos: Pos) -> Option<Piece> {
        let piece = board.get(pos);
        if piece == Piece::Empty {
            return None;
        }
        let n = BOARD_SIZE as i32;
        let len = WIN_LENGTH as i32;
        for &(dr, dc) in &DIRECTIONS {
            for start in 0..len {
                let r0 = pos.row as i32 - dr * start;
                let c0 = pos.col as i32 - dc * start;
                let all_same = (0..len).all(|k| {
                    let r = r0 + dr * k;
                    let c = c0 + dc * k;
                    r >= 0 && r < n && c >= 0 && c < n
                        && board.get(Pos::new(r as u8, c as u8)) == piece
                });
                if all_same {
                    return Some(piece);
                }
            }
        }
        None
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Arbitrary grid: each cell independently empty, player 1 or player 2
        fn arbitrary_board() -> impl Strategy<Value = Board> {
            prop::collection::vec(0u8..3, TOTAL_CELLS).prop_map(|cells| {
                let mut board = Board::new();
                for (idx, cell) in cells.into_iter().enumerate() {
                    let pos = Pos::from_index(idx);
                    match cell {
                        1 => board.place(pos, Piece::One),
                        2 => board.place(pos, Piece::Two),
                        _ => {}
                    }
                }
                board
            })
        }

        proptest! {
            #[test]
            fn prop_check_win_matches_brute_force(board in arbitrary_board(), idx in 0usize..TOTAL_CELLS) {
                let pos = Pos::from_index(idx);
                prop_assert_eq!(check_win(&board, pos), brute_force_win(&board, pos));
            }

            #[test]
            fn prop_winning_line_agrees_with_check_win(board in arbitrary_board(), idx in 0usize..TOTAL_CELLS) {
                let pos = Pos::from_index(idx);
                let line = winning_line(&board, pos);
                prop_assert_eq!(line.is_some(), check_win(&board, pos).is_some());
                if let Some(line) = line {
                    prop_assert!(line.contains(&pos));
                    prop_assert!(line.iter().all(|&p| board.get(p) == board.get(pos)));
                }
            }

            #[test]
            fn prop_board_full_iff_no_empty_cells(board in arbitrary_board()) {
                prop_assert_eq!(is_board_full(&board), board.empty_cells().next().is_none());
            }
        }
    }
}
