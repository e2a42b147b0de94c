//! Board rendering for the GUI

use crate::setup::PlayerLabels;
use crate::{Board, Piece, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        players: &PlayerLabels,
        current_turn: Piece,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(100.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        let hovered = if accept_input {
            response
                .hover_pos()
                .and_then(|p| self.screen_to_board(p))
                .filter(|&pos| board.is_empty(pos))
        } else {
            None
        };

        // Draw cells and placed pieces
        for pos in Pos::all() {
            self.draw_cell(&painter, pos, hovered == Some(pos));
            match board.get(pos) {
                Piece::Empty => {}
                piece => self.draw_piece(&painter, pos, piece_color(players.get(piece).color)),
            }
        }

        // Draw hover preview
        if let Some(pos) = hovered {
            let radius = self.cell_size * PIECE_RADIUS_RATIO;
            let color = preview_color(players.get(current_turn).color);
            painter.circle_filled(self.cell_center(pos), radius, color);
        }

        // Draw last move marker
        if let Some(pos) = last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        // Draw winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Check for click
        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw one square cell
    fn draw_cell(&self, painter: &Painter, pos: Pos, hovered: bool) {
        let rect = self.cell_rect(pos).shrink(CELL_GAP / 2.0);
        let fill = if hovered { CELL_HOVER } else { CELL_BG };
        painter.rect_filled(rect, CornerRadius::same(6), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(6),
            Stroke::new(1.0, CELL_BORDER),
            egui::StrokeKind::Inside,
        );
    }

    /// Draw a single piece with a soft shadow
    fn draw_piece(&self, painter: &Painter, pos: Pos, color: egui::Color32) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        // Main piece
        painter.circle_filled(center, radius, color);
        painter.circle_stroke(center, radius * 0.8, Stroke::new(radius * 0.08, color.gamma_multiply(0.7)));
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }

        // Draw circles around winning pieces
        for pos in line {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.cell_center(*pos), radius, stroke);
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 50.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(282.0)),
        }
    }

    #[test]
    fn test_screen_board_roundtrip() {
        let view = view();
        for pos in Pos::all() {
            assert_eq!(view.screen_to_board(view.cell_center(pos)), Some(pos));
        }
    }

    #[test]
    fn test_margin_is_off_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(12.0, 22.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(290.0, 290.0)), None);
    }
}
