//! Theme constants for the four-in-a-row GUI

use egui::Color32;

use crate::setup::PieceColor;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(44, 62, 80);
pub const CELL_BG: Color32 = Color32::from_rgb(236, 240, 241);
pub const CELL_HOVER: Color32 = Color32::from_rgb(210, 218, 222);
pub const CELL_BORDER: Color32 = Color32::from_rgb(30, 42, 54);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 250);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 215, 0);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_TURN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 6.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const CITY_BUTTON_SIZE: [f32; 2] = [130.0, 36.0];

/// Screen colour for a city's piece colour
pub fn piece_color(color: PieceColor) -> Color32 {
    match color {
        PieceColor::Green => Color32::from_rgb(39, 174, 96),
        PieceColor::Red => Color32::from_rgb(192, 57, 43),
        PieceColor::Yellow => Color32::from_rgb(241, 196, 15),
        PieceColor::Blue => Color32::from_rgb(41, 128, 185),
        PieceColor::Orange => Color32::from_rgb(230, 126, 34),
        PieceColor::Purple => Color32::from_rgb(142, 68, 173),
        PieceColor::Cyan => Color32::from_rgb(26, 188, 156),
    }
}

/// Translucent version of a piece colour for hover previews
pub fn preview_color(color: PieceColor) -> Color32 {
    piece_color(color).gamma_multiply(0.35)
}
