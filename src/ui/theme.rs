//! Colors and sizes for the Gomoku GUI

use egui::Color32;

// Board: light wood
pub const BOARD_BG: Color32 = Color32::from_rgb(220, 179, 120);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 48, 24);
pub const STAR_POINT: Color32 = Color32::from_rgb(55, 38, 20);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(22, 22, 26);
pub const BLACK_STONE_SHINE: Color32 = Color32::from_rgb(75, 75, 84);
pub const WHITE_STONE: Color32 = Color32::from_rgb(248, 248, 250);
pub const WHITE_STONE_RIM: Color32 = Color32::from_rgb(185, 185, 192);
pub const STONE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 50);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(225, 55, 55);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(60, 215, 80);
pub const HOVER_BLACK: Color32 = Color32::from_rgba_premultiplied(16, 16, 16, 80);
pub const HOVER_WHITE: Color32 = Color32::from_rgba_premultiplied(94, 94, 94, 80);
pub const HOVER_BLOCKED: Color32 = Color32::from_rgba_premultiplied(100, 20, 20, 100);

// Side panel
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const DEBUG_CARD_BG: Color32 = Color32::from_rgb(30, 33, 38);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const STONE_RADIUS_RATIO: f32 = 0.44;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Hoshi on a 15x15 board (row, col)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];
