//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(139, 69, 19); // Saddle brown
pub const STAR_POINT: Color32 = Color32::from_rgb(139, 69, 19);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(10, 10, 12);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(102, 102, 102);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(204, 204, 204);
pub const WHITE_STONE_OUTLINE: Color32 = Color32::from_rgb(136, 136, 136);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const HINT_RING: Color32 = Color32::from_rgb(255, 0, 0);

pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn pause_veil() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 160)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 3.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const HINT_RING_WIDTH: f32 = 2.0;

// Star point positions (0-indexed): every pairing of 3, 7 and 11
pub const STAR_POINTS: [(u8, u8); 9] = [
    (3, 3), (3, 7), (3, 11),
    (7, 3), (7, 7), (7, 11),
    (11, 3), (11, 7), (11, 11),
];
