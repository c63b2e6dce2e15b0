//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 0, 255); // Blue
pub const HOLE: Color32 = Color32::from_rgb(0, 0, 0);
pub const BACKGROUND: Color32 = Color32::from_rgb(0, 0, 0);

// Disc colors
pub const PLAYER1_DISC: Color32 = Color32::from_rgb(255, 0, 0); // Red
pub const PLAYER2_DISC: Color32 = Color32::from_rgb(255, 255, 0); // Yellow

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 255, 255);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
/// Disc radius as a fraction of the cell size
pub const DISC_RADIUS_RATIO: f32 = 0.45;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const WIN_LINE_WIDTH: f32 = 4.0;
