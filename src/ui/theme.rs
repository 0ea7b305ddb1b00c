//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const CELL_BG: Color32 = Color32::from_rgb(55, 57, 62);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 92, 98);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(90, 170, 255);
pub const O_MARK: Color32 = Color32::from_rgb(255, 150, 80);

// Winning cells
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 160, 70);

pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 60)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_SIZE_RATIO: f32 = 0.6;

/// Color a mark is drawn in
pub fn mark_color(mark: crate::Mark) -> Color32 {
    match mark {
        crate::Mark::X => X_MARK,
        crate::Mark::O => O_MARK,
        crate::Mark::Empty => TEXT_MUTED,
    }
}
