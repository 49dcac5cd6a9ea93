//! Reusable egui components for GridSlide boards.
//!
//! - **Board**: the draggable matrix panel inside a clipped viewport
//! - **Colors**: Tailwind-derived lane tints for matrix rows

pub mod board;
pub mod colors;

pub use board::{BoardState, DraggableBoard};
pub use colors::{LANE_COLORS, LaneColor, lane_color};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default cell width
    pub const CELL_W: f32 = 48.0;
    /// Default cell height
    pub const CELL_H: f32 = 36.0;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Viewport background
    pub const VIEWPORT_BG: Color32 = Color32::from_rgb(248, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::WHITE;
    /// Grid line color
    pub const GRID_LINE: Color32 = Color32::from_rgb(226, 232, 240);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(203, 213, 225);
    /// Active drag highlight (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
}
