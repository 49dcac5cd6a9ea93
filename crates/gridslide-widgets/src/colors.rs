//! Tailwind-derived lane tints for matrix rows.

use egui::Color32;

/// A lane tint: fill for the cell body, edge for its outline.
#[derive(Clone, Copy)]
pub struct LaneColor {
    /// Color name (e.g., "Blue", "Amber")
    pub name: &'static str,
    pub fill: Color32,
    pub edge: Color32,
}

impl LaneColor {
    /// Create a new LaneColor from RGB tuples.
    pub const fn new(name: &'static str, fill: (u8, u8, u8), edge: (u8, u8, u8)) -> Self {
        Self {
            name,
            fill: Color32::from_rgb(fill.0, fill.1, fill.2),
            edge: Color32::from_rgb(edge.0, edge.1, edge.2),
        }
    }
}

// Tailwind CSS hues, 200-level fills with 400-level edges
// https://tailwindcss.com/docs/colors
pub const LANE_COLORS: &[LaneColor] = &[
    LaneColor::new("Blue", (191, 219, 254), (96, 165, 250)),
    LaneColor::new("Amber", (253, 230, 138), (251, 191, 36)),
    LaneColor::new("Emerald", (167, 243, 208), (52, 211, 153)),
    LaneColor::new("Rose", (254, 205, 211), (251, 113, 133)),
    LaneColor::new("Slate", (226, 232, 240), (148, 163, 184)),
];

/// Tint for a lane index, cycling through the palette.
pub fn lane_color(index: usize) -> LaneColor {
    LANE_COLORS[index % LANE_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_color_cycles() {
        assert_eq!(lane_color(0).name, lane_color(LANE_COLORS.len()).name);
        assert_eq!(lane_color(2).name, "Emerald");
    }
}
