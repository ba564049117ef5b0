//! Swatch-grid color picker.

use peniko::Color;

/// Swatches offered by the picker, in grid order.
pub const SWATCHES: [Color; 8] = [
    Color::from_rgba8(0x64, 0x6c, 0xff, 255),
    Color::from_rgba8(0xff, 0x47, 0x57, 255),
    Color::from_rgba8(0x2e, 0xd5, 0x73, 255),
    Color::from_rgba8(0xff, 0xa5, 0x02, 255),
    Color::from_rgba8(0x37, 0x42, 0xfa, 255),
    Color::from_rgba8(0xff, 0x63, 0x48, 255),
    Color::from_rgba8(0xff, 0x38, 0x38, 255),
    Color::from_rgba8(0xff, 0x9f, 0xf3, 255),
];

/// Selected color plus visibility of the swatch grid.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    selected: Color,
    grid_visible: bool,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self { selected: SWATCHES[0], grid_visible: false }
    }
}

impl ColorPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the swatch grid (clicking the preview).
    pub fn toggle(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    /// Pick a color and hide the grid.
    pub fn select(&mut self, color: Color) {
        self.selected = color;
        self.grid_visible = false;
    }

    pub fn selected(&self) -> Color {
        self.selected
    }

    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn swatches(&self) -> &'static [Color] {
        &SWATCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgba8, to_hex};

    #[test]
    fn test_defaults() {
        let picker = ColorPicker::new();
        assert_eq!(to_hex(picker.selected()), "#646cff");
        assert!(!picker.is_grid_visible());
        assert_eq!(picker.swatches().len(), 8);
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let mut picker = ColorPicker::new();
        picker.toggle();
        assert!(picker.is_grid_visible());
        picker.toggle();
        assert!(!picker.is_grid_visible());
    }

    #[test]
    fn test_select_sets_color_and_hides() {
        let mut picker = ColorPicker::new();
        picker.toggle();
        picker.select(SWATCHES[3]);
        assert_eq!(rgba8(picker.selected()), rgba8(SWATCHES[3]));
        assert_eq!(to_hex(picker.selected()), "#ffa502");
        assert!(!picker.is_grid_visible());
    }
}
