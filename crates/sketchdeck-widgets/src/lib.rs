//! Reusable egui widget components with a dark course-page styling.
//!
//! This crate provides the UI building blocks of the SketchDeck shell:
//!
//! - **Buttons**: text buttons, toggle buttons
//! - **Tabs**: the navigation tab bar
//! - **Gauges**: progress bars, circular gauge, counter display
//! - **Colors**: color conversion, swatches, swatch grids
//! - **Charts**: text overlay for chart layouts
//! - **Layout**: cards, section labels, separators

pub mod buttons;
pub mod charts;
pub mod colors;
pub mod gauges;
pub mod layout;
pub mod tabs;

pub use buttons::{TextButton, ToggleButton};
pub use charts::{chart_labels, format_tick};
pub use colors::{ColorSwatch, colors_match, from_color32, swatch_grid, to_color32};
pub use gauges::{arc_points, arc_segments, circular_gauge, counter_display, progress_bar};
pub use layout::{card_frame, heading, section_label, separator};
pub use tabs::TabBar;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Grid swatch size
    pub const SWATCH: f32 = 40.0;
    /// Large preview size
    pub const LARGE: f32 = 50.0;
    /// Standard button height
    pub const BUTTON_HEIGHT: f32 = 32.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 8;
    /// Card corner radius
    pub const CARD_RADIUS: u8 = 12;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Page background
    pub const PAGE_BG: Color32 = Color32::from_rgb(0x24, 0x24, 0x24);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(0x2e, 0x2e, 0x2e);
    /// Button background
    pub const BUTTON_BG: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
    /// Button hover background
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(0x30, 0x30, 0x38);
    /// Text color
    pub const TEXT: Color32 = Color32::from_rgb(222, 222, 222);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 150);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(70, 70, 70);
    /// Selection/active color
    pub const ACCENT: Color32 = Color32::from_rgb(0x64, 0x6c, 0xff);
    /// Destructive action color
    pub const DANGER: Color32 = Color32::from_rgb(0xff, 0x47, 0x57);
    /// Gauge and progress track
    pub const TRACK: Color32 = Color32::from_rgb(0x3a, 0x3a, 0x3a);
}
