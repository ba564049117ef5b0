//! Navigation tab bar.

use egui::Ui;

use crate::buttons::ToggleButton;

/// Row of toggle buttons, one per tab, wrapping onto new lines as needed.
pub struct TabBar<'a, T: Copy + PartialEq> {
    tabs: &'a [(T, &'a str)],
    active: T,
}

impl<'a, T: Copy + PartialEq> TabBar<'a, T> {
    pub fn new(tabs: &'a [(T, &'a str)], active: T) -> Self {
        Self { tabs, active }
    }

    /// Show the tabs and return the clicked one, if any.
    pub fn show(self, ui: &mut Ui) -> Option<T> {
        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            for (value, label) in self.tabs {
                if ToggleButton::new(label, *value == self.active).show(ui) {
                    clicked = Some(*value);
                }
            }
        });
        clicked
    }
}
