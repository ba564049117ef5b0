//! Layout helpers: cards, headings, separators, section labels.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Ui};

use crate::{sizing, theme};

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [
            egui::Pos2::new(rect.left(), y),
            egui::Pos2::new(rect.right(), y),
        ],
        Stroke::new(1.0, theme::BORDER),
    );
    ui.add_space(8.0);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(12.0).color(theme::TEXT_MUTED));
}

/// Draw a card heading.
pub fn heading(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(18.0).strong().color(theme::TEXT));
    ui.add_space(6.0);
}

/// Create a card frame.
///
/// Pass [`Color32::TRANSPARENT`] for cards that host content painted
/// beneath the UI.
pub fn card_frame(fill: Color32) -> Frame {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(sizing::CARD_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::same(16))
}
