//! Progress bars, circular gauge and counter display.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, vec2};

use sketchdeck_core::CircularGauge;

use crate::theme;

/// Height of a progress bar track.
const TRACK_HEIGHT: f32 = 20.0;
/// Longest straight segment used when flattening a gauge arc.
const ARC_SEGMENT_LENGTH: f64 = 4.0;

/// Draw a labeled progress bar. `fraction` is clamped to `[0, 1]`.
pub fn progress_bar(ui: &mut Ui, label: &str, value_text: &str, fraction: f32, color: Color32) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(theme::TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value_text).color(theme::TEXT));
        });
    });

    let size = vec2(ui.available_width(), TRACK_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        let radius = CornerRadius::same((TRACK_HEIGHT / 2.0) as u8);
        ui.painter().rect_filled(rect, radius, theme::TRACK);

        let fraction = fraction.clamp(0.0, 1.0);
        if fraction > 0.0 {
            let fill = Rect::from_min_size(rect.min, vec2(rect.width() * fraction, rect.height()));
            ui.painter().rect_filled(fill, radius, color);
        }
    }
    ui.add_space(8.0);
}

/// Points along a circular arc, starting at `start` and sweeping clockwise
/// (screen coordinates) by `sweep` radians.
pub fn arc_points(
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    segments: usize,
) -> Vec<Pos2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let angle = start + sweep * i as f32 / segments as f32;
            Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Number of polyline segments used to approximate an arc of `length`.
pub fn arc_segments(length: f64) -> usize {
    (length / ARC_SEGMENT_LENGTH).ceil().max(1.0) as usize
}

/// Draw a ring gauge with the value and label underneath.
///
/// The arc starts at twelve o'clock and covers the gauge's fraction of the
/// ring, clockwise.
pub fn circular_gauge(ui: &mut Ui, gauge: &CircularGauge) {
    let radius = CircularGauge::RADIUS as f32;
    let stroke_width = CircularGauge::STROKE_WIDTH as f32;

    ui.vertical_centered(|ui| {
        let side = 2.0 * radius + stroke_width * 2.0;
        let (rect, _) = ui.allocate_exact_size(vec2(side, side), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            painter.circle_stroke(center, radius, Stroke::new(stroke_width, theme::TRACK));

            if gauge.fraction() > 0.0 {
                let points = arc_points(
                    center,
                    radius,
                    CircularGauge::START_ANGLE as f32,
                    gauge.sweep_angle() as f32,
                    arc_segments(gauge.arc_length()),
                );
                // Round caps
                for end in [points[0], points[points.len() - 1]] {
                    painter.circle_filled(end, stroke_width / 2.0, theme::ACCENT);
                }
                painter.add(Shape::line(points, Stroke::new(stroke_width, theme::ACCENT)));
            }
        }

        ui.add_space(8.0);
        let value = egui::RichText::new(gauge.value_text()).size(22.0).strong().color(theme::TEXT);
        ui.label(value);
        ui.label(egui::RichText::new(&gauge.label).color(theme::TEXT_MUTED));
    });
}

/// Large centered number.
pub fn counter_display(ui: &mut Ui, value: u64) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 72.0), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            value.to_string(),
            FontId::proportional(48.0),
            theme::TEXT,
        );
    }
}
