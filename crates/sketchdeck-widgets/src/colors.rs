//! Color components: conversion, swatches, swatch grids.

use egui::{Color32, CornerRadius, CursorIcon, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2};

use crate::sizing;

/// Convert a peniko color to an egui color.
pub fn to_color32(color: peniko::Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert an egui color back to a peniko color.
pub fn from_color32(color: Color32) -> peniko::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    peniko::Color::from_rgba8(r, g, b, a)
}

/// Check if two colors match (for selection highlighting).
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// A clickable rounded color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: vec2(sizing::SWATCH, sizing::SWATCH),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the swatch size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, self.color);

            let stroke = if self.selected {
                Stroke::new(3.0, Color32::WHITE)
            } else {
                Stroke::new(1.0, Color32::from_white_alpha(77))
            };
            ui.painter().rect_stroke(rect, radius, stroke, StrokeKind::Inside);
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Grid of swatches, `columns` per row. Returns the index of the clicked swatch.
pub fn swatch_grid(
    ui: &mut Ui,
    colors: &[Color32],
    labels: &[String],
    selected: Color32,
    columns: usize,
) -> Option<usize> {
    let mut clicked = None;
    let columns = columns.max(1);
    ui.vertical(|ui| {
        for (row, chunk) in colors.chunks(columns).enumerate() {
            ui.horizontal(|ui| {
                for (col, color) in chunk.iter().enumerate() {
                    let index = row * columns + col;
                    let tooltip = labels.get(index).map(String::as_str).unwrap_or("");
                    let (hit, _) = ColorSwatch::new(*color, tooltip)
                        .selected(colors_match(*color, selected))
                        .show(ui);
                    if hit {
                        clicked = Some(index);
                    }
                }
            });
        }
    });
    clicked
}
