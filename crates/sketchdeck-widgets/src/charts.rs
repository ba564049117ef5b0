//! Text overlay for chart layouts.
//!
//! Chart shapes are painted beneath the UI; this draws the title, legend
//! labels and axis labels on top, at the positions the layout computed.

use egui::{Align2, FontId, Painter, Pos2, Vec2};
use sketchdeck_core::ChartLayout;

use crate::colors::to_color32;
use crate::theme;

/// Format an axis tick value: whole numbers without decimals.
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Draw the text of `layout`, whose coordinates are relative to `origin`.
pub fn chart_labels(painter: &Painter, origin: Pos2, layout: &ChartLayout) {
    let at = |x: f64, y: f64| origin + Vec2::new(x as f32, y as f32);

    painter.text(
        at(layout.title_anchor.x, layout.title_anchor.y),
        Align2::CENTER_CENTER,
        &layout.title,
        FontId::proportional(16.0),
        to_color32(layout.title_color),
    );

    for entry in &layout.legend {
        painter.text(
            at(entry.text_anchor.x, entry.text_anchor.y),
            Align2::LEFT_CENTER,
            &entry.label,
            FontId::proportional(12.0),
            theme::TEXT,
        );
    }

    if let Some(axis) = &layout.axis {
        let tick_color = to_color32(axis.tick_color);
        for tick in &axis.ticks {
            painter.text(
                at(layout.plot.x0 - 6.0, tick.y),
                Align2::RIGHT_CENTER,
                format_tick(tick.value),
                FontId::proportional(11.0),
                tick_color,
            );
        }
        for category in &axis.categories {
            painter.text(
                at(category.x, layout.plot.y1 + 4.0),
                Align2::CENTER_TOP,
                &category.label,
                FontId::proportional(11.0),
                tick_color,
            );
        }
    }
}
