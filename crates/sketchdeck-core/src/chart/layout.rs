//! Chart geometry.
//!
//! Turns a [`ChartConfig`] into positioned marks inside a rectangle. The
//! result is renderer-agnostic: the scene renderer paints the marks and the
//! UI layer paints the text (title, legend labels, tick values).

use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Point, Rect};
use peniko::Color;

use super::config::{ChartConfig, ChartKind, ChartOptions, Series};

const PADDING: f64 = 8.0;
const TITLE_HEIGHT: f64 = 24.0;
const LEGEND_ROW_HEIGHT: f64 = 20.0;
const LEGEND_SLOT_WIDTH: f64 = 96.0;
const LEGEND_SWATCH: f64 = 12.0;
const AXIS_GUTTER: f64 = 36.0;
const CATEGORY_GUTTER: f64 = 20.0;
const TARGET_TICKS: f64 = 5.0;
/// Fraction of a category slot occupied by its bar group.
const BAR_GROUP_FILL: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub fill: Color,
    pub border: Color,
    pub swatch: Rect,
    /// Left-center anchor of the label text.
    pub text_anchor: Point,
}

#[derive(Debug, Clone, Copy)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub label: String,
    /// Center of the category slot.
    pub x: f64,
}

/// Cartesian scale geometry.
#[derive(Debug, Clone)]
pub struct Axis {
    pub max: f64,
    pub ticks: Vec<Tick>,
    pub categories: Vec<Category>,
    pub tick_color: Color,
    pub grid_color: Color,
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub rect: Rect,
    pub fill: Color,
    pub border: Color,
    pub border_width: f64,
}

#[derive(Debug, Clone)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub stroke: Color,
    pub marker: Color,
    pub width: f64,
}

/// Annular sector, angles in radians, clockwise on screen.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub fill: Color,
    pub border: Color,
    pub border_width: f64,
}

#[derive(Debug, Clone)]
pub enum Marks {
    Bars(Vec<Bar>),
    Lines(Vec<Polyline>),
    Wedges(Vec<Wedge>),
}

/// Positioned chart geometry.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub bounds: Rect,
    pub title: String,
    pub title_color: Color,
    /// Center of the title text.
    pub title_anchor: Point,
    pub legend: Vec<LegendEntry>,
    pub plot: Rect,
    pub axis: Option<Axis>,
    pub marks: Marks,
}

impl ChartLayout {
    /// Lay out `config` inside `bounds`.
    pub fn compute(config: &ChartConfig, options: &ChartOptions, bounds: Rect) -> Self {
        let inner = Rect::new(
            bounds.x0 + PADDING,
            bounds.y0 + PADDING,
            (bounds.x1 - PADDING).max(bounds.x0 + PADDING),
            (bounds.y1 - PADDING).max(bounds.y0 + PADDING),
        );
        let title_anchor = Point::new(inner.center().x, inner.y0 + TITLE_HEIGHT / 2.0);

        let legend_items = legend_items(config, options.scales.is_some());
        let (legend, rows) = layout_legend(legend_items, inner, inner.y0 + TITLE_HEIGHT);
        let top = (inner.y0 + TITLE_HEIGHT + rows as f64 * LEGEND_ROW_HEIGHT + 4.0).min(inner.y1);

        let (plot, axis, marks) = match options.scales {
            Some(scales) => {
                let plot = Rect::new(
                    (inner.x0 + AXIS_GUTTER).min(inner.x1),
                    top,
                    inner.x1,
                    (inner.y1 - CATEGORY_GUTTER).max(top),
                );
                let (max, step) = nice_scale(max_value(&config.series));
                let tick_count = (max / step).round() as usize;
                let ticks = (0..=tick_count)
                    .map(|i| {
                        let value = i as f64 * step;
                        Tick { value, y: value_to_y(value, max, plot) }
                    })
                    .collect();
                let categories = category_centers(config.labels.len(), plot)
                    .zip(&config.labels)
                    .map(|(x, label)| Category { label: label.clone(), x })
                    .collect();
                let axis = Axis {
                    max,
                    ticks,
                    categories,
                    tick_color: scales.tick_color,
                    grid_color: scales.grid_color,
                };
                let marks = if config.kind == ChartKind::Line {
                    Marks::Lines(line_marks(config, plot, max))
                } else {
                    Marks::Bars(bar_marks(config, plot, max))
                };
                (plot, Some(axis), marks)
            }
            None => {
                let plot = Rect::new(inner.x0, top, inner.x1, inner.y1.max(top));
                (plot, None, Marks::Wedges(wedge_marks(config, plot, options.cutout)))
            }
        };

        Self {
            bounds,
            title: options.title.clone(),
            title_color: options.title_color,
            title_anchor,
            legend,
            plot,
            axis,
            marks,
        }
    }
}

/// Round `max` up to a readable axis maximum. Returns `(axis_max, step)`.
pub fn nice_scale(max: f64) -> (f64, f64) {
    if max.is_nan() || max <= 0.0 {
        return (1.0, 0.2);
    }
    let raw = max / TARGET_TICKS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    ((max / step).ceil() * step, step)
}

fn max_value(series: &[Series]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max)
}

fn value_to_y(value: f64, max: f64, plot: Rect) -> f64 {
    plot.y1 - (value.max(0.0) / max) * plot.height()
}

fn category_centers(count: usize, plot: Rect) -> impl Iterator<Item = f64> {
    let slot = if count == 0 { 0.0 } else { plot.width() / count as f64 };
    (0..count).map(move |i| plot.x0 + slot * (i as f64 + 0.5))
}

fn legend_items(config: &ChartConfig, cartesian: bool) -> Vec<(String, Color, Color)> {
    if cartesian {
        config
            .series
            .iter()
            .map(|s| {
                let color = s.color_at(0);
                (s.name.clone(), color.fill, color.border)
            })
            .collect()
    } else {
        // Radial charts label categories, colored by the first series.
        let Some(series) = config.series.first() else {
            return Vec::new();
        };
        config
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = series.color_at(i);
                (label.clone(), color.fill, color.border)
            })
            .collect()
    }
}

fn layout_legend(
    items: Vec<(String, Color, Color)>,
    inner: Rect,
    top: f64,
) -> (Vec<LegendEntry>, usize) {
    if items.is_empty() {
        return (Vec::new(), 0);
    }
    let per_row = ((inner.width() / LEGEND_SLOT_WIDTH).floor() as usize).max(1);
    let rows = items.len().div_ceil(per_row);
    let total = items.len();

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(i, (label, fill, border))| {
            let row = i / per_row;
            let in_row = per_row.min(total - row * per_row);
            let row_start = inner.center().x - in_row as f64 * LEGEND_SLOT_WIDTH / 2.0;
            let x = row_start + (i % per_row) as f64 * LEGEND_SLOT_WIDTH;
            let y =
                top + row as f64 * LEGEND_ROW_HEIGHT + (LEGEND_ROW_HEIGHT - LEGEND_SWATCH) / 2.0;
            let swatch = Rect::new(x, y, x + LEGEND_SWATCH, y + LEGEND_SWATCH);
            LegendEntry {
                label,
                fill,
                border,
                swatch,
                text_anchor: Point::new(swatch.x1 + 4.0, swatch.center().y),
            }
        })
        .collect();
    (entries, rows)
}

fn bar_marks(config: &ChartConfig, plot: Rect, max: f64) -> Vec<Bar> {
    let count = config.labels.len();
    if count == 0 || config.series.is_empty() {
        return Vec::new();
    }
    let slot = plot.width() / count as f64;
    let group = slot * BAR_GROUP_FILL;
    let bar_width = group / config.series.len() as f64;

    let mut bars = Vec::with_capacity(count * config.series.len());
    for (s, series) in config.series.iter().enumerate() {
        for (i, (x, &value)) in category_centers(count, plot).zip(&series.values).enumerate() {
            let x0 = x - group / 2.0 + s as f64 * bar_width;
            let color = series.color_at(i);
            bars.push(Bar {
                rect: Rect::new(x0, value_to_y(value, max, plot), x0 + bar_width, plot.y1),
                fill: color.fill,
                border: color.border,
                border_width: series.border_width,
            });
        }
    }
    bars
}

fn line_marks(config: &ChartConfig, plot: Rect, max: f64) -> Vec<Polyline> {
    let count = config.labels.len();
    config
        .series
        .iter()
        .map(|series| {
            let color = series.color_at(0);
            Polyline {
                points: category_centers(count, plot)
                    .zip(&series.values)
                    .map(|(x, &value)| Point::new(x, value_to_y(value, max, plot)))
                    .collect(),
                stroke: color.border,
                marker: color.fill,
                width: series.border_width.max(1.0) * 2.0,
            }
        })
        .collect()
}

fn wedge_marks(config: &ChartConfig, plot: Rect, cutout: f64) -> Vec<Wedge> {
    let count = config.series.len();
    if count == 0 {
        return Vec::new();
    }
    let center = plot.center();
    let radius = plot.width().min(plot.height()) / 2.0;
    let inner_base = radius * cutout;
    // Multiple series nest as concentric rings, first series outermost.
    let band = (radius - inner_base) / count as f64;

    let mut wedges = Vec::new();
    for (s, series) in config.series.iter().enumerate() {
        let outer_radius = radius - s as f64 * band;
        let inner_radius = outer_radius - band;
        let total: f64 = series.values.iter().map(|v| v.max(0.0)).sum();
        if total <= 0.0 {
            continue;
        }
        let mut start_angle = -FRAC_PI_2;
        for (i, &value) in series.values.iter().enumerate().take(config.labels.len()) {
            let sweep_angle = TAU * value.max(0.0) / total;
            let color = series.color_at(i);
            wedges.push(Wedge {
                center,
                outer_radius,
                inner_radius,
                start_angle,
                sweep_angle,
                fill: color.fill,
                border: color.border,
                border_width: series.border_width,
            });
            start_angle += sweep_angle;
        }
    }
    wedges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(kind: ChartKind) -> ChartLayout {
        let config = ChartConfig::default().with_kind(kind);
        let bounds = Rect::new(0.0, 0.0, 480.0, 300.0);
        ChartLayout::compute(&config, &ChartOptions::for_kind(kind), bounds)
    }

    #[test]
    fn test_nice_scale() {
        assert_eq!(nice_scale(81.0), (100.0, 20.0));
        assert_eq!(nice_scale(100.0), (100.0, 20.0));
        assert_eq!(nice_scale(7.0), (8.0, 2.0));
        assert_eq!(nice_scale(0.0), (1.0, 0.2));
    }

    #[test]
    fn test_bar_layout() {
        let layout = layout(ChartKind::Bar);
        let axis = layout.axis.as_ref().unwrap();
        assert_eq!(axis.max, 100.0);
        assert_eq!(axis.ticks.len(), 6);
        assert!((axis.ticks[0].y - layout.plot.y1).abs() < 1e-9);
        assert!((axis.ticks[5].y - layout.plot.y0).abs() < 1e-9);
        assert_eq!(axis.categories.len(), 6);
        assert_eq!(axis.categories[0].label, "Janvier");

        let Marks::Bars(bars) = &layout.marks else {
            panic!("expected bars");
        };
        assert_eq!(bars.len(), 6);
        // 81 is the tallest value.
        let tallest = bars
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.rect.y0.total_cmp(&b.1.rect.y0))
            .map(|(i, _)| i);
        assert_eq!(tallest, Some(3));
        for bar in bars {
            assert!(bar.rect.x0 >= layout.plot.x0 && bar.rect.x1 <= layout.plot.x1);
            assert!((bar.rect.y1 - layout.plot.y1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_line_layout() {
        let layout = layout(ChartKind::Line);
        let Marks::Lines(lines) = &layout.marks else {
            panic!("expected lines");
        };
        assert_eq!(lines.len(), 1);
        let xs: Vec<f64> = lines[0].points.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 6);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_pie_wedges_cover_circle() {
        let layout = layout(ChartKind::Pie);
        assert!(layout.axis.is_none());
        let Marks::Wedges(wedges) = &layout.marks else {
            panic!("expected wedges");
        };
        assert_eq!(wedges.len(), 6);
        assert!((wedges[0].start_angle + FRAC_PI_2).abs() < 1e-12);
        let total: f64 = wedges.iter().map(|w| w.sweep_angle).sum();
        assert!((total - TAU).abs() < 1e-9);
        assert!((wedges[0].sweep_angle - TAU * 65.0 / 396.0).abs() < 1e-9);
        assert_eq!(wedges[0].inner_radius, 0.0);
    }

    #[test]
    fn test_doughnut_cutout() {
        let layout = layout(ChartKind::Doughnut);
        let Marks::Wedges(wedges) = &layout.marks else {
            panic!("expected wedges");
        };
        assert!((wedges[0].inner_radius - wedges[0].outer_radius * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_legend_entries() {
        assert_eq!(layout(ChartKind::Bar).legend.len(), 1);
        assert_eq!(layout(ChartKind::Bar).legend[0].label, "Ventes 2024");
        let pie = layout(ChartKind::Pie);
        assert_eq!(pie.legend.len(), 6);
        assert_eq!(pie.legend[1].label, "Février");
    }

    #[test]
    fn test_all_zero_pie_has_no_wedges() {
        let mut config = ChartConfig::default().with_kind(ChartKind::Pie);
        config.series[0].values = vec![0.0; 6];
        let layout = ChartLayout::compute(
            &config,
            &ChartOptions::for_kind(ChartKind::Pie),
            Rect::new(0.0, 0.0, 300.0, 300.0),
        );
        assert!(matches!(&layout.marks, Marks::Wedges(w) if w.is_empty()));
    }
}
