//! Declarative chart configuration.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Chart kinds understood by the chart library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] =
        [ChartKind::Bar, ChartKind::Line, ChartKind::Pie, ChartKind::Doughnut];

    /// Library-level name, as used in the chart title.
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        }
    }

    /// Display label for the kind selector.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Barres",
            ChartKind::Line => "Ligne",
            ChartKind::Pie => "Camembert",
            ChartKind::Doughnut => "Donut",
        }
    }

    /// Whether the kind is drawn against x/y scales.
    pub fn is_cartesian(self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::Line)
    }
}

/// Fill and border color for one category of a series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesColor {
    pub fill: Color,
    pub border: Color,
}

/// One numeric data series.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// Per-category colors; categories past the end reuse the palette cyclically.
    pub colors: Vec<SeriesColor>,
    pub border_width: f64,
}

impl Series {
    /// Color for the category at `index`.
    pub fn color_at(&self, index: usize) -> SeriesColor {
        if self.colors.is_empty() {
            return SeriesColor { fill: Color::WHITE, border: Color::WHITE };
        }
        self.colors[index % self.colors.len()]
    }
}

/// Full chart configuration.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// Base palette of the default dataset.
const PALETTE: [(u8, u8, u8); 6] = [
    (255, 99, 132),
    (54, 162, 235),
    (255, 206, 86),
    (75, 192, 192),
    (153, 102, 255),
    (255, 159, 64),
];

impl Default for ChartConfig {
    /// Monthly sales dataset.
    fn default() -> Self {
        let colors = PALETTE
            .iter()
            .map(|&(r, g, b)| SeriesColor {
                fill: Color::from_rgba8(r, g, b, 51),
                border: Color::from_rgba8(r, g, b, 255),
            })
            .collect();

        Self {
            kind: ChartKind::Bar,
            labels: ["Janvier", "Février", "Mars", "Avril", "Mai", "Juin"]
                .into_iter()
                .map(String::from)
                .collect(),
            series: vec![Series {
                name: "Ventes 2024".to_string(),
                values: vec![65.0, 59.0, 80.0, 81.0, 56.0, 55.0],
                colors,
                border_width: 1.0,
            }],
        }
    }
}

impl ChartConfig {
    /// Same data with another kind.
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Cartesian scale styling.
#[derive(Debug, Clone, Copy)]
pub struct ScaleOptions {
    pub begin_at_zero: bool,
    pub tick_color: Color,
    pub grid_color: Color,
}

/// Presentation options derived from the chart kind.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub title_color: Color,
    /// Present only for cartesian kinds.
    pub scales: Option<ScaleOptions>,
    /// Inner radius of radial kinds as a fraction of the outer radius.
    pub cutout: f64,
}

impl ChartOptions {
    pub fn for_kind(kind: ChartKind) -> Self {
        let scales = kind.is_cartesian().then(|| ScaleOptions {
            begin_at_zero: true,
            tick_color: Color::WHITE,
            grid_color: Color::from_rgba8(255, 255, 255, 26),
        });
        Self {
            title: format!("Graphique {}", kind.name()),
            title_color: Color::WHITE,
            scales,
            cutout: if kind == ChartKind::Doughnut { 0.5 } else { 0.0 },
        }
    }
}
