//! Chart backend painting chart layouts into Vello scenes.
//!
//! Text (title, legend labels, tick values, category names) is left to the
//! UI layer, which reads it from the instance's [`ChartLayout`].

use kurbo::{Affine, BezPath, Circle, CircleSegment, Line, Point, Rect, Size, Stroke};
use peniko::Fill;
use sketchdeck_core::chart::layout::{Axis, Marks};
use sketchdeck_core::{ChartBackend, ChartConfig, ChartError, ChartKind, ChartLayout, ChartOptions};
use vello::Scene;

/// Radius of the point markers on line charts.
const MARKER_RADIUS: f64 = 3.0;

/// A live chart: its layout and the scene painted from it.
pub struct VelloChart {
    kind: ChartKind,
    options: ChartOptions,
    layout: ChartLayout,
    scene: Scene,
}

impl VelloChart {
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Chart scene in region-local coordinates.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn paint(&mut self, config: &ChartConfig, size: Size) {
        let bounds = Rect::from_origin_size(Point::ZERO, size);
        self.layout = ChartLayout::compute(config, &self.options, bounds);
        self.scene.reset();
        paint_layout(&mut self.scene, &self.layout);
    }

    fn new(config: &ChartConfig, options: &ChartOptions, size: Size) -> Self {
        let bounds = Rect::from_origin_size(Point::ZERO, size);
        let layout = ChartLayout::compute(config, options, bounds);
        let mut scene = Scene::new();
        paint_layout(&mut scene, &layout);
        Self {
            kind: config.kind,
            options: options.clone(),
            layout,
            scene,
        }
    }
}

/// Chart backend bound to one on-screen region.
#[derive(Debug, Default)]
pub struct VelloChartBackend {
    size: Size,
    live: usize,
}

impl VelloChartBackend {
    pub fn new(size: Size) -> Self {
        Self { size, live: 0 }
    }

    /// Resize the target region. Live charts pick the size up on their next redraw.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Instances created and not yet destroyed.
    pub fn live(&self) -> usize {
        self.live
    }
}

impl ChartBackend for VelloChartBackend {
    type Instance = VelloChart;

    fn create(
        &mut self,
        config: &ChartConfig,
        options: &ChartOptions,
    ) -> Result<VelloChart, ChartError> {
        if self.size.is_zero_area() {
            return Err(ChartError::SurfaceNotReady);
        }
        let chart = VelloChart::new(config, options, self.size);
        self.live += 1;
        if self.live > 1 {
            log::warn!("{} chart instances alive on one surface", self.live);
        }
        Ok(chart)
    }

    fn update(&mut self, instance: &mut VelloChart, config: &ChartConfig) {
        instance.paint(config, self.size);
    }

    fn destroy(&mut self, instance: VelloChart) {
        self.live = self.live.saturating_sub(1);
        drop(instance);
    }
}

fn paint_layout(scene: &mut Scene, layout: &ChartLayout) {
    if let Some(axis) = &layout.axis {
        paint_grid(scene, axis, layout.plot);
    }

    match &layout.marks {
        Marks::Bars(bars) => {
            for bar in bars {
                scene.fill(Fill::NonZero, Affine::IDENTITY, bar.fill, None, &bar.rect);
                if bar.border_width > 0.0 {
                    let stroke = Stroke::new(bar.border_width);
                    scene.stroke(&stroke, Affine::IDENTITY, bar.border, None, &bar.rect);
                }
            }
        }
        Marks::Lines(lines) => {
            for line in lines {
                let mut path = BezPath::new();
                for (i, point) in line.points.iter().enumerate() {
                    if i == 0 {
                        path.move_to(*point);
                    } else {
                        path.line_to(*point);
                    }
                }
                scene.stroke(&Stroke::new(line.width), Affine::IDENTITY, line.stroke, None, &path);
                for point in &line.points {
                    let marker = Circle::new(*point, MARKER_RADIUS);
                    scene.fill(Fill::NonZero, Affine::IDENTITY, line.marker, None, &marker);
                    scene.stroke(&Stroke::new(1.0), Affine::IDENTITY, line.stroke, None, &marker);
                }
            }
        }
        Marks::Wedges(wedges) => {
            for wedge in wedges {
                let segment = CircleSegment::new(
                    wedge.center,
                    wedge.outer_radius,
                    wedge.inner_radius,
                    wedge.start_angle,
                    wedge.sweep_angle,
                );
                scene.fill(Fill::NonZero, Affine::IDENTITY, wedge.fill, None, &segment);
                if wedge.border_width > 0.0 {
                    let stroke = Stroke::new(wedge.border_width);
                    scene.stroke(&stroke, Affine::IDENTITY, wedge.border, None, &segment);
                }
            }
        }
    }

    for entry in &layout.legend {
        scene.fill(Fill::NonZero, Affine::IDENTITY, entry.fill, None, &entry.swatch);
        scene.stroke(&Stroke::new(1.0), Affine::IDENTITY, entry.border, None, &entry.swatch);
    }
}

/// Horizontal grid line per tick, plus the y axis.
fn paint_grid(scene: &mut Scene, axis: &Axis, plot: Rect) {
    let stroke = Stroke::new(1.0);
    for tick in &axis.ticks {
        let line = Line::new((plot.x0, tick.y), (plot.x1, tick.y));
        scene.stroke(&stroke, Affine::IDENTITY, axis.grid_color, None, &line);
    }
    let left = Line::new((plot.x0, plot.y0), (plot.x0, plot.y1));
    scene.stroke(&stroke, Affine::IDENTITY, axis.grid_color, None, &left);
}
