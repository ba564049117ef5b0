//! Recording doubles for the host raster and chart library.

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::chart::{ChartBackend, ChartConfig, ChartError, ChartKind, ChartOptions};
use crate::color::rgba8;
use crate::surface::RasterSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect(Rect),
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
}

/// Raster that records every call instead of painting.
#[derive(Debug)]
pub struct RecordingRaster {
    pub size: Size,
    pub calls: Vec<DrawCall>,
    /// Colors of non-clear calls, in order.
    pub colors: Vec<[u8; 4]>,
}

impl RecordingRaster {
    pub fn new(size: Size) -> Self {
        Self { size, calls: Vec::new(), colors: Vec::new() }
    }
}

impl RasterSurface for RecordingRaster {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, _background: Color) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect(rect));
        self.colors.push(rgba8(color));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.calls.push(DrawCall::Circle { center, radius });
        self.colors.push(rgba8(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, _width: f64, color: Color) {
        self.calls.push(DrawCall::Line { from, to });
        self.colors.push(rgba8(color));
    }
}

#[derive(Debug)]
pub struct MockChart {
    pub id: usize,
    pub kind: ChartKind,
    pub values: Vec<f64>,
    pub redraws: usize,
}

/// Chart library double that counts lifecycle calls.
#[derive(Debug, Default)]
pub struct MockChartBackend {
    pub created: usize,
    pub destroyed: usize,
    pub updates: usize,
    /// Highest number of simultaneously live charts seen by `create`.
    pub max_live: usize,
    /// When set, `create` reports the target surface as not ready.
    pub unavailable: bool,
}

impl MockChartBackend {
    pub fn live(&self) -> usize {
        self.created - self.destroyed
    }
}

impl ChartBackend for MockChartBackend {
    type Instance = MockChart;

    fn create(
        &mut self,
        config: &ChartConfig,
        _options: &ChartOptions,
    ) -> Result<MockChart, ChartError> {
        if self.unavailable {
            return Err(ChartError::SurfaceNotReady);
        }
        self.created += 1;
        self.max_live = self.max_live.max(self.live());
        Ok(MockChart {
            id: self.created,
            kind: config.kind,
            values: config.series[0].values.clone(),
            redraws: 0,
        })
    }

    fn update(&mut self, instance: &mut MockChart, config: &ChartConfig) {
        self.updates += 1;
        instance.values = config.series[0].values.clone();
        instance.redraws += 1;
    }

    fn destroy(&mut self, _instance: MockChart) {
        self.destroyed += 1;
    }
}
