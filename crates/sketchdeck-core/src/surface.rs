//! Free-hand shape-stamping drawing surface.
//!
//! A [`DrawingSurface`] turns pointer samples into shape stamps on a host
//! raster. Every stamp in the log corresponds to exactly one draw call
//! already issued on the raster; [`DrawingSurface::clear`] resets both.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::input::{PointerEvent, SurfaceRegion};

/// Radius of a circle stamp.
pub const CIRCLE_RADIUS: f64 = 20.0;
/// Side length of a square stamp.
pub const SQUARE_SIDE: f64 = 30.0;
/// Stroke width of line segments.
pub const LINE_WIDTH: f64 = 2.0;
/// Default surface size.
pub const DEFAULT_SIZE: Size = Size::new(600.0, 400.0);
/// Default surface background (`#1a1a1a`).
pub const DEFAULT_BACKGROUND: Color = Color::from_rgba8(0x1a, 0x1a, 0x1a, 255);
/// Default stamp color (`#646cff`).
pub const DEFAULT_STAMP_COLOR: Color = Color::from_rgba8(0x64, 0x6c, 0xff, 255);

/// Host raster the drawing surface paints on.
///
/// Coordinates are relative to the raster's top-left origin.
pub trait RasterSurface {
    /// Size of the raster in pixels.
    fn size(&self) -> Size;

    /// Reset every pixel to the background color.
    fn clear(&mut self, background: Color);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a disc.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color);
}

/// Stamping tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Circle,
    Rectangle,
    Line,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 3] = [Tool::Circle, Tool::Rectangle, Tool::Line];

    /// Lowercase name used in stamp labels.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Circle => "circle",
            Tool::Rectangle => "rectangle",
            Tool::Line => "line",
        }
    }

    /// Display label for the toolbar.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Circle => "Cercle",
            Tool::Rectangle => "Rectangle",
            Tool::Line => "Ligne",
        }
    }
}

/// One recorded stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStamp {
    /// Surface-local position of the stamp.
    pub position: Point,
    /// Tool name and 1-based ordinal, e.g. `"circle 3"`.
    pub label: String,
}

/// Drawing surface state.
#[derive(Debug)]
pub struct DrawingSurface<R: RasterSurface> {
    raster: Option<R>,
    stamps: Vec<ShapeStamp>,
    tool: Tool,
    color: Color,
    background: Color,
    size: Size,
    drawing: bool,
}

impl<R: RasterSurface> Default for DrawingSurface<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RasterSurface> DrawingSurface<R> {
    /// Create a surface with no raster attached.
    pub fn new() -> Self {
        Self {
            raster: None,
            stamps: Vec::new(),
            tool: Tool::default(),
            color: DEFAULT_STAMP_COLOR,
            background: DEFAULT_BACKGROUND,
            size: DEFAULT_SIZE,
            drawing: false,
        }
    }

    /// Set the surface size used when the host creates a raster.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the initial stamp color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Attach a raster and fill it with the background.
    ///
    /// Any previously attached raster is returned. The stamp log is emptied
    /// so it stays consistent with the fresh pixels.
    pub fn attach(&mut self, mut raster: R) -> Option<R> {
        raster.clear(self.background);
        self.stamps.clear();
        log::debug!("Drawing surface attached ({}x{})", raster.size().width, raster.size().height);
        self.raster.replace(raster)
    }

    /// Detach and return the raster.
    pub fn detach(&mut self) -> Option<R> {
        self.drawing = false;
        self.raster.take()
    }

    /// Whether a raster is attached.
    pub fn is_ready(&self) -> bool {
        self.raster.is_some()
    }

    /// The attached raster, if any.
    pub fn raster(&self) -> Option<&R> {
        self.raster.as_ref()
    }

    /// Start a stroke and stamp at `point`.
    pub fn begin_stroke(&mut self, point: Point) {
        self.drawing = true;
        self.stamp(point);
    }

    /// Stamp at `point` if a stroke is in progress.
    pub fn continue_stroke(&mut self, point: Point) {
        if self.drawing {
            self.stamp(point);
        }
    }

    /// End the current stroke.
    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Dispatch a raw pointer event for a surface placed at `region`.
    ///
    /// Presses only start a stroke inside the region; moves and releases are
    /// honored anywhere so a stroke can leave the surface.
    pub fn handle_pointer(&mut self, event: PointerEvent, region: &SurfaceRegion) {
        let position = event.position();
        match event {
            PointerEvent::Down { .. } if region.contains(position) => {
                self.begin_stroke(region.to_local(position));
            }
            PointerEvent::Down { .. } => {}
            PointerEvent::Move { .. } => self.continue_stroke(region.to_local(position)),
            PointerEvent::Up { .. } => self.end_stroke(),
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Reset the raster to the background and empty the stamp log.
    pub fn clear(&mut self) {
        if let Some(raster) = self.raster.as_mut() {
            raster.clear(self.background);
        }
        self.stamps.clear();
        log::debug!("Drawing surface cleared");
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Stamps in drawing order.
    pub fn stamps(&self) -> &[ShapeStamp] {
        &self.stamps
    }

    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }

    fn stamp(&mut self, point: Point) {
        // Not ready yet: nothing is drawn, so nothing is logged.
        let Some(raster) = self.raster.as_mut() else {
            return;
        };

        match self.tool {
            Tool::Circle => raster.fill_circle(point, CIRCLE_RADIUS, self.color),
            Tool::Rectangle => raster.fill_rect(
                Rect::from_center_size(point, Size::new(SQUARE_SIDE, SQUARE_SIDE)),
                self.color,
            ),
            Tool::Line => {
                // Connects to the previous stamp whatever tool produced it.
                if let Some(previous) = self.stamps.last() {
                    raster.stroke_line(previous.position, point, LINE_WIDTH, self.color);
                }
            }
        }

        let label = format!("{} {}", self.tool.name(), self.stamps.len() + 1);
        self.stamps.push(ShapeStamp { position: point, label });
    }
}
