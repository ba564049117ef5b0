//! Pointer input and device-to-surface coordinate translation.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Pointer event in raw (window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    /// Raw position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }
}

/// On-screen placement of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRegion {
    /// Top-left corner of the surface in window coordinates.
    pub origin: Point,
    /// Size of the surface.
    pub size: Size,
}

impl SurfaceRegion {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Translate a raw pointer position into surface-local coordinates.
    ///
    /// No clamping is applied: positions outside the region map to
    /// negative or out-of-range local coordinates.
    pub fn to_local(&self, raw: Point) -> Point {
        raw - self.origin.to_vec2()
    }

    /// Whether a raw position falls inside the region.
    pub fn contains(&self, raw: Point) -> bool {
        self.rect().contains(raw)
    }

    /// The region as a window-space rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}
