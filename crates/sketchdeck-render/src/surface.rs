//! Drawing surface raster backed by a retained Vello scene.

use kurbo::{Affine, Circle, Line, Point, Rect, Size, Stroke};
use peniko::{Color, Fill};
use sketchdeck_core::RasterSurface;
use vello::Scene;

/// Raster whose pixels are the accumulated draw commands of a scene.
///
/// Coordinates are surface-local; the frame composer translates the scene
/// into place.
pub struct SceneSurface {
    scene: Scene,
    size: Size,
    draw_calls: usize,
}

impl SceneSurface {
    pub fn new(size: Size) -> Self {
        Self {
            scene: Scene::new(),
            size,
            draw_calls: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Draw calls since the last clear.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }
}

impl RasterSurface for SceneSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, background: Color) {
        self.scene.reset();
        self.draw_calls = 0;
        let rect = Rect::from_origin_size(Point::ZERO, self.size);
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, background, None, &rect);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &rect);
        self.draw_calls += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let circle = Circle::new(center, radius);
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &circle);
        self.draw_calls += 1;
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        let line = Line::new(from, to);
        self.scene.stroke(&Stroke::new(width), Affine::IDENTITY, color, None, &line);
        self.draw_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchdeck_core::{DrawingSurface, Tool};

    #[test]
    fn test_new_surface_is_empty() {
        let surface = SceneSurface::new(Size::new(600.0, 400.0));
        assert!(surface.scene().encoding().is_empty());
        assert_eq!(surface.draw_calls(), 0);
    }

    #[test]
    fn test_clear_paints_background_only() {
        let mut surface = SceneSurface::new(Size::new(600.0, 400.0));
        surface.fill_circle(Point::new(10.0, 10.0), 20.0, Color::WHITE);
        surface.clear(Color::BLACK);
        assert!(!surface.scene().encoding().is_empty());
        assert_eq!(surface.draw_calls(), 0);
    }

    #[test]
    fn test_stamps_become_draw_calls() {
        let mut drawing: DrawingSurface<SceneSurface> = DrawingSurface::new();
        drawing.attach(SceneSurface::new(drawing.size()));

        drawing.begin_stroke(Point::new(50.0, 50.0));
        drawing.continue_stroke(Point::new(60.0, 50.0));
        drawing.set_tool(Tool::Line);
        drawing.continue_stroke(Point::new(70.0, 80.0));
        drawing.end_stroke();

        let raster = drawing.raster().unwrap();
        assert_eq!(raster.draw_calls(), drawing.stamp_count());

        drawing.clear();
        assert_eq!(drawing.raster().unwrap().draw_calls(), 0);
    }
}
