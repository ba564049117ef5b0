//! Window frame composition.

use kurbo::{Affine, Rect, Size};
use peniko::{Color, Fill};
use vello::Scene;

/// A region-local scene placed at `region` (in logical pixels).
#[derive(Clone, Copy)]
pub struct FrameLayer<'a> {
    pub scene: &'a Scene,
    pub region: Rect,
}

/// Everything painted beneath the UI in one frame.
#[derive(Clone, Copy)]
pub struct FrameLayers<'a> {
    pub viewport: Size,
    pub scale: f64,
    pub page_background: Color,
    /// Drawing surface. Anything drawn outside its region is hidden.
    pub surface: Option<FrameLayer<'a>>,
    pub chart: Option<FrameLayer<'a>>,
}

/// Rebuild `scene` from `layers`.
pub fn compose_frame(scene: &mut Scene, layers: &FrameLayers<'_>) {
    scene.reset();
    let scale = Affine::scale(layers.scale);
    let viewport = Rect::from_origin_size((0.0, 0.0), layers.viewport);

    scene.fill(Fill::NonZero, scale, layers.page_background, None, &viewport);

    if let Some(surface) = layers.surface {
        let transform = scale * Affine::translate(surface.region.origin().to_vec2());
        scene.append(surface.scene, Some(transform));
        for mask in mask_rects(viewport, surface.region) {
            scene.fill(Fill::NonZero, scale, layers.page_background, None, &mask);
        }
    }

    if let Some(chart) = layers.chart {
        let transform = scale * Affine::translate(chart.region.origin().to_vec2());
        scene.append(chart.scene, Some(transform));
    }
}

/// Four rects covering `outer` minus `hole`: above, below, left and right.
///
/// Empty rects are dropped. A hole outside `outer` leaves `outer` fully covered.
pub fn mask_rects(outer: Rect, hole: Rect) -> Vec<Rect> {
    let hole = hole.intersect(outer);
    if hole.is_zero_area() {
        return vec![outer];
    }
    [
        Rect::new(outer.x0, outer.y0, outer.x1, hole.y0),
        Rect::new(outer.x0, hole.y1, outer.x1, outer.y1),
        Rect::new(outer.x0, hole.y0, hole.x0, hole.y1),
        Rect::new(hole.x1, hole.y0, outer.x1, hole.y1),
    ]
    .into_iter()
    .filter(|r| !r.is_zero_area())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn area(rects: &[Rect]) -> f64 {
        rects.iter().map(|r| r.area()).sum()
    }

    #[test]
    fn test_masks_surround_hole() {
        let outer = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let hole = Rect::new(100.0, 200.0, 700.0, 600.0);
        let masks = mask_rects(outer, hole);

        assert_eq!(masks.len(), 4);
        assert!((area(&masks) - (outer.area() - hole.area())).abs() < 1e-9);
        for mask in &masks {
            assert!(mask.intersect(hole).is_zero_area());
        }
        // A stamp spilling past the hole edge lands under a mask.
        let spill = Point::new(hole.x1 + 5.0, hole.center().y);
        assert!(masks.iter().any(|m| m.contains(spill)));
    }

    #[test]
    fn test_hole_touching_edges() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let masks = mask_rects(outer, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(masks, vec![Rect::new(0.0, 50.0, 100.0, 100.0)]);
    }

    #[test]
    fn test_hole_outside_covers_everything() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let masks = mask_rects(outer, Rect::new(200.0, 200.0, 300.0, 300.0));
        assert_eq!(masks, vec![outer]);
    }

    fn unit_layer() -> Scene {
        let mut layer = Scene::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        layer.fill(Fill::NonZero, Affine::IDENTITY, Color::WHITE, None, &rect);
        layer
    }

    fn layers<'a>(
        surface: Option<FrameLayer<'a>>,
        chart: Option<FrameLayer<'a>>,
    ) -> FrameLayers<'a> {
        FrameLayers {
            viewport: Size::new(800.0, 600.0),
            scale: 2.0,
            page_background: Color::BLACK,
            surface,
            chart,
        }
    }

    #[test]
    fn test_compose_frame_background_only() {
        let mut frame = Scene::new();
        compose_frame(&mut frame, &layers(None, None));
        assert_eq!(frame.encoding().n_paths, 1);
    }

    #[test]
    fn test_compose_frame_masks_surface_layer() {
        let layer = unit_layer();
        let region = Rect::new(10.0, 10.0, 110.0, 110.0);
        let surface = FrameLayer { scene: &layer, region };

        let mut frame = Scene::new();
        compose_frame(&mut frame, &layers(Some(surface), None));
        // Background, the surface content, then one fill per mask.
        let masks = mask_rects(Rect::new(0.0, 0.0, 800.0, 600.0), region);
        assert_eq!(masks.len(), 4);
        assert_eq!(frame.encoding().n_paths as usize, 2 + masks.len());

        // The chart is appended after the masks and is never covered by them.
        let chart = FrameLayer { scene: &layer, region: Rect::new(0.0, 200.0, 400.0, 500.0) };
        compose_frame(&mut frame, &layers(Some(surface), Some(chart)));
        assert_eq!(frame.encoding().n_paths as usize, 3 + masks.len());
    }

    #[test]
    fn test_compose_frame_resets_previous_content() {
        let layer = unit_layer();
        let surface = FrameLayer { scene: &layer, region: Rect::new(10.0, 10.0, 110.0, 110.0) };

        let mut frame = Scene::new();
        compose_frame(&mut frame, &layers(Some(surface), None));
        compose_frame(&mut frame, &layers(None, None));
        assert_eq!(frame.encoding().n_paths, 1);
    }
}
