//! The widgets panel.
//!
//! Owns the drawing surface, the chart and the auxiliary widgets for one
//! mount of the panel. Nothing here is shared with other panels.

use peniko::Color;
use rand::Rng;

use crate::chart::{ChartBackend, ChartConfig, ChartError, ChartKind, ChartRegistry, ChartRenderer};
use crate::config::{DeckConfig, Palette};
use crate::shell::{Panel, PanelId};
use crate::surface::{DrawingSurface, RasterSurface, Tool};
use crate::widget::{
    AnimatedCounter, CircularGauge, ColorPicker, FrameId, FrameScheduler, ProgressBar,
};

/// Drawing surface, chart and widgets of the widgets panel.
pub struct WidgetsPanel<R: RasterSurface, B: ChartBackend> {
    surface: DrawingSurface<R>,
    chart: ChartRenderer<B>,
    initial_chart: ChartConfig,
    initial_color: Color,
    progress: Vec<ProgressBar>,
    gauge: CircularGauge,
    counter: AnimatedCounter,
    color_picker: ColorPicker,
    mounted: bool,
}

impl<R: RasterSurface, B: ChartBackend> WidgetsPanel<R, B> {
    /// Build an unmounted panel.
    pub fn new(
        surface: DrawingSurface<R>,
        backend: B,
        chart: ChartConfig,
        counter: AnimatedCounter,
    ) -> Self {
        let initial_color = surface.color();
        Self {
            surface,
            chart: ChartRenderer::new(ChartRegistry::init(), backend, chart.clone()),
            initial_chart: chart,
            initial_color,
            progress: default_progress_bars(),
            gauge: CircularGauge::new(65.0, 100.0, "CPU Usage"),
            counter,
            color_picker: ColorPicker::new(),
            mounted: false,
        }
    }

    /// Build an unmounted panel from the deck configuration.
    pub fn from_config(config: &DeckConfig, palette: &Palette, backend: B) -> Self {
        let surface = DrawingSurface::new()
            .with_size(config.canvas_size())
            .with_background(palette.canvas_background)
            .with_color(palette.stamp_color);
        Self::new(
            surface,
            backend,
            ChartConfig::default().with_kind(config.chart_kind),
            AnimatedCounter::new(config.counter_target, config.counter_duration_ms),
        )
    }

    /// Mount the chart if the panel is mounted and the chart is not.
    ///
    /// Used once the chart's target surface becomes ready after mount.
    pub fn ensure_chart(&mut self) {
        if self.mounted && !self.chart.is_mounted() {
            let config = self.chart.config().clone();
            log_chart_result(self.chart.mount(config));
        }
    }

    /// Rebuild the chart as another kind.
    pub fn select_chart_kind(&mut self, kind: ChartKind) {
        if kind != self.chart.kind() {
            let result = self.chart.set_kind(kind);
            log_chart_result(result);
        }
    }

    /// Fill the chart with random values.
    pub fn randomize_chart<G: Rng>(&mut self, rng: &mut G) {
        let result = self.chart.randomize(rng);
        log_chart_result(result);
    }

    /// Pick a drawing tool.
    pub fn select_tool(&mut self, tool: Tool) {
        self.surface.set_tool(tool);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn surface(&self) -> &DrawingSurface<R> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface<R> {
        &mut self.surface
    }

    pub fn chart(&self) -> &ChartRenderer<B> {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut ChartRenderer<B> {
        &mut self.chart
    }

    pub fn progress_bars(&self) -> &[ProgressBar] {
        &self.progress
    }

    pub fn gauge(&self) -> &CircularGauge {
        &self.gauge
    }

    pub fn counter(&self) -> &AnimatedCounter {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut AnimatedCounter {
        &mut self.counter
    }

    pub fn color_picker(&self) -> &ColorPicker {
        &self.color_picker
    }

    pub fn color_picker_mut(&mut self) -> &mut ColorPicker {
        &mut self.color_picker
    }
}

impl<R: RasterSurface, B: ChartBackend> Panel for WidgetsPanel<R, B> {
    fn id(&self) -> PanelId {
        PanelId::Widgets
    }

    /// Start from a blank canvas, the initial chart and a fresh counter.
    fn mount(&mut self, frames: &mut FrameScheduler) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        self.surface.clear();
        self.surface.set_tool(Tool::default());
        self.surface.set_color(self.initial_color);
        self.color_picker = ColorPicker::new();

        let result = self.chart.mount(self.initial_chart.clone());
        log_chart_result(result);
        self.counter.start(frames);
        log::debug!("Widgets panel mounted");
    }

    fn unmount(&mut self, frames: &mut FrameScheduler) {
        self.counter.teardown(frames);
        self.chart.unmount();
        self.surface.end_stroke();
        if self.mounted {
            self.mounted = false;
            log::debug!("Widgets panel unmounted");
        }
    }

    fn on_frame(&mut self, id: FrameId, now_ms: f64, frames: &mut FrameScheduler) -> bool {
        self.counter.on_frame(id, now_ms, frames)
    }
}

fn log_chart_result(result: Result<(), ChartError>) {
    if let Err(e) = result {
        log::warn!("Chart update failed: {e}");
    }
}

fn default_progress_bars() -> Vec<ProgressBar> {
    vec![
        ProgressBar::new(75.0, "Progression générale", Color::from_rgba8(0x64, 0x6c, 0xff, 255)),
        ProgressBar::new(45.0, "Tâches terminées", Color::from_rgba8(0x2e, 0xd5, 0x73, 255)),
        ProgressBar::new(90.0, "Performance", Color::from_rgba8(0xff, 0xa5, 0x02, 255)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockChartBackend, RecordingRaster};
    use kurbo::{Point, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestPanel = WidgetsPanel<RecordingRaster, MockChartBackend>;

    fn panel() -> TestPanel {
        let config = DeckConfig::default();
        let palette = config.palette().unwrap();
        let mut panel = WidgetsPanel::from_config(&config, &palette, MockChartBackend::default());
        panel.surface_mut().attach(RecordingRaster::new(Size::new(600.0, 400.0)));
        panel
    }

    #[test]
    fn test_mount_creates_chart_and_starts_counter() {
        let mut frames = FrameScheduler::new();
        let mut panel = panel();
        panel.mount(&mut frames);

        assert!(panel.is_mounted());
        assert!(panel.chart().is_mounted());
        assert_eq!(panel.chart().backend().live(), 1);
        assert!(panel.counter().is_running());
        assert!(frames.has_pending());
    }

    #[test]
    fn test_unmount_releases_everything() {
        let mut frames = FrameScheduler::new();
        let mut panel = panel();
        panel.mount(&mut frames);
        panel.unmount(&mut frames);

        assert!(!panel.chart().is_mounted());
        assert_eq!(panel.chart().backend().live(), 0);
        assert!(!frames.has_pending());

        // Second unmount is harmless.
        panel.unmount(&mut frames);
        assert_eq!(panel.chart().backend().destroyed, 1);
    }

    #[test]
    fn test_repeated_navigation_does_not_leak() {
        let mut frames = FrameScheduler::new();
        let mut panel = panel();
        for _ in 0..5 {
            panel.mount(&mut frames);
            panel.unmount(&mut frames);
        }
        let backend = panel.chart().backend();
        assert_eq!(backend.created, 5);
        assert_eq!(backend.live(), 0);
        assert!(!frames.has_pending());
    }

    #[test]
    fn test_remount_resets_local_state() {
        let mut frames = FrameScheduler::new();
        let mut panel = panel();
        panel.mount(&mut frames);
        panel.select_tool(Tool::Line);
        panel.surface_mut().begin_stroke(Point::new(10.0, 10.0));
        panel.select_chart_kind(ChartKind::Pie);
        panel.unmount(&mut frames);

        panel.mount(&mut frames);
        assert_eq!(panel.surface().stamp_count(), 0);
        assert_eq!(panel.surface().tool(), Tool::Circle);
        assert!(!panel.surface().is_drawing());
        assert_eq!(panel.chart().kind(), ChartKind::Bar);
    }

    #[test]
    fn test_frames_reach_counter() {
        let mut frames = FrameScheduler::new();
        let mut panel = panel();
        panel.mount(&mut frames);

        for id in frames.take_due() {
            assert!(panel.on_frame(id, 0.0, &mut frames));
        }
        for id in frames.take_due() {
            panel.on_frame(id, 1000.0, &mut frames);
        }
        assert_eq!(panel.counter().displayed(), 617);
    }

    #[test]
    fn test_chart_waits_for_surface() {
        let mut frames = FrameScheduler::new();
        let mut panel = panel();
        panel.chart_mut().backend_mut().unavailable = true;
        panel.mount(&mut frames);
        assert!(!panel.chart().is_mounted());

        panel.chart_mut().backend_mut().unavailable = false;
        panel.ensure_chart();
        assert!(panel.chart().is_mounted());
        panel.ensure_chart();
        assert_eq!(panel.chart().backend().created, 1);
        assert_eq!(panel.chart().backend().max_live, 1);
    }

    #[test]
    fn test_ensure_chart_ignores_unmounted_panel() {
        let mut panel = panel();
        panel.ensure_chart();
        assert!(!panel.chart().is_mounted());
        assert_eq!(panel.chart().backend().created, 0);

        let mut frames = FrameScheduler::new();
        panel.mount(&mut frames);
        panel.unmount(&mut frames);
        panel.ensure_chart();
        assert_eq!(panel.chart().backend().live(), 0);
        assert_eq!(panel.chart().backend().created, 1);
    }

    #[test]
    fn test_kind_switch_and_randomize() {
        let mut frames = FrameScheduler::new();
        let mut panel = panel();
        panel.mount(&mut frames);

        panel.select_chart_kind(ChartKind::Doughnut);
        panel.select_chart_kind(ChartKind::Doughnut);
        assert_eq!(panel.chart().backend().created, 2);
        assert_eq!(panel.chart().backend().live(), 1);

        let mut rng = StdRng::seed_from_u64(3);
        panel.randomize_chart(&mut rng);
        assert_eq!(panel.chart().kind(), ChartKind::Doughnut);
        assert!(panel.chart().config().series[0].values.iter().all(|v| (0.0..100.0).contains(v)));
    }

    #[test]
    fn test_default_widgets() {
        let panel = panel();
        let labels: Vec<_> = panel.progress_bars().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Progression générale", "Tâches terminées", "Performance"]);
        assert!((panel.gauge().fraction() - 0.65).abs() < 1e-12);
        assert_eq!(panel.counter().target(), 1234);
    }
}
