//! Core application state and lifecycle.

use std::sync::Arc;
use std::time::Instant;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use sketchdeck_core::{
    DeckConfig, FrameScheduler, InfoPanel, Navigation, Palette, Panel, PanelId, PanelSet,
    SurfaceRegion, WidgetsPanel,
};
use sketchdeck_render::{
    FrameLayer, FrameLayers, RenderResult, RendererError, SceneSurface, VelloChartBackend,
    compose_frame,
};
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::ui::{UiAction, UiState, render_ui};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "SKETCHDECK_CONFIG";

/// Load the configuration named by [`CONFIG_ENV`], falling back to defaults.
pub fn load_config() -> DeckConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return DeckConfig::default();
    };
    match DeckConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config {path}: {e}");
            DeckConfig::default()
        }
    }
}

/// The widgets panel as mounted by the application.
pub type DeckPanel = WidgetsPanel<SceneSurface, VelloChartBackend>;

/// All panels of the shell.
pub struct Panels {
    pub widgets: DeckPanel,
    dom: InfoPanel,
    events: InfoPanel,
    functional: InfoPanel,
    api: InfoPanel,
    typescript: InfoPanel,
}

impl Panels {
    pub fn new(widgets: DeckPanel) -> Self {
        Self {
            widgets,
            dom: InfoPanel::new(PanelId::Dom),
            events: InfoPanel::new(PanelId::Events),
            functional: InfoPanel::new(PanelId::Functional),
            api: InfoPanel::new(PanelId::Api),
            typescript: InfoPanel::new(PanelId::TypeScript),
        }
    }
}

impl PanelSet for Panels {
    fn panel_mut(&mut self, id: PanelId) -> &mut dyn Panel {
        match id {
            PanelId::Dom => &mut self.dom,
            PanelId::Events => &mut self.events,
            PanelId::Functional => &mut self.functional,
            PanelId::Api => &mut self.api,
            PanelId::Widgets => &mut self.widgets,
            PanelId::TypeScript => &mut self.typescript,
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,
    scene: Scene,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // Shell
    navigation: Navigation,
    panels: Panels,
    frames: FrameScheduler,
    started: Instant,
}

impl AppState {
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Hand due animation frames to the active panel.
    fn dispatch_frames(&mut self) {
        let now_ms = self.now_ms();
        let active = self.navigation.active();
        for id in self.frames.take_due() {
            let handled = self.panels.panel_mut(active).on_frame(id, now_ms, &mut self.frames);
            if !handled {
                log::trace!("Dropping frame {id:?}");
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        let widgets = &mut self.panels.widgets;
        match action {
            UiAction::SelectPanel(id) => {
                if let Some(transition) = self.navigation.select(id) {
                    transition.apply(&mut self.panels, &mut self.frames);
                }
            }
            UiAction::SetTool(tool) => widgets.select_tool(tool),
            UiAction::SetStampColor(color) => widgets.surface_mut().set_color(color),
            UiAction::ClearCanvas => widgets.surface_mut().clear(),
            UiAction::Pointer(event) => {
                if let Some(rect) = self.ui_state.canvas_rect {
                    let region = SurfaceRegion::new(
                        Point::new(rect.min.x as f64, rect.min.y as f64),
                        widgets.surface().size(),
                    );
                    widgets.surface_mut().handle_pointer(event, &region);
                }
            }
            UiAction::SetChartKind(kind) => widgets.select_chart_kind(kind),
            UiAction::RandomizeChart => widgets.randomize_chart(&mut rand::rng()),
            UiAction::ResetCounter => widgets.counter_mut().reset(),
            UiAction::TogglePicker => widgets.color_picker_mut().toggle(),
            UiAction::PickColor(color) => widgets.color_picker_mut().select(color),
        }
    }

    /// Track the chart's on-screen size and create the chart once it has one.
    fn sync_chart(&mut self) {
        let Some(rect) = self.ui_state.chart_rect else {
            return;
        };
        let size = Size::new(rect.width() as f64, rect.height() as f64);
        let chart = self.panels.widgets.chart_mut();
        if chart.backend().size() != size {
            chart.backend_mut().set_size(size);
            chart.redraw();
        }
        self.panels.widgets.ensure_chart();
    }

    /// Render the composed scene, then paint egui on top and present.
    fn render(
        &mut self,
        render_cx: &RenderContext,
        base_color: Color,
        primitives: &[egui::ClippedPrimitive],
        textures_delta: &egui::TexturesDelta,
        pixels_per_point: f32,
    ) -> RenderResult<()> {
        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let width = self.surface.config.width;
        let height = self.surface.config.height;
        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a StorageBinding Rgba8Unorm target.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(device, queue, &self.scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load, // Keep Vello content
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer.render(&mut render_pass, primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();
        Ok(())
    }

    /// Rebuild the scene painted beneath the UI.
    fn compose(&mut self, pixels_per_point: f32, page_background: Color) {
        let widgets_active = self.navigation.active() == PanelId::Widgets;
        let widgets = &self.panels.widgets;

        let raster = widgets.surface().raster();
        let surface = match (widgets_active, self.ui_state.canvas_rect, raster) {
            (true, Some(rect), Some(raster)) => Some(FrameLayer {
                scene: raster.scene(),
                region: to_kurbo_rect(rect),
            }),
            _ => None,
        };
        let chart = match (widgets_active, self.ui_state.chart_rect, widgets.chart().instance()) {
            (true, Some(rect), Some(instance)) => Some(FrameLayer {
                scene: instance.scene(),
                region: to_kurbo_rect(rect),
            }),
            _ => None,
        };

        let scale = pixels_per_point as f64;
        let viewport = Size::new(
            self.surface.config.width as f64 / scale,
            self.surface.config.height as f64 / scale,
        );
        compose_frame(
            &mut self.scene,
            &FrameLayers {
                viewport,
                scale,
                page_background,
                surface,
                chart,
            },
        );
    }
}

/// Main application struct.
pub struct App {
    config: DeckConfig,
    palette: Palette,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
}

impl App {
    /// Create a new application. An invalid palette or size falls back to the defaults.
    pub fn new(config: DeckConfig) -> Self {
        let checked = config.validate_sizes().and_then(|()| config.palette());
        let (config, palette) = match checked {
            Ok(palette) => (config, palette),
            Err(e) => {
                log::warn!("Invalid config, using defaults: {e}");
                (DeckConfig::default(), Palette::default())
            }
        };
        Self {
            config,
            palette,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application until the window closes.
    pub async fn run(config: DeckConfig) -> Result<(), winit::error::EventLoopError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::new(config);
        event_loop.run_app(&mut app)
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> RenderResult<AppState> {
        let window_size = self.config.window_size();
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(window_size.width, window_size.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(format!("window: {e}")))?,
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (window_size.width as u32, window_size.height as u32)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {width}x{height}");

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        // Vello renders to Rgba8Unorm; the surface format may differ.
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(visuals());
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let backend = VelloChartBackend::default();
        let mut widgets = WidgetsPanel::from_config(&self.config, &self.palette, backend);
        widgets.surface_mut().attach(SceneSurface::new(self.config.canvas_size()));
        let mut panels = Panels::new(widgets);
        let mut frames = FrameScheduler::new();
        let navigation = Navigation::new(PanelId::default());
        panels.panel_mut(navigation.active()).mount(&mut frames);

        log::info!("SketchDeck initialized - {width}x{height}");

        Ok(AppState {
            window,
            surface,
            vello_renderer,
            texture_blitter,
            scene: Scene::new(),
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            navigation,
            panels,
            frames,
            started: Instant::now(),
        })
    }

    fn redraw(&mut self) {
        let Some(state) = &mut self.state else {
            return;
        };

        state.dispatch_frames();

        let egui_input = state.egui_state.take_egui_input(&state.window);
        let active = state.navigation.active();
        let mut actions = Vec::new();
        let egui_output = state.egui_ctx.run(egui_input, |ctx| {
            actions = render_ui(ctx, &mut state.ui_state, active, &state.panels.widgets);
        });
        for action in actions {
            state.apply_action(action);
        }
        state.sync_chart();

        state.egui_state.handle_platform_output(&state.window, egui_output.platform_output);
        let egui_primitives =
            state.egui_ctx.tessellate(egui_output.shapes, egui_output.pixels_per_point);

        state.compose(egui_output.pixels_per_point, self.palette.page_background);

        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };
        if let Err(e) = state.render(
            render_cx,
            self.palette.page_background,
            &egui_primitives,
            &egui_output.textures_delta,
            egui_output.pixels_per_point,
        ) {
            match e {
                RendererError::Surface(_) => log::warn!("{e}"),
                _ => log::error!("{e}"),
            }
            return;
        }

        let egui_wants_repaint = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if state.frames.has_pending() || egui_wants_repaint {
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        match self.init(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Failed to initialize: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                let active = state.navigation.active();
                state.panels.panel_mut(active).unmount(&mut state.frames);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            if state.frames.has_pending() {
                state.window.request_redraw();
            }
        }
    }
}

fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = sketchdeck_widgets::theme::PAGE_BG;
    visuals.window_fill = sketchdeck_widgets::theme::CARD_BG;
    visuals
}

fn to_kurbo_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.min.x as f64, rect.min.y as f64, rect.max.x as f64, rect.max.y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchdeck_core::ChartKind;

    fn panels() -> Panels {
        let config = DeckConfig::default();
        let palette = config.palette().unwrap();
        let backend = VelloChartBackend::new(Size::new(400.0, 300.0));
        let mut widgets = WidgetsPanel::from_config(&config, &palette, backend);
        widgets.surface_mut().attach(SceneSurface::new(config.canvas_size()));
        Panels::new(widgets)
    }

    #[test]
    fn test_panel_lookup_matches_id() {
        let mut panels = panels();
        for id in PanelId::ALL {
            assert_eq!(panels.panel_mut(id).id(), id);
        }
    }

    #[test]
    fn test_leaving_widgets_releases_chart_and_counter() {
        let mut panels = panels();
        let mut frames = FrameScheduler::new();
        let mut navigation = Navigation::new(PanelId::Dom);
        panels.panel_mut(PanelId::Dom).mount(&mut frames);

        if let Some(transition) = navigation.select(PanelId::Widgets) {
            transition.apply(&mut panels, &mut frames);
        }
        assert!(panels.widgets.chart().is_mounted());
        assert_eq!(panels.widgets.chart().backend().live(), 1);
        assert!(frames.has_pending());

        if let Some(transition) = navigation.select(PanelId::Api) {
            transition.apply(&mut panels, &mut frames);
        }
        assert!(!panels.widgets.chart().is_mounted());
        assert_eq!(panels.widgets.chart().backend().live(), 0);
        assert!(!frames.has_pending());
    }

    #[test]
    fn test_kind_switch_keeps_one_chart_alive() {
        let mut panels = panels();
        let mut frames = FrameScheduler::new();
        panels.widgets.mount(&mut frames);

        for kind in ChartKind::ALL {
            panels.widgets.select_chart_kind(kind);
            assert_eq!(panels.widgets.chart().backend().live(), 1);
        }
    }

    #[test]
    fn test_invalid_size_falls_back_to_defaults() {
        let config = DeckConfig { canvas_height: 0.0, ..DeckConfig::default() };
        let app = App::new(config);
        assert_eq!(app.config, DeckConfig::default());
    }

    #[test]
    fn test_to_kurbo_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(600.0, 400.0));
        let rect = to_kurbo_rect(rect);
        assert_eq!(rect, Rect::new(10.0, 20.0, 610.0, 420.0));
    }
}
