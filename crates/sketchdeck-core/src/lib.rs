//! SketchDeck Core Library
//!
//! Platform-agnostic state and logic for the SketchDeck widgets panel:
//! the shape-stamping drawing surface, the chart lifecycle, the auxiliary
//! widget models and the navigation shell.

pub mod chart;
pub mod color;
pub mod config;
pub mod input;
pub mod panel;
pub mod shell;
pub mod surface;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use chart::{
    ChartBackend, ChartConfig, ChartError, ChartKind, ChartLayout, ChartOptions, ChartRegistry,
    ChartRenderer, Series, SeriesColor,
};
pub use color::{ColorParseError, parse_hex_color, rgba8, to_hex};
pub use config::{ConfigError, DeckConfig, Palette};
pub use input::{PointerEvent, SurfaceRegion};
pub use panel::WidgetsPanel;
pub use shell::{InfoPanel, Navigation, Panel, PanelId, PanelSet, Transition};
pub use surface::{DrawingSurface, RasterSurface, ShapeStamp, Tool};
pub use widget::{AnimatedCounter, CircularGauge, ColorPicker, FrameId, FrameScheduler, ProgressBar};
