//! Chart configuration, geometry and instance lifecycle.

mod config;
pub mod layout;
mod renderer;

pub use config::{ChartConfig, ChartKind, ChartOptions, ScaleOptions, Series, SeriesColor};
pub use layout::ChartLayout;
pub use renderer::{ChartBackend, ChartError, ChartRegistry, ChartRenderer};
