//! SketchDeck Render Library
//!
//! Vello implementations of the core rendering contracts: a retained scene
//! behind the drawing surface, a chart backend that paints chart layouts,
//! and frame composition for the window.

mod chart;
mod error;
mod frame;
mod surface;

pub use chart::{VelloChart, VelloChartBackend};
pub use error::{RenderResult, RendererError};
pub use frame::{FrameLayer, FrameLayers, compose_frame, mask_rects};
pub use surface::SceneSurface;
