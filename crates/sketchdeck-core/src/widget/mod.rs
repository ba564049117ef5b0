//! Auxiliary widget models.
//!
//! Each widget owns its state; none of them share data with each other or
//! with the drawing surface and chart.

mod animation;
mod color_picker;
mod counter;
mod gauge;

pub use animation::{FrameId, FrameScheduler};
pub use color_picker::{ColorPicker, SWATCHES};
pub use counter::AnimatedCounter;
pub use gauge::{CircularGauge, ProgressBar};
