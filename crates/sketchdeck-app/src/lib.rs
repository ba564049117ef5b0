//! SketchDeck Application
//!
//! The application shell: window, GPU surface, egui integration and the
//! panels behind the navigation tabs.

mod app;
mod ui;

pub use app::{App, CONFIG_ENV, DeckPanel, Panels, load_config};
pub use ui::{UiAction, UiState, render_ui};
